//! BSDF Models

#[macro_use]
extern crate log;

mod aggregate;
mod cook_torrance;
mod lambertian;
mod phong;
mod registry;

// Re-export
pub use aggregate::*;
pub use cook_torrance::*;
pub use lambertian::*;
pub use phong::*;
pub use registry::*;
