//! Core

extern crate bitflags;
#[macro_use]
extern crate log;

// Re-export.
pub mod bsdf;
pub mod geometry;
pub mod math;
pub mod paramset;
pub mod sampling;
pub mod spectrum;
