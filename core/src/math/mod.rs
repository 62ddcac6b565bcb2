//! Scalar math shared by the BSDF models

mod common;

// Re-export
pub use common::*;
