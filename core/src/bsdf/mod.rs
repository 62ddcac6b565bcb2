//! BSDF models
//!
//! Convention regarding the `in` and `out` directions: BSDF models follow the
//! convention of Eric Veach, namely `in` is the sampled direction and
//! transport flows from `-in` to `out`. The physical meaning of `in` and `out`
//! switches between the regular BSDF (`Unit::Radiance`) and the adjoint BSDF
//! (`Unit::Importance`). For `Unit::Radiance`, `in` is the light direction
//! and `out` is the view direction.
//!
//! Printing of a BSDF model starts with its name followed by:
//! + the model's textual form if it has one, else
//! + the reflected attribute listing if the model supports reflection, else
//! + an empty `()`.

use crate::geometry::*;
use crate::math::*;
use crate::spectrum::*;

mod defaults;
mod flag;
mod forward;
mod fresnel;
mod microfacet;
mod model;
mod print;
mod reflection;
mod sample;
mod unit;

// Re-export
pub use defaults::*;
pub use flag::*;
pub use forward::*;
pub use fresnel::*;
pub use microfacet::*;
pub use model::*;
pub use print::*;
pub use reflection::*;
pub use sample::*;
pub use unit::*;

/// Per-lane activation predicate. Scalar evaluation has a single lane.
pub type Mask = bool;
