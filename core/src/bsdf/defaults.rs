//! Framework-wide defaults for the optional BSDF arguments

use super::*;

/// Default lobe selection: every lobe participates.
pub const DEFAULT_COMPONENT: BsdfFlag = BsdfFlag::ALL;

/// Default unit: the regular (non-adjoint) BSDF.
pub const DEFAULT_UNIT: Unit = Unit::Radiance;

/// Default mask: every lane is active.
pub const DEFAULT_MASK: Mask = true;
