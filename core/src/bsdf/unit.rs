//! Radiometric units

use super::*;
use crate::paramset::ParamError;
use std::fmt;
use std::str::FromStr;

/// Selects between the regular BSDF and its adjoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Regular BSDF; `in` is the light direction, `out` the view direction.
    Radiance,

    /// Adjoint BSDF used when tracing importance from the camera.
    Importance,
}

impl Unit {
    /// Returns true for the adjoint BSDF.
    pub fn is_adjoint(&self) -> bool {
        *self == Self::Importance
    }

    /// Returns the other unit.
    pub fn adjoint(&self) -> Self {
        match self {
            Self::Radiance => Self::Importance,
            Self::Importance => Self::Radiance,
        }
    }

    /// Returns the `(in, out)` pair in the order expected by the regular BSDF.
    /// The adjoint of a reflection-only BSDF is its transpose.
    ///
    /// * `wi` - The `in` direction.
    /// * `wo` - The `out` direction.
    pub fn orient<'a>(&self, wi: &'a Vector3f, wo: &'a Vector3f) -> (&'a Vector3f, &'a Vector3f) {
        match self {
            Self::Radiance => (wi, wo),
            Self::Importance => (wo, wi),
        }
    }
}

impl Default for Unit {
    /// Returns `Unit::Radiance`.
    fn default() -> Self {
        DEFAULT_UNIT
    }
}

impl fmt::Display for Unit {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radiance => write!(f, "Radiance"),
            Self::Importance => write!(f, "Importance"),
        }
    }
}

impl FromStr for Unit {
    type Err = ParamError;

    /// Parses a unit name (`radiance` or `importance`).
    ///
    /// * `s` - The unit name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "radiance" => Ok(Self::Radiance),
            "importance" => Ok(Self::Importance),
            _ => Err(ParamError::UnknownName {
                kind: "unit",
                name: s.to_string(),
            }),
        }
    }
}
