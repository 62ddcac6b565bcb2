//! Geometry of shading-frame directions

use crate::math::*;

#[cfg(test)]
#[macro_export]
macro_rules! prop_range {
    ($name: ident, $t: ty, $r: expr) => {
        prop_compose! {
            fn $name()(f in $r) -> $t {
                f
            }
        }
    };
}

/// Generates a proptest strategy producing unit directions in the upper
/// hemisphere of the shading frame.
#[cfg(test)]
#[macro_export]
macro_rules! prop_hemisphere_direction {
    ($name: ident) => {
        prop_compose! {
            fn $name()(u0 in 0.0..1.0f32, u1 in 0.0..1.0f32) -> Vector3f {
                let cos_theta = 0.05 + 0.9 * u0;
                let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
                spherical_direction(sin_theta, cos_theta, TWO_PI * u1)
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_point2 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr) -> Point2<$t> {
                Point2 { x, y }
            }
        }
    };
}

mod common;
mod point2;
mod spherical;
mod vector3;

// Re-export
pub use common::*;
pub use point2::*;
pub use spherical::*;
pub use vector3::*;
