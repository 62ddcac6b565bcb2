//! Microfacet distributions
//!
//! Isotropic normal distributions parameterized by a roughness `alpha`, with
//! the Smith masking-shadowing approximation.

use super::*;
use crate::paramset::ParamError;
use std::fmt;
use std::str::FromStr;

/// Smallest `alpha` used; smaller values are numerically unstable.
pub const MIN_ALPHA: Float = 1e-3;

/// Microfacet normal distribution.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Distribution {
    /// Beckmann–Spizzichino, a Gaussian distribution of slopes.
    #[default]
    Beckmann,

    /// Trowbridge-Reitz (GGX).
    Ggx,
}

impl Distribution {
    /// Return the differential area of microfacets oriented with the surface
    /// normal `wh`.
    ///
    /// * `wh`    - A sample normal from the distrubition of normal vectors.
    /// * `alpha` - Roughness.
    pub fn d(&self, wh: &Vector3f, alpha: Float) -> Float {
        let tan2_theta = tan_2_theta(wh);
        if tan2_theta.is_infinite() || tan2_theta.is_nan() {
            return 0.0;
        }

        let alpha2 = alpha * alpha;
        let cos4_theta = cos_2_theta(wh) * cos_2_theta(wh);
        match self {
            Self::Beckmann => (-tan2_theta / alpha2).exp() / (PI * alpha2 * cos4_theta),
            Self::Ggx => {
                let e = 1.0 + tan2_theta / alpha2;
                1.0 / (PI * alpha2 * cos4_theta * e * e)
            }
        }
    }

    /// Returns the invisible masked microfacet area per visible microfacet area.
    ///
    /// * `w`     - Direction.
    /// * `alpha` - Roughness.
    pub fn lambda(&self, w: &Vector3f, alpha: Float) -> Float {
        let abs_tan_theta = abs(tan_theta(w));
        if abs_tan_theta.is_infinite() || abs_tan_theta.is_nan() {
            return 0.0;
        }

        match self {
            Self::Beckmann => {
                let a = 1.0 / (alpha * abs_tan_theta);
                if a >= 1.6 {
                    0.0
                } else {
                    (1.0 - 1.259 * a + 0.396 * a * a) / (3.535 * a + 2.181 * a * a)
                }
            }
            Self::Ggx => {
                let alpha2_tan2_theta = (alpha * abs_tan_theta) * (alpha * abs_tan_theta);
                (-1.0 + (1.0 + alpha2_tan2_theta).sqrt()) / 2.0
            }
        }
    }

    /// Smith's masking function; the fraction of microfacets visible from `w`.
    ///
    /// * `w`     - Direction.
    /// * `alpha` - Roughness.
    pub fn g1(&self, w: &Vector3f, alpha: Float) -> Float {
        1.0 / (1.0 + self.lambda(w, alpha))
    }

    /// Returns the fraction of microfacets visible from both `wo` and `wi`.
    ///
    /// * `wo`    - Outgoing direction.
    /// * `wi`    - Incident direction.
    /// * `alpha` - Roughness.
    pub fn g(&self, wo: &Vector3f, wi: &Vector3f, alpha: Float) -> Float {
        1.0 / (1.0 + self.lambda(wo, alpha) + self.lambda(wi, alpha))
    }

    /// Samples a microfacet normal in the upper hemisphere proportionally to
    /// `D(wh) cos θh`.
    ///
    /// * `u`     - The 2D uniform random values.
    /// * `alpha` - Roughness.
    pub fn sample_wh(&self, u: &Point2f, alpha: Float) -> Vector3f {
        let alpha2 = alpha * alpha;
        let tan2_theta = match self {
            Self::Beckmann => -alpha2 * (1.0 - u[0]).ln(),
            Self::Ggx => alpha2 * u[0] / max(1.0 - u[0], 1e-7),
        };
        let phi = TWO_PI * u[1];

        let cos_theta = 1.0 / (1.0 + tan2_theta).sqrt();
        let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
        spherical_direction(sin_theta, cos_theta, phi)
    }

    /// Evaluates the density of `sample_wh` with respect to solid angle.
    ///
    /// * `wh`    - A microfacet normal.
    /// * `alpha` - Roughness.
    pub fn pdf(&self, wh: &Vector3f, alpha: Float) -> Float {
        self.d(wh, alpha) * abs_cos_theta(wh)
    }
}

impl fmt::Display for Distribution {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beckmann => write!(f, "beckmann"),
            Self::Ggx => write!(f, "ggx"),
        }
    }
}

impl FromStr for Distribution {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beckmann" => Ok(Self::Beckmann),
            "ggx" | "trowbridgereitz" => Ok(Self::Ggx),
            _ => Err(ParamError::UnknownName {
                kind: "distribution",
                name: s.to_string(),
            }),
        }
    }
}
