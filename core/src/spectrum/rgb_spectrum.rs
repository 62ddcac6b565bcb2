//! RGB Spectrum.

use crate::math::*;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, Mul, MulAssign, Sub};

/// Number of spectral samples to use for `RGBSpectrum`.
pub const RGB_SAMPLES: usize = 3;

/// RGBSpectrum represents an spectral power distribution (SPD) with
/// a weighted sum of red, green and blue components.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBSpectrum {
    /// The sampled spectral values.
    c: [Float; RGB_SAMPLES],
}

impl RGBSpectrum {
    /// A black spectrum.
    pub const ZERO: Self = Self {
        c: [0.0; RGB_SAMPLES],
    };

    /// A spectrum with value 1 at all wavelengths.
    pub const ONE: Self = Self {
        c: [1.0; RGB_SAMPLES],
    };

    /// Create a new `RGBSpectrum` with a constant value across all
    /// wavelengths.
    ///
    /// * `v` - Constant value.
    pub fn new(v: Float) -> Self {
        let ret = Self {
            c: [v; RGB_SAMPLES],
        };
        assert!(!ret.has_nans());
        ret
    }

    /// Create a new `RGBSpectrum` from red, green and blue components.
    ///
    /// * `r` - Red.
    /// * `g` - Green.
    /// * `b` - Blue.
    pub fn from_rgb(r: Float, g: Float, b: Float) -> Self {
        let ret = Self { c: [r, g, b] };
        assert!(!ret.has_nans());
        ret
    }

    /// Returns true if either sample is NaN.
    pub fn has_nans(&self) -> bool {
        self.c.iter().any(|v| v.is_nan())
    }

    /// Returns true if the values are zero everywhere.
    pub fn is_black(&self) -> bool {
        self.c.iter().all(|v| *v == 0.0)
    }

    /// Returns the average of the sample values.
    pub fn average(&self) -> Float {
        self.c.iter().sum::<Float>() / RGB_SAMPLES as Float
    }

    /// Returns the maximum sample value.
    pub fn max_component_value(&self) -> Float {
        self.c[1..].iter().fold(self.c[0], |m, v| max(m, *v))
    }
}

impl From<[Float; RGB_SAMPLES]> for RGBSpectrum {
    /// Create a new `RGBSpectrum` from RGB values.
    ///
    /// * `c` - Sample values.
    fn from(c: [Float; RGB_SAMPLES]) -> Self {
        Self::from_rgb(c[0], c[1], c[2])
    }
}

impl Add for RGBSpectrum {
    type Output = Self;

    /// Adds the corresponding sample values from another `RGBSpectrum`.
    ///
    /// * `other` - The other `RGBSpectrum`.
    fn add(self, other: Self) -> Self::Output {
        Self {
            c: [
                self.c[0] + other.c[0],
                self.c[1] + other.c[1],
                self.c[2] + other.c[2],
            ],
        }
    }
}

impl AddAssign for RGBSpectrum {
    /// Adds the corresponding sample values from another `RGBSpectrum`.
    ///
    /// * `other` - The other `RGBSpectrum`.
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for RGBSpectrum {
    type Output = Self;

    /// Subtracts the corresponding sample values from another `RGBSpectrum`.
    ///
    /// * `other` - The other `RGBSpectrum`.
    fn sub(self, other: Self) -> Self::Output {
        Self {
            c: [
                self.c[0] - other.c[0],
                self.c[1] - other.c[1],
                self.c[2] - other.c[2],
            ],
        }
    }
}

impl Mul for RGBSpectrum {
    type Output = Self;

    /// Multiplies the corresponding sample values from another `RGBSpectrum`.
    ///
    /// * `other` - The other `RGBSpectrum`.
    fn mul(self, other: Self) -> Self::Output {
        Self {
            c: [
                self.c[0] * other.c[0],
                self.c[1] * other.c[1],
                self.c[2] * other.c[2],
            ],
        }
    }
}

impl Mul<Float> for RGBSpectrum {
    type Output = Self;

    /// Scale the sample values by a constant.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: Float) -> Self::Output {
        Self {
            c: [self.c[0] * f, self.c[1] * f, self.c[2] * f],
        }
    }
}

impl Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;

    /// Scale the sample values by a constant.
    ///
    /// * `s` - The spectrum.
    fn mul(self, s: RGBSpectrum) -> Self::Output {
        s * self
    }
}

impl MulAssign<Float> for RGBSpectrum {
    /// Scale the sample values by a constant.
    ///
    /// * `f` - The scaling factor.
    fn mul_assign(&mut self, f: Float) {
        *self = *self * f;
    }
}

impl Div<Float> for RGBSpectrum {
    type Output = Self;

    /// Divide the sample values by a constant.
    ///
    /// * `f` - The divisor.
    fn div(self, f: Float) -> Self::Output {
        debug_assert!(f != 0.0);
        let inv = 1.0 / f;
        self * inv
    }
}

impl Index<usize> for RGBSpectrum {
    type Output = Float;

    /// Return the sample value at given index.
    ///
    /// * `i` - The index.
    fn index(&self, i: usize) -> &Self::Output {
        &self.c[i]
    }
}

impl fmt::Display for RGBSpectrum {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.c[0], self.c[1], self.c[2])
    }
}
