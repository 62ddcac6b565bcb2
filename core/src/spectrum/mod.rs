//! Spectrum

mod rgb_spectrum;

// Re-export
pub use rgb_spectrum::*;

/// Default to using `RGBSpectrum` for BSDF values.
pub type Spectrum = RGBSpectrum;
