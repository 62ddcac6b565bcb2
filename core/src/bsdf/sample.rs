//! BSDF Sample

use super::*;
use std::fmt;

/// Stores the result of importance sampling a BSDF.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BsdfSample {
    /// The sampled `in` direction.
    pub direction: Vector3f,

    /// Solid angle density of `direction`.
    pub pdf: Float,

    /// The lobe that produced the sample.
    pub flag: BsdfFlag,

    /// Unit the sample was drawn for.
    pub unit: Unit,

    /// Throughput `eval * |cos θ_in| / pdf`.
    pub weight: Spectrum,
}

impl BsdfSample {
    /// Create a new `BsdfSample`.
    ///
    /// * `direction` - The sampled `in` direction.
    /// * `pdf`       - Solid angle density of `direction`.
    /// * `flag`      - The lobe that produced the sample.
    /// * `unit`      - Unit the sample was drawn for.
    /// * `weight`    - Throughput `eval * |cos θ_in| / pdf`.
    pub fn new(direction: Vector3f, pdf: Float, flag: BsdfFlag, unit: Unit, weight: Spectrum) -> Self {
        Self {
            direction,
            pdf,
            flag,
            unit,
            weight,
        }
    }

    /// Returns true if the sample carries a usable direction.
    pub fn is_valid(&self) -> bool {
        self.pdf > 0.0 && !self.flag.is_empty()
    }
}

impl fmt::Display for BsdfSample {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "direction={} pdf={} flag={} unit={} weight={}",
            self.direction, self.pdf, self.flag, self.unit, self.weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_invalid() {
        let s = BsdfSample::default();
        assert!(!s.is_valid());
        assert_eq!(s.pdf, 0.0);
        assert!(s.weight.is_black());
        assert_eq!(s.flag, BsdfFlag::NONE);
    }

    #[test]
    fn needs_density_and_lobe() {
        let w = Vector3f::new(0.0, 0.0, 1.0);
        assert!(BsdfSample::new(w, 1.0, BsdfFlag::DIFFUSE, Unit::Radiance, Spectrum::ONE).is_valid());
        assert!(!BsdfSample::new(w, 0.0, BsdfFlag::DIFFUSE, Unit::Radiance, Spectrum::ONE).is_valid());
        assert!(!BsdfSample::new(w, 1.0, BsdfFlag::NONE, Unit::Radiance, Spectrum::ONE).is_valid());
    }

    #[test]
    fn display() {
        let s = BsdfSample::new(
            Vector3f::new(0.0, 0.0, 1.0),
            0.5,
            BsdfFlag::SPECULAR,
            Unit::Importance,
            Spectrum::from_rgb(1.0, 0.5, 0.0),
        );
        assert_eq!(
            s.to_string(),
            "direction=[0, 0, 1] pdf=0.5 flag=Specular unit=Importance weight=(1,0.5,0)"
        );
    }
}
