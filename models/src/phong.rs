//! Modified Phong
//!
//! Energy normalized Phong with a diffuse lobe and a glossy lobe around the
//! mirror direction.

use bbm::bsdf::*;
use bbm::geometry::*;
use bbm::math::*;
use bbm::paramset::*;
use bbm::reflect_attributes;
use bbm::sampling::*;
use bbm::spectrum::*;
use std::fmt;

/// Modified Phong BSDF.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Phong {
    /// Diffuse reflectance.
    pub kd: Spectrum,

    /// Specular reflectance.
    pub ks: Spectrum,

    /// Exponent of the glossy lobe.
    pub sharpness: Float,
}

reflect_attributes!(Phong { kd, ks, sharpness });

impl Phong {
    /// Create a new `Phong`.
    ///
    /// * `kd`        - Diffuse reflectance.
    /// * `ks`        - Specular reflectance.
    /// * `sharpness` - Exponent of the glossy lobe.
    pub fn new(kd: Spectrum, ks: Spectrum, sharpness: Float) -> Self {
        Self { kd, ks, sharpness }
    }

    /// Returns the probabilities of picking the diffuse and the specular lobe.
    ///
    /// * `component` - Lobes to consider.
    fn lobe_weights(&self, component: BsdfFlag) -> (Float, Float) {
        let pd = if component.selects(BsdfFlag::DIFFUSE) {
            self.kd.average()
        } else {
            0.0
        };
        let ps = if component.selects(BsdfFlag::SPECULAR) {
            self.ks.average()
        } else {
            0.0
        };
        let total = pd + ps;
        if total <= 0.0 {
            (0.0, 0.0)
        } else {
            (pd / total, ps / total)
        }
    }

    /// Cosine of the angle between `wi` and the mirror direction of `wo`.
    fn cos_alpha(wi: &Vector3f, wo: &Vector3f) -> Float {
        mirror(wo).dot(wi)
    }
}

impl Default for Phong {
    fn default() -> Self {
        Self::new(Spectrum::new(0.5), Spectrum::new(0.2), 32.0)
    }
}

impl BsdfModel for Phong {
    const NAME: &'static str = "Phong";
    type Format = ReflectForm;

    fn eval(&self, wi: &Vector3f, wo: &Vector3f, component: BsdfFlag, unit: Unit, mask: Mask) -> Spectrum {
        let (wi, wo) = unit.orient(wi, wo);
        if !mask || cos_theta(wi) <= 0.0 || cos_theta(wo) <= 0.0 {
            return Spectrum::ZERO;
        }

        let mut f = Spectrum::ZERO;
        if component.selects(BsdfFlag::DIFFUSE) {
            f += self.kd * INV_PI;
        }
        if component.selects(BsdfFlag::SPECULAR) {
            let cos_alpha = Self::cos_alpha(wi, wo);
            if cos_alpha > 0.0 {
                let n = self.sharpness;
                f += self.ks * ((n + 2.0) * INV_TWO_PI * cos_alpha.powf(n));
            }
        }
        f
    }

    fn sample(&self, wo: &Vector3f, xi: &Point2f, component: BsdfFlag, unit: Unit, mask: Mask) -> BsdfSample {
        let (pd, ps) = self.lobe_weights(component);
        if !mask || cos_theta(wo) <= 0.0 || pd + ps <= 0.0 {
            return BsdfSample::default();
        }

        let (wi, flag) = if xi[0] < pd {
            let u = Point2f::new(min(xi[0] / pd, ONE_MINUS_EPSILON), xi[1]);
            (cosine_sample_hemisphere(&u), BsdfFlag::DIFFUSE)
        } else {
            let u = Point2f::new(min((xi[0] - pd) / ps, ONE_MINUS_EPSILON), xi[1]);
            let r = mirror(wo);
            let (t, b) = coordinate_system(&r);
            let l = power_cosine_sample(&u, self.sharpness);
            (t * l.x + b * l.y + r * l.z, BsdfFlag::SPECULAR)
        };
        if cos_theta(&wi) <= 0.0 {
            return BsdfSample::default();
        }

        let pdf = self.pdf(&wi, wo, component, unit, mask);
        if pdf <= 0.0 {
            return BsdfSample::default();
        }
        let weight = self.eval(&wi, wo, component, unit, mask) * (cos_theta(&wi) / pdf);
        BsdfSample::new(wi, pdf, flag, unit, weight)
    }

    fn pdf(&self, wi: &Vector3f, wo: &Vector3f, component: BsdfFlag, _unit: Unit, mask: Mask) -> Float {
        let (pd, ps) = self.lobe_weights(component);
        if !mask || cos_theta(wi) <= 0.0 || cos_theta(wo) <= 0.0 {
            return 0.0;
        }
        pd * cosine_hemisphere_pdf(cos_theta(wi))
            + ps * power_cosine_pdf(Self::cos_alpha(wi, wo), self.sharpness)
    }

    fn reflectance(&self, wo: &Vector3f, component: BsdfFlag, unit: Unit, mask: Mask) -> Spectrum {
        estimate_reflectance(self, wo, component, unit, mask)
    }
}

impl fmt::Display for Phong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ModelDisplay::new(self), f)
    }
}

impl TryFrom<&ParamSet> for Phong {
    type Error = ParamError;

    /// Create a Phong model from given parameter set.
    ///
    /// * `params` - Parameter set.
    fn try_from(params: &ParamSet) -> Result<Self, Self::Error> {
        let kd = params.find_spectrum("kd", Spectrum::new(0.5))?;
        let ks = params.find_spectrum("ks", Spectrum::new(0.2))?;
        let sharpness = params.find_one_float("sharpness", 32.0)?;
        if !(sharpness >= 0.0) {
            return Err(ParamError::OutOfRange {
                name: String::from("sharpness"),
                value: sharpness,
            });
        }
        if (kd + ks).max_component_value() > 1.0 {
            warn!("Phong kd + ks = {} is not energy conserving.", kd + ks);
        }
        Ok(Self::new(kd, ks, sharpness))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use float_cmp::approx_eq;

    #[test]
    fn prints_attributes() {
        let m = Phong::new(Spectrum::new(0.5), Spectrum::from_rgb(1.0, 0.0, 0.0), 10.0);
        assert_eq!(m.to_string(), "Phong(kd=(0.5,0.5,0.5), ks=(1,0,0), sharpness=10)");
    }

    #[test]
    fn peak_is_at_mirror_direction() {
        let m = Phong::new(Spectrum::ZERO, Spectrum::ONE, 20.0);
        let wo = spherical_direction(0.6, 0.8, 1.0);
        let wi = mirror(&wo);
        let peak = m.eval_with(&wi, &wo).call();
        assert!(approx_eq!(Float, peak[0], 22.0 * INV_TWO_PI, epsilon = 1e-3));
        for other in directions() {
            assert!(m.eval_with(&other, &wo).call()[0] <= peak[0] + 1e-4);
        }
    }

    #[test]
    fn components_select_lobes() {
        let m = Phong::default();
        for wo in directions() {
            for wi in directions() {
                let all = m.eval_with(&wi, &wo).call();
                let d = m.eval_args().wi(&wi).wo(&wo).component(BsdfFlag::DIFFUSE).call();
                let s = m.eval_args().wi(&wi).wo(&wo).component(BsdfFlag::SPECULAR).call();
                assert_eq!(d, m.kd * INV_PI);
                for i in 0..3 {
                    assert!(approx_eq!(Float, all[i], d[i] + s[i], epsilon = 1e-4));
                }
                assert_eq!(m.eval_args().wi(&wi).wo(&wo).component(BsdfFlag::NONE).call(), Spectrum::ZERO);
            }
        }
    }

    #[test]
    fn sampling_is_consistent() {
        let m = Phong::default();
        check_sample_consistency(&m, BsdfFlag::ALL, Unit::Radiance);
        check_sample_consistency(&m, BsdfFlag::SPECULAR, Unit::Radiance);
        check_sample_consistency(&m, BsdfFlag::DIFFUSE, Unit::Importance);
    }

    #[test]
    fn sampled_lobes_respect_component() {
        let m = Phong::default();
        let wo = spherical_direction(0.5, (0.75 as Float).sqrt(), 0.0);
        for xi in bbm::sampling::stratified_grid(4) {
            let s = m.sample_args().wo(&wo).xi(&xi).component(BsdfFlag::DIFFUSE).call();
            assert_eq!(s.flag, BsdfFlag::DIFFUSE);
        }
    }

    #[test]
    fn pdf_integrates_to_at_most_one() {
        let m = Phong::new(Spectrum::new(0.3), Spectrum::new(0.3), 8.0);
        for wo in directions() {
            let total = pdf_integral(&m, &wo, BsdfFlag::ALL);
            assert!(total <= 1.0 + 1e-2, "{}", total);
        }
        let total = pdf_integral(&m, &Vector3f::new(0.0, 0.0, 1.0), BsdfFlag::ALL);
        assert!(approx_eq!(Float, total, 1.0, epsilon = 2e-2));
    }

    #[test]
    fn diffuse_reflectance_matches_kd() {
        let m = Phong::default();
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let r = m.reflectance_args().wo(&wo).component(BsdfFlag::DIFFUSE).call();
        for i in 0..3 {
            assert!(approx_eq!(Float, r[i], m.kd[i], epsilon = 1e-4));
        }
    }

    #[test]
    fn reflectance_does_not_exceed_one() {
        let m = Phong::new(Spectrum::new(0.4), Spectrum::new(0.4), 16.0);
        for wo in directions() {
            let r = m.reflectance_with(&wo).call();
            assert!(r.max_component_value() <= 1.0, "{}", r);
            assert!(r.max_component_value() >= 0.35, "{}", r);
        }
    }

    #[test]
    fn masked_off() {
        check_masked_off(&Phong::default());
    }

    #[test]
    fn adjoint_is_transpose() {
        check_adjoint_is_transpose(&Phong::default());
    }

    #[test]
    fn from_params() {
        let params = ParamSet::parse(&["kd=0.1", "ks=0.2,0.3,0.4", "sharpness=5"]).unwrap();
        let m = Phong::try_from(&params).unwrap();
        assert_eq!(m, Phong::new(Spectrum::new(0.1), Spectrum::from_rgb(0.2, 0.3, 0.4), 5.0));

        let params = ParamSet::parse(&["sharpness=-1"]).unwrap();
        assert!(matches!(Phong::try_from(&params), Err(ParamError::OutOfRange { .. })));
    }
}
