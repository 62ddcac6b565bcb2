//! Cook-Torrance

use bbm::bsdf::*;
use bbm::geometry::*;
use bbm::math::*;
use bbm::paramset::*;
use bbm::reflect_attributes;
use bbm::spectrum::*;
use std::fmt;

/// Microfacet reflection from a rough dielectric surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CookTorrance {
    /// Specular reflectance scale.
    pub ks: Spectrum,

    /// Roughness, used as the distribution's `alpha`.
    pub roughness: Float,

    /// Index of refraction of the surface.
    pub eta: Float,

    /// Microfacet normal distribution.
    pub distribution: Distribution,
}

reflect_attributes!(CookTorrance { ks, roughness, eta, distribution });

impl CookTorrance {
    /// Create a new `CookTorrance`.
    ///
    /// * `ks`           - Specular reflectance scale.
    /// * `roughness`    - Roughness.
    /// * `eta`          - Index of refraction.
    /// * `distribution` - Microfacet normal distribution.
    pub fn new(ks: Spectrum, roughness: Float, eta: Float, distribution: Distribution) -> Self {
        Self {
            ks,
            roughness,
            eta,
            distribution,
        }
    }

    fn alpha(&self) -> Float {
        max(self.roughness, MIN_ALPHA)
    }

    fn active(component: BsdfFlag, mask: Mask) -> bool {
        mask && component.selects(BsdfFlag::SPECULAR)
    }

    /// Returns the normalized half vector or `None` when `wi` and `wo` cancel.
    fn half_vector(wi: &Vector3f, wo: &Vector3f) -> Option<Vector3f> {
        let wh = *wi + *wo;
        if wh.length_squared() == 0.0 {
            None
        } else {
            Some(wh.normalize())
        }
    }
}

impl Default for CookTorrance {
    fn default() -> Self {
        Self::new(Spectrum::ONE, 0.1, 1.5, Distribution::Ggx)
    }
}

impl BsdfModel for CookTorrance {
    const NAME: &'static str = "CookTorrance";
    type Format = ReflectForm;

    fn eval(&self, wi: &Vector3f, wo: &Vector3f, component: BsdfFlag, unit: Unit, mask: Mask) -> Spectrum {
        let (wi, wo) = unit.orient(wi, wo);
        let cos_i = cos_theta(wi);
        let cos_o = cos_theta(wo);
        if !Self::active(component, mask) || cos_i <= 0.0 || cos_o <= 0.0 {
            return Spectrum::ZERO;
        }

        match Self::half_vector(wi, wo) {
            Some(wh) => {
                let alpha = self.alpha();
                let d = self.distribution.d(&wh, alpha);
                let g = self.distribution.g(wo, wi, alpha);
                let f = fr_dielectric(wi.dot(&wh), 1.0, self.eta);
                self.ks * (d * g * f / (4.0 * cos_i * cos_o))
            }
            None => Spectrum::ZERO,
        }
    }

    fn sample(&self, wo: &Vector3f, xi: &Point2f, component: BsdfFlag, unit: Unit, mask: Mask) -> BsdfSample {
        if !Self::active(component, mask) || cos_theta(wo) <= 0.0 {
            return BsdfSample::default();
        }

        let wh = self.distribution.sample_wh(xi, self.alpha());
        if wo.dot(&wh) <= 0.0 {
            return BsdfSample::default();
        }

        let wi = reflect(wo, &wh);
        if cos_theta(&wi) <= 0.0 {
            return BsdfSample::default();
        }

        let pdf = self.pdf(&wi, wo, component, unit, mask);
        if pdf <= 0.0 {
            return BsdfSample::default();
        }
        let weight = self.eval(&wi, wo, component, unit, mask) * (cos_theta(&wi) / pdf);
        BsdfSample::new(wi, pdf, BsdfFlag::SPECULAR, unit, weight)
    }

    fn pdf(&self, wi: &Vector3f, wo: &Vector3f, component: BsdfFlag, _unit: Unit, mask: Mask) -> Float {
        if !Self::active(component, mask) || cos_theta(wi) <= 0.0 || cos_theta(wo) <= 0.0 {
            return 0.0;
        }

        match Self::half_vector(wi, wo) {
            Some(wh) => {
                let cos_oh = wo.dot(&wh);
                if cos_oh <= 0.0 {
                    0.0
                } else {
                    // Change of variables from the half vector to `wi`.
                    self.distribution.pdf(&wh, self.alpha()) / (4.0 * cos_oh)
                }
            }
            None => 0.0,
        }
    }

    fn reflectance(&self, wo: &Vector3f, component: BsdfFlag, unit: Unit, mask: Mask) -> Spectrum {
        estimate_reflectance(self, wo, component, unit, mask)
    }
}

impl fmt::Display for CookTorrance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ModelDisplay::new(self), f)
    }
}

impl TryFrom<&ParamSet> for CookTorrance {
    type Error = ParamError;

    /// Create a Cook-Torrance model from given parameter set.
    ///
    /// * `params` - Parameter set.
    fn try_from(params: &ParamSet) -> Result<Self, Self::Error> {
        let ks = params.find_spectrum("ks", Spectrum::ONE)?;
        let roughness = params.find_one_float("roughness", 0.1)?;
        let eta = params.find_one_float("eta", 1.5)?;
        let distribution: Distribution = params
            .find_one_string("distribution", String::from("ggx"))?
            .parse()?;

        if !(roughness > 0.0) {
            return Err(ParamError::OutOfRange {
                name: String::from("roughness"),
                value: roughness,
            });
        }
        if !(eta > 0.0) {
            return Err(ParamError::OutOfRange {
                name: String::from("eta"),
                value: eta,
            });
        }
        if roughness < MIN_ALPHA {
            debug!("Cook-Torrance roughness {} clamped to {}.", roughness, MIN_ALPHA);
        }
        Ok(Self::new(ks, roughness, eta, distribution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use float_cmp::approx_eq;

    fn rough(distribution: Distribution) -> CookTorrance {
        CookTorrance::new(Spectrum::ONE, 0.5, 1.5, distribution)
    }

    #[test]
    fn prints_attributes() {
        assert_eq!(
            CookTorrance::default().to_string(),
            "CookTorrance(ks=(1,1,1), roughness=0.1, eta=1.5, distribution=ggx)"
        );
    }

    #[test]
    fn is_a_specular_model() {
        let m = CookTorrance::default();
        let wo = spherical_direction(0.5, (0.75 as Float).sqrt(), 0.3);
        let wi = mirror(&wo);
        assert!(!m.eval_with(&wi, &wo).call().is_black());
        let diffuse = m.eval_args().wi(&wi).wo(&wo).component(BsdfFlag::DIFFUSE).call();
        assert!(diffuse.is_black());
        assert_eq!(m.pdf_args().wi(&wi).wo(&wo).component(BsdfFlag::DIFFUSE).call(), 0.0);
    }

    #[test]
    fn normal_incidence_uses_fresnel_at_normal() {
        let m = rough(Distribution::Beckmann);
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let expected = m.distribution.d(&n, 0.5) * fr_dielectric(1.0, 1.0, 1.5) / 4.0;
        let f = m.eval_with(&n, &n).call();
        assert!(approx_eq!(Float, f[0], expected, epsilon = 1e-5));
    }

    #[test]
    fn sampling_is_consistent() {
        for d in [Distribution::Beckmann, Distribution::Ggx] {
            check_sample_consistency(&rough(d), BsdfFlag::ALL, Unit::Radiance);
            check_sample_consistency(&rough(d), BsdfFlag::SPECULAR, Unit::Importance);
        }
    }

    #[test]
    fn pdf_integrates_to_at_most_one() {
        for d in [Distribution::Beckmann, Distribution::Ggx] {
            for wo in directions() {
                let total = pdf_integral(&rough(d), &wo, BsdfFlag::ALL);
                assert!(total <= 1.0 + 2e-2, "{} {}", d, total);
            }
        }
    }

    #[test]
    fn reflectance_is_bounded() {
        let m = CookTorrance::new(Spectrum::ONE, 0.3, 100.0, Distribution::Ggx);
        for wo in directions() {
            let r = m.reflectance_with(&wo).call();
            assert!(r.max_component_value() <= 1.0, "{}", r);
            assert!(r.max_component_value() > 0.5, "{}", r);
        }
    }

    #[test]
    fn masked_off() {
        check_masked_off(&rough(Distribution::Ggx));
    }

    #[test]
    fn adjoint_is_transpose() {
        check_adjoint_is_transpose(&rough(Distribution::Beckmann));
    }

    #[test]
    fn from_params() {
        let params = ParamSet::parse(&["roughness=0.3", "distribution=beckmann", "eta=1.33"]).unwrap();
        let m = CookTorrance::try_from(&params).unwrap();
        assert_eq!(m, CookTorrance::new(Spectrum::ONE, 0.3, 1.33, Distribution::Beckmann));

        let params = ParamSet::parse(&["distribution=blinn"]).unwrap();
        assert!(matches!(
            CookTorrance::try_from(&params),
            Err(ParamError::UnknownName { kind: "distribution", .. })
        ));

        let params = ParamSet::parse(&["roughness=0"]).unwrap();
        assert!(matches!(CookTorrance::try_from(&params), Err(ParamError::OutOfRange { .. })));
    }
}
