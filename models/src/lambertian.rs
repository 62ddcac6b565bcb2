//! Lambertian

use bbm::bsdf::*;
use bbm::geometry::*;
use bbm::math::*;
use bbm::paramset::*;
use bbm::reflect_attributes;
use bbm::sampling::*;
use bbm::spectrum::*;
use std::fmt;

/// Ideal diffuse reflection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lambertian {
    /// Fraction of incident light that is scattered.
    pub albedo: Spectrum,
}

reflect_attributes!(Lambertian { albedo });

impl Lambertian {
    /// Create a new `Lambertian`.
    ///
    /// * `albedo` - Fraction of incident light that is scattered.
    pub fn new(albedo: Spectrum) -> Self {
        Self { albedo }
    }

    /// Returns true if the lobe takes part in a query.
    fn active(component: BsdfFlag, mask: Mask) -> bool {
        mask && component.selects(BsdfFlag::DIFFUSE)
    }
}

impl Default for Lambertian {
    fn default() -> Self {
        Self::new(Spectrum::new(0.5))
    }
}

impl BsdfModel for Lambertian {
    const NAME: &'static str = "Lambertian";
    type Format = ReflectForm;

    fn eval(&self, wi: &Vector3f, wo: &Vector3f, component: BsdfFlag, _unit: Unit, mask: Mask) -> Spectrum {
        if !Self::active(component, mask) || cos_theta(wi) <= 0.0 || cos_theta(wo) <= 0.0 {
            return Spectrum::ZERO;
        }
        self.albedo * INV_PI
    }

    fn sample(&self, wo: &Vector3f, xi: &Point2f, component: BsdfFlag, unit: Unit, mask: Mask) -> BsdfSample {
        if !Self::active(component, mask) || cos_theta(wo) <= 0.0 {
            return BsdfSample::default();
        }

        let wi = cosine_sample_hemisphere(xi);
        let pdf = cosine_hemisphere_pdf(cos_theta(&wi));
        if pdf <= 0.0 {
            return BsdfSample::default();
        }

        // f cos θ / pdf reduces to the albedo.
        BsdfSample::new(wi, pdf, BsdfFlag::DIFFUSE, unit, self.albedo)
    }

    fn pdf(&self, wi: &Vector3f, wo: &Vector3f, component: BsdfFlag, _unit: Unit, mask: Mask) -> Float {
        if !Self::active(component, mask) || cos_theta(wo) <= 0.0 {
            return 0.0;
        }
        cosine_hemisphere_pdf(cos_theta(wi))
    }

    fn reflectance(&self, wo: &Vector3f, component: BsdfFlag, _unit: Unit, mask: Mask) -> Spectrum {
        if !Self::active(component, mask) || cos_theta(wo) <= 0.0 {
            return Spectrum::ZERO;
        }
        self.albedo
    }
}

impl fmt::Display for Lambertian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ModelDisplay::new(self), f)
    }
}

impl TryFrom<&ParamSet> for Lambertian {
    type Error = ParamError;

    /// Create a Lambertian model from given parameter set.
    ///
    /// * `params` - Parameter set.
    fn try_from(params: &ParamSet) -> Result<Self, Self::Error> {
        let albedo = params.find_spectrum("albedo", Spectrum::new(0.5))?;
        if albedo.max_component_value() > 1.0 {
            warn!("Lambertian albedo {} reflects more light than it receives.", albedo);
        }
        Ok(Self::new(albedo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use float_cmp::approx_eq;

    fn grey() -> Lambertian {
        Lambertian::new(Spectrum::from_rgb(0.2, 0.4, 0.6))
    }

    #[test]
    fn prints_attributes() {
        assert_eq!(Lambertian::default().to_string(), "Lambertian(albedo=(0.5,0.5,0.5))");
        assert_eq!(grey().display().to_string(), "Lambertian(albedo=(0.2,0.4,0.6))");
    }

    #[test]
    fn eval_is_constant_over_hemisphere() {
        let m = grey();
        for wi in directions() {
            for wo in directions() {
                assert_eq!(m.eval_with(&wi, &wo).call(), m.albedo * INV_PI);
            }
        }
    }

    #[test]
    fn lower_hemisphere_is_black() {
        let m = grey();
        let up = Vector3f::new(0.0, 0.0, 1.0);
        let down = Vector3f::new(0.0, 0.0, -1.0);
        assert_eq!(m.eval_with(&down, &up).call(), Spectrum::ZERO);
        assert_eq!(m.eval_with(&up, &down).call(), Spectrum::ZERO);
        assert_eq!(m.pdf_with(&down, &up).call(), 0.0);
        assert!(!m.sample_with(&down, &Point2f::new(0.5, 0.5)).call().is_valid());
    }

    #[test]
    fn specular_component_is_black() {
        let m = grey();
        let w = Vector3f::new(0.0, 0.0, 1.0);
        let r = m.eval_args().wi(&w).wo(&w).component(BsdfFlag::SPECULAR).call();
        assert_eq!(r, Spectrum::ZERO);
        let s = m
            .sample_args()
            .wo(&w)
            .xi(&Point2f::new(0.5, 0.5))
            .component(BsdfFlag::SPECULAR)
            .call();
        assert!(!s.is_valid());
    }

    #[test]
    fn reflectance_is_albedo() {
        let m = grey();
        for wo in directions() {
            assert_eq!(m.reflectance_with(&wo).call(), m.albedo);
            let estimate = estimate_reflectance(&m, &wo, BsdfFlag::ALL, Unit::Radiance, true);
            for i in 0..3 {
                assert!(approx_eq!(Float, estimate[i], m.albedo[i], epsilon = 1e-5));
            }
        }
    }

    #[test]
    fn sampling_is_consistent() {
        check_sample_consistency(&grey(), BsdfFlag::ALL, Unit::Radiance);
        check_sample_consistency(&grey(), BsdfFlag::DIFFUSE, Unit::Importance);
    }

    #[test]
    fn pdf_integrates_to_one() {
        let m = grey();
        for wo in directions() {
            let total = pdf_integral(&m, &wo, BsdfFlag::ALL);
            assert!(approx_eq!(Float, total, 1.0, epsilon = 1e-2));
        }
    }

    #[test]
    fn masked_off() {
        check_masked_off(&grey());
    }

    #[test]
    fn adjoint_is_transpose() {
        check_adjoint_is_transpose(&grey());
    }

    #[test]
    fn from_params() {
        let params = ParamSet::parse(&["albedo=0.1,0.2,0.3"]).unwrap();
        let m = Lambertian::try_from(&params).unwrap();
        assert_eq!(m.albedo, Spectrum::from_rgb(0.1, 0.2, 0.3));
        assert!(params.unused().is_empty());

        let m = Lambertian::try_from(&ParamSet::new()).unwrap();
        assert_eq!(m, Lambertian::default());

        let params = ParamSet::parse(&["albedo=1,2"]).unwrap();
        assert!(Lambertian::try_from(&params).is_err());
    }
}
