//! Aggregate
//!
//! Sum of two BSDF models sharing every query argument.

use bbm::bsdf::*;
use bbm::geometry::*;
use bbm::math::*;
use bbm::spectrum::*;
use std::fmt;

/// The sum of two BSDF models.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Aggregate<A, B> {
    /// First model.
    pub first: A,

    /// Second model.
    pub second: B,
}

impl<A: BsdfModel, B: BsdfModel> Aggregate<A, B> {
    /// Create a new `Aggregate`.
    ///
    /// * `first`  - First model.
    /// * `second` - Second model.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: BsdfModel, B: BsdfModel> ToText for Aggregate<A, B> {
    fn to_text(&self) -> String {
        format!("({}, {})", self.first.display(), self.second.display())
    }
}

impl<A: BsdfModel, B: BsdfModel> BsdfModel for Aggregate<A, B> {
    const NAME: &'static str = "Aggregate";
    type Format = TextForm;

    fn eval(&self, wi: &Vector3f, wo: &Vector3f, component: BsdfFlag, unit: Unit, mask: Mask) -> Spectrum {
        self.first.eval(wi, wo, component, unit, mask) + self.second.eval(wi, wo, component, unit, mask)
    }

    fn sample(&self, wo: &Vector3f, xi: &Point2f, component: BsdfFlag, unit: Unit, mask: Mask) -> BsdfSample {
        if !mask {
            return BsdfSample::default();
        }

        let s = if xi[0] < 0.5 {
            let u = Point2f::new(min(2.0 * xi[0], ONE_MINUS_EPSILON), xi[1]);
            self.first.sample(wo, &u, component, unit, mask)
        } else {
            let u = Point2f::new(min(2.0 * xi[0] - 1.0, ONE_MINUS_EPSILON), xi[1]);
            self.second.sample(wo, &u, component, unit, mask)
        };
        if !s.is_valid() {
            return BsdfSample::default();
        }

        let pdf = self.pdf(&s.direction, wo, component, unit, mask);
        if pdf <= 0.0 {
            return BsdfSample::default();
        }
        let value = self.eval(&s.direction, wo, component, unit, mask);
        let weight = value * (abs_cos_theta(&s.direction) / pdf);
        BsdfSample::new(s.direction, pdf, s.flag, unit, weight)
    }

    fn pdf(&self, wi: &Vector3f, wo: &Vector3f, component: BsdfFlag, unit: Unit, mask: Mask) -> Float {
        0.5 * (self.first.pdf(wi, wo, component, unit, mask) + self.second.pdf(wi, wo, component, unit, mask))
    }

    fn reflectance(&self, wo: &Vector3f, component: BsdfFlag, unit: Unit, mask: Mask) -> Spectrum {
        self.first.reflectance(wo, component, unit, mask) + self.second.reflectance(wo, component, unit, mask)
    }
}

impl<A: BsdfModel, B: BsdfModel> fmt::Display for Aggregate<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ModelDisplay::new(self), f)
    }
}
