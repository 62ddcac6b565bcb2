//! BSDF model capability

use super::*;

/// Capability set shared by all BSDF models.
///
/// Every argument is passed explicitly here; callers normally go through the
/// named-argument facade in `BsdfForward`, which fills in `DEFAULT_COMPONENT`,
/// `DEFAULT_UNIT` and `DEFAULT_MASK` for omitted arguments.
///
/// Models are expected to return a zero spectrum, a zero pdf or an invalid
/// `BsdfSample` when `mask` is false or no selected lobe contributes.
pub trait BsdfModel: Sized {
    /// Static name printed in front of the model's parameters.
    const NAME: &'static str;

    /// How the model's parameters are printed after its name.
    type Format: ModelFormat<Self>;

    /// Evaluates the BSDF for the given pair of directions.
    ///
    /// * `wi`        - The `in` direction.
    /// * `wo`        - The `out` direction.
    /// * `component` - Lobes to evaluate.
    /// * `unit`      - Regular or adjoint BSDF.
    /// * `mask`      - Lane activation.
    fn eval(&self, wi: &Vector3f, wo: &Vector3f, component: BsdfFlag, unit: Unit, mask: Mask) -> Spectrum;

    /// Samples an `in` direction given the `out` direction.
    ///
    /// * `wo`        - The `out` direction.
    /// * `xi`        - The 2D uniform random values.
    /// * `component` - Lobes to sample.
    /// * `unit`      - Regular or adjoint BSDF.
    /// * `mask`      - Lane activation.
    fn sample(&self, wo: &Vector3f, xi: &Point2f, component: BsdfFlag, unit: Unit, mask: Mask) -> BsdfSample;

    /// Returns the density with which `sample()` produces `wi` given `wo`.
    ///
    /// * `wi`        - The `in` direction.
    /// * `wo`        - The `out` direction.
    /// * `component` - Lobes to sample.
    /// * `unit`      - Regular or adjoint BSDF.
    /// * `mask`      - Lane activation.
    fn pdf(&self, wi: &Vector3f, wo: &Vector3f, component: BsdfFlag, unit: Unit, mask: Mask) -> Float;

    /// Computes the directional-hemispherical reflectance for `wo`.
    ///
    /// * `wo`        - The `out` direction.
    /// * `component` - Lobes to include.
    /// * `unit`      - Regular or adjoint BSDF.
    /// * `mask`      - Lane activation.
    fn reflectance(&self, wo: &Vector3f, component: BsdfFlag, unit: Unit, mask: Mask) -> Spectrum;
}

/// Number of strata per axis used by `estimate_reflectance()`.
pub const REFLECTANCE_STRATA: usize = 32;

/// Estimates the directional-hemispherical reflectance of a model by
/// importance sampling it over a stratified grid of random values.
///
/// * `model`     - The BSDF model.
/// * `wo`        - The `out` direction.
/// * `component` - Lobes to include.
/// * `unit`      - Regular or adjoint BSDF.
/// * `mask`      - Lane activation.
pub fn estimate_reflectance<M: BsdfModel>(
    model: &M,
    wo: &Vector3f,
    component: BsdfFlag,
    unit: Unit,
    mask: Mask,
) -> Spectrum {
    if !mask {
        return Spectrum::ZERO;
    }

    let grid = crate::sampling::stratified_grid(REFLECTANCE_STRATA);
    let r = grid.iter().fold(Spectrum::ZERO, |r, xi| {
        let sample = model.sample(wo, xi, component, unit, mask);
        if sample.is_valid() {
            r + sample.weight
        } else {
            r
        }
    });
    r / grid.len() as Float
}
