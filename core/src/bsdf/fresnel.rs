//! Fresnel reflectance

use super::*;
use std::mem::swap;

/// Returns the fresnel reflection for dielectric materials and unpolarized light.
///
/// * `cos_theta_i` - cos(θi) for angle between incident direction and surface
///                   normal.
/// * `eta_i`       - index of refraction for medium that incident ray is in.
/// * `eta_t`       - index of refraction for medium that incident ray is entering.
pub fn fr_dielectric(cos_theta_i: Float, eta_i: Float, eta_t: Float) -> Float {
    let mut cos_theta_i = clamp(cos_theta_i, -1.0, 1.0);
    let mut eta_i = eta_i;
    let mut eta_t = eta_t;

    if cos_theta_i <= 0.0 {
        swap(&mut eta_i, &mut eta_t);
        cos_theta_i = abs(cos_theta_i);
    }

    // Snell's law.
    let sin_theta_i = max(0.0, 1.0 - cos_theta_i * cos_theta_i).sqrt();
    let sin_theta_t = eta_i / eta_t * sin_theta_i;

    // Total internal reflection.
    if sin_theta_t >= 1.0 {
        return 1.0;
    }

    let cos_theta_t = max(0.0, 1.0 - sin_theta_t * sin_theta_t).sqrt();
    let r_parl = ((eta_t * cos_theta_i) - (eta_i * cos_theta_t))
        / ((eta_t * cos_theta_i) + (eta_i * cos_theta_t));
    let r_perp = ((eta_i * cos_theta_i) - (eta_t * cos_theta_t))
        / ((eta_i * cos_theta_i) + (eta_t * cos_theta_t));
    (r_parl * r_parl + r_perp * r_perp) / 2.0
}

/// Schlick's approximation of the Fresnel reflectance.
///
/// * `r0`        - Reflectance at normal incidence.
/// * `cos_theta` - Cosine of the angle to the normal.
pub fn fr_schlick(r0: Float, cos_theta: Float) -> Float {
    let m = clamp(1.0 - abs(cos_theta), 0.0, 1.0);
    let m2 = m * m;
    r0 + (1.0 - r0) * m2 * m2 * m
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    #[test]
    fn normal_incidence_matches_r0() {
        let r0 = ((1.5 - 1.0) / (1.5 + 1.0) as Float).powi(2);
        assert!(approx_eq!(Float, fr_dielectric(1.0, 1.0, 1.5), r0, epsilon = 1e-6));
        assert!(approx_eq!(Float, fr_schlick(r0, 1.0), r0, epsilon = 1e-6));
    }

    #[test]
    fn total_internal_reflection() {
        // Leaving glass at a grazing angle.
        assert_eq!(fr_dielectric(-0.1, 1.0, 1.5), 1.0);
    }

    #[test]
    fn grazing_angle_reflects_everything() {
        assert!(approx_eq!(Float, fr_dielectric(0.0, 1.0, 1.5), 1.0, epsilon = 1e-6));
        assert!(approx_eq!(Float, fr_schlick(0.04, 0.0), 1.0, epsilon = 1e-6));
    }

    proptest! {
        #[test]
        fn dielectric_is_a_fraction(cos in -1.0..1.0f32, eta in 1.0..3.0f32) {
            let f = fr_dielectric(cos, 1.0, eta);
            prop_assert!((0.0..=1.0).contains(&f));
        }

        #[test]
        fn schlick_is_monotonic(r0 in 0.0..1.0f32, c1 in 0.0..1.0f32, c2 in 0.0..1.0f32) {
            let (lo, hi) = if c1 < c2 { (c1, c2) } else { (c2, c1) };
            prop_assert!(fr_schlick(r0, lo) >= fr_schlick(r0, hi) - 1e-6);
        }
    }
}
