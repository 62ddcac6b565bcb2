//! Common sampling functions.

use crate::geometry::*;
use crate::math::*;

/// Generate a deterministic `n` x `n` grid of samples placed at the cell
/// centers of the unit square.
///
/// * `n` - Number of samples along each axis.
pub fn stratified_grid(n: usize) -> Vec<Point2f> {
    let inv_n = 1.0 / n as Float;
    (0..n)
        .flat_map(|y| {
            (0..n).map(move |x| {
                Point2f::new(
                    min((x as Float + 0.5) * inv_n, ONE_MINUS_EPSILON),
                    min((y as Float + 0.5) * inv_n, ONE_MINUS_EPSILON),
                )
            })
        })
        .collect()
}

/// Uniformly sample a direction on a hemisphere.
///
/// * `u` - The random sample point.
pub fn uniform_sample_hemisphere(u: &Point2f) -> Vector3f {
    let z = u[0];
    let r = max(0.0, 1.0 - z * z).sqrt();
    let phi = TWO_PI * u[1];
    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// Returns the PDF for uniformly sampling a direction from a hemisphere.
#[inline]
pub fn uniform_hemisphere_pdf() -> Float {
    INV_TWO_PI
}

/// Sample a point on a unit disk by mapping from a unit square to the unit
/// circle. The concentric mapping takes points in [-1, 1]^2 to unit disk by
/// uniformly mapping concentric squares to concentric circles.
///
/// * `u` - The random sample point.
pub fn concentric_sample_disk(u: &Point2f) -> Point2f {
    // Map uniform random numbers to [-1,1]^2.
    let u_offset = 2.0 * *u - Point2f::new(1.0, 1.0);

    // Handle degeneracy at the origin.
    if u_offset.x == 0.0 && u_offset.y == 0.0 {
        return Point2f::new(0.0, 0.0);
    }

    // Apply concentric mapping to point
    let (r, theta) = if abs(u_offset.x) > abs(u_offset.y) {
        (u_offset.x, PI_OVER_FOUR * (u_offset.y / u_offset.x))
    } else {
        (
            u_offset.y,
            PI_OVER_TWO - PI_OVER_FOUR * (u_offset.x / u_offset.y),
        )
    };

    r * Point2f::new(theta.cos(), theta.sin())
}

/// Sample a direction on a hemisphere using cosine-weighted sampling.
///
/// * `u` - The random sample point.
#[inline]
pub fn cosine_sample_hemisphere(u: &Point2f) -> Vector3f {
    let d = concentric_sample_disk(u);
    let z = max(0.0, 1.0 - d.x * d.x - d.y * d.y).sqrt();
    Vector3f::new(d.x, d.y, z)
}

/// Returns the PDF for cosine-weighted sampling a direction from a hemisphere.
///
/// * `cos_theta` - Cosine term of incident radiance.
#[inline]
pub fn cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    max(0.0, cos_theta) * INV_PI
}

/// Sample a direction about the z-axis proportional to `cos^n` of the angle
/// to the axis. Used for Phong-type lobes.
///
/// * `u` - The random sample point.
/// * `n` - The lobe exponent.
pub fn power_cosine_sample(u: &Point2f, n: Float) -> Vector3f {
    let cos_theta = u[0].powf(1.0 / (n + 1.0));
    let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
    spherical_direction(sin_theta, cos_theta, TWO_PI * u[1])
}

/// Returns the PDF of `power_cosine_sample()`.
///
/// * `cos_theta` - Cosine of the angle to the lobe axis.
/// * `n`         - The lobe exponent.
#[inline]
pub fn power_cosine_pdf(cos_theta: Float, n: Float) -> Float {
    if cos_theta <= 0.0 {
        0.0
    } else {
        (n + 1.0) * INV_TWO_PI * cos_theta.powf(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use crate::prop_point2;
    use proptest::prelude::*;

    prop_point2!(unit_square, f32, 0.0..1.0f32, 0.0..1.0f32);

    #[test]
    fn grid_is_cell_centered() {
        let g = stratified_grid(2);
        assert_eq!(g.len(), 4);
        assert_eq!(g[0], Point2f::new(0.25, 0.25));
        assert_eq!(g[3], Point2f::new(0.75, 0.75));
    }

    #[test]
    fn cosine_pdf_integrates_to_one() {
        // Estimate ∫ pdf dω with uniform hemisphere samples.
        let grid = stratified_grid(64);
        let sum: Float = grid
            .iter()
            .map(|u| {
                let w = uniform_sample_hemisphere(u);
                cosine_hemisphere_pdf(w.z) / uniform_hemisphere_pdf()
            })
            .sum();
        assert!(approx_eq!(f32, sum / grid.len() as Float, 1.0, epsilon = 1e-2));
    }

    #[test]
    fn power_cosine_pdf_integrates_to_one() {
        let grid = stratified_grid(128);
        let sum: Float = grid
            .iter()
            .map(|u| {
                let w = uniform_sample_hemisphere(u);
                power_cosine_pdf(w.z, 8.0) / uniform_hemisphere_pdf()
            })
            .sum();
        assert!(approx_eq!(f32, sum / grid.len() as Float, 1.0, epsilon = 2e-2));
    }

    proptest! {
        #[test]
        fn concentric_disk_is_inside_unit_circle(u in unit_square()) {
            let d = concentric_sample_disk(&u);
            prop_assert!(d.x * d.x + d.y * d.y <= 1.0 + 1e-5);
        }

        #[test]
        fn cosine_samples_are_unit_upper_hemisphere(u in unit_square()) {
            let w = cosine_sample_hemisphere(&u);
            prop_assert!(w.z >= 0.0);
            prop_assert!(approx_eq!(f32, w.length(), 1.0, epsilon = 1e-4));
        }

        #[test]
        fn power_cosine_samples_are_unit(u in unit_square()) {
            let w = power_cosine_sample(&u, 16.0);
            prop_assert!(w.z >= 0.0);
            prop_assert!(approx_eq!(f32, w.length(), 1.0, epsilon = 1e-4));
        }
    }
}
