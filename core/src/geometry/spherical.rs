//! Spherical coordinates of directions in the local shading frame

use super::*;

/// Returns the cosine of the angle θ measured from the given direction to the
/// z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn cos_theta(w: &Vector3f) -> Float {
    w.z
}

/// Returns the square of the cosine of the angle θ measured from the given
/// direction to the z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn cos_2_theta(w: &Vector3f) -> Float {
    w.z * w.z
}

/// Returns the absolute value of the cosine of the angle θ measured from the
/// given direction to the z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn abs_cos_theta(w: &Vector3f) -> Float {
    abs(w.z)
}

/// Returns the square of the sine of the angle θ measured from the given
/// direction to the z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn sin_2_theta(w: &Vector3f) -> Float {
    max(0.0, 1.0 - cos_2_theta(w))
}

/// Returns the sine of the angle θ measured from the given direction to the
/// z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn sin_theta(w: &Vector3f) -> Float {
    sin_2_theta(w).sqrt()
}

/// Returns the tangent of the angle θ measured from the given direction to the
/// z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn tan_theta(w: &Vector3f) -> Float {
    sin_theta(w) / cos_theta(w)
}

/// Returns the square of the tangent of the angle θ measured from the given
/// direction to the z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn tan_2_theta(w: &Vector3f) -> Float {
    sin_2_theta(w) / cos_2_theta(w)
}

/// Returns the cosine of the angle Φ measured from the given direction to the
/// x-axis after projection to the xy plane.
///
/// * `w` - The direction vector.
#[inline]
pub fn cos_phi(w: &Vector3f) -> Float {
    let s = sin_theta(w);
    if s == 0.0 {
        1.0
    } else {
        clamp(w.x / s, -1.0, 1.0)
    }
}

/// Returns the square of the cosine of the angle Φ.
///
/// * `w` - The direction vector.
#[inline]
pub fn cos_2_phi(w: &Vector3f) -> Float {
    let c = cos_phi(w);
    c * c
}

/// Returns the sine of the angle Φ measured from the given direction to the
/// x-axis after projection to the xy plane.
///
/// * `w` - The direction vector.
#[inline]
pub fn sin_phi(w: &Vector3f) -> Float {
    let s = sin_theta(w);
    if s == 0.0 {
        0.0
    } else {
        clamp(w.y / s, -1.0, 1.0)
    }
}

/// Returns the square of the sine of the angle Φ.
///
/// * `w` - The direction vector.
#[inline]
pub fn sin_2_phi(w: &Vector3f) -> Float {
    let s = sin_phi(w);
    s * s
}

/// Returns `true` if two vectors are in the same hemisphere.
///
/// * `w`  - First vector.
/// * `wp` - Second vector.
#[inline]
pub fn same_hemisphere(w: &Vector3f, wp: &Vector3f) -> bool {
    w.z * wp.z > 0.0
}

/// Computes the reflection of a vector around a normal.
///
/// * `wo` - Vector to reflect.
/// * `n`  - Normal.
#[inline]
pub fn reflect(wo: &Vector3f, n: &Vector3f) -> Vector3f {
    -(*wo) + 2.0 * wo.dot(n) * n
}

/// Returns the mirror direction of `w` about the shading normal.
///
/// * `w` - The direction vector.
#[inline]
pub fn mirror(w: &Vector3f) -> Vector3f {
    Vector3f::new(-w.x, -w.y, w.z)
}

/// Converts spherical coordinates to a direction in the shading frame.
///
/// * `sin_theta` - Sine of the polar angle θ.
/// * `cos_theta` - Cosine of the polar angle θ.
/// * `phi`       - Azimuth angle Φ.
#[inline]
pub fn spherical_direction(sin_theta: Float, cos_theta: Float, phi: Float) -> Vector3f {
    Vector3f::new(
        clamp(sin_theta, -1.0, 1.0) * phi.cos(),
        clamp(sin_theta, -1.0, 1.0) * phi.sin(),
        clamp(cos_theta, -1.0, 1.0),
    )
}

/// Create a coordinate system from a single unit vector and return the two
/// remaining basis vectors.
///
/// * `v1` - The first unit vector to form part of the coordinate system.
pub fn coordinate_system(v1: &Vector3f) -> (Vector3f, Vector3f) {
    let v2 = if abs(v1.x) > abs(v1.y) {
        Vector3f::new(-v1.z, 0.0, v1.x) / (v1.x * v1.x + v1.z * v1.z).sqrt()
    } else {
        Vector3f::new(0.0, v1.z, -v1.y) / (v1.y * v1.y + v1.z * v1.z).sqrt()
    };
    let v3 = v1.cross(&v2);
    (v2, v3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    prop_hemisphere_direction!(direction);

    #[test]
    fn normal_direction() {
        let n = Vector3f::new(0.0, 0.0, 1.0);
        assert_eq!(cos_theta(&n), 1.0);
        assert_eq!(sin_theta(&n), 0.0);
        assert_eq!(cos_phi(&n), 1.0);
        assert_eq!(sin_phi(&n), 0.0);
    }

    #[test]
    fn hemispheres() {
        let a = Vector3f::new(0.0, 0.6, 0.8);
        let b = Vector3f::new(0.6, 0.0, -0.8);
        assert!(!same_hemisphere(&a, &b));
        assert!(same_hemisphere(&a, &mirror(&a)));
    }

    proptest! {
        #[test]
        fn reflect_about_normal_is_mirror(w in direction()) {
            let r = reflect(&w, &Vector3f::new(0.0, 0.0, 1.0));
            let m = mirror(&w);
            prop_assert!(approx_eq!(f32, r.x, m.x, epsilon = 1e-5));
            prop_assert!(approx_eq!(f32, r.y, m.y, epsilon = 1e-5));
            prop_assert!(approx_eq!(f32, r.z, m.z, epsilon = 1e-5));
        }

        #[test]
        fn coordinate_system_is_orthonormal(w in direction()) {
            let (u, v) = coordinate_system(&w);
            prop_assert!(approx_eq!(f32, u.dot(&w), 0.0, epsilon = 1e-5));
            prop_assert!(approx_eq!(f32, v.dot(&w), 0.0, epsilon = 1e-5));
            prop_assert!(approx_eq!(f32, u.dot(&v), 0.0, epsilon = 1e-5));
            prop_assert!(approx_eq!(f32, u.length(), 1.0, epsilon = 1e-5));
            prop_assert!(approx_eq!(f32, v.length(), 1.0, epsilon = 1e-5));
        }

        #[test]
        fn trig_identity(w in direction()) {
            prop_assert!(approx_eq!(f32, cos_2_phi(&w) + sin_2_phi(&w), 1.0, epsilon = 1e-4));
        }
    }
}
