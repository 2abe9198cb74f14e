//! Rotation engine
//!
//! Builds one 3×3 rotation from a single angle by rotating about X, then Y,
//! then Z by that same angle, and applies it to scene points. Composition is
//! right-to-left on column vectors: `R = Rz(θ)·Ry(θ)·Rx(θ)`.
//!
//! Every real angle is valid (including negative and very large values), so
//! nothing here returns an error.

use crate::core_types::{Degrees, Point3D};
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// Orthonormal 3×3 rotation matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationMatrix(Matrix3<f64>);

/// Elementary rotation about the X axis
fn rotation_x(cos_a: f64, sin_a: f64) -> Matrix3<f64> {
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, cos_a, -sin_a, //
        0.0, sin_a, cos_a,
    )
}

/// Elementary rotation about the Y axis
fn rotation_y(cos_a: f64, sin_a: f64) -> Matrix3<f64> {
    Matrix3::new(
        cos_a, 0.0, sin_a, //
        0.0, 1.0, 0.0, //
        -sin_a, 0.0, cos_a,
    )
}

/// Elementary rotation about the Z axis
fn rotation_z(cos_a: f64, sin_a: f64) -> Matrix3<f64> {
    Matrix3::new(
        cos_a, -sin_a, 0.0, //
        sin_a, cos_a, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Compose `Rz(θ)·Ry(θ)·Rx(θ)` for one angle in degrees
pub fn compose_rotation(angle: Degrees) -> RotationMatrix {
    let (sin_a, cos_a) = angle.to_radians().sin_cos();
    let rx = rotation_x(cos_a, sin_a);
    let ry = rotation_y(cos_a, sin_a);
    let rz = rotation_z(cos_a, sin_a);
    RotationMatrix(rz * ry * rx)
}

impl RotationMatrix {
    pub fn identity() -> Self {
        RotationMatrix(Matrix3::identity())
    }

    /// Underlying matrix
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.0
    }

    /// Rotate one point
    #[inline]
    pub fn apply(&self, point: Point3D) -> Point3D {
        self.0 * point
    }

    /// Rotate a fixed set of points independently
    pub fn rotate_all<const N: usize>(&self, points: &[Point3D; N]) -> [Point3D; N] {
        points.map(|p| self.apply(p))
    }

    pub fn transpose(&self) -> Self {
        RotationMatrix(self.0.transpose())
    }

    /// Inverse rotation; for an orthonormal matrix this is the transpose
    pub fn inverse(&self) -> Self {
        self.transpose()
    }

    /// Compose with another rotation (`self` applied after `other`)
    pub fn then_after(&self, other: &RotationMatrix) -> Self {
        RotationMatrix(self.0 * other.0)
    }

    /// Check `Rᵀ·R ≈ I` and `det(R) ≈ 1` within `tolerance`
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let gram = self.0.transpose() * self.0;
        let off_identity = (gram - Matrix3::identity()).abs().max();
        off_identity <= tolerance && (self.0.determinant() - 1.0).abs() <= tolerance
    }

    /// Largest element-wise difference to another rotation
    pub fn max_difference(&self, other: &RotationMatrix) -> f64 {
        (self.0 - other.0).abs().max()
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-12;

    fn sample_points() -> Vec<Point3D> {
        vec![
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(-0.5, 0.87, 0.0),
            Point3D::new(0.5, -0.87, 0.5),
            Point3D::new(3.0, -4.0, 12.0),
            Point3D::zeros(),
        ]
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let r = compose_rotation(Degrees::ZERO);
        assert_eq!(*r.matrix(), Matrix3::identity());
        for p in sample_points() {
            assert_eq!(r.apply(p), p);
        }
    }

    #[test]
    fn test_norm_is_preserved() {
        for angle in [-725.0, -90.0, 0.5, 33.3, 90.0, 180.0, 1e6] {
            let r = compose_rotation(Degrees::new(angle));
            for p in sample_points() {
                assert_relative_eq!(r.apply(p).norm(), p.norm(), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_orthonormal_for_many_angles() {
        for step in 0..720 {
            let r = compose_rotation(Degrees::new(f64::from(step) * 0.5 - 180.0));
            assert!(r.is_orthonormal(1e-12), "angle step {step}");
        }
    }

    #[test]
    fn test_transpose_is_inverse() {
        let r = compose_rotation(Degrees::new(47.0));
        let product = r.then_after(&r.inverse());
        assert!(product.max_difference(&RotationMatrix::identity()) < TOL);
    }

    #[test]
    fn test_periodic_in_full_turns() {
        for angle in [0.0, 12.5, 90.0, 271.0] {
            let a = compose_rotation(Degrees::new(angle));
            let b = compose_rotation(Degrees::new(angle + 360.0));
            assert!(a.max_difference(&b) < 1e-12);
        }
    }

    #[test]
    fn test_x_axis_only_leaves_x_invariant() {
        let (sin_a, cos_a) = Degrees::new(90.0).to_radians().sin_cos();
        let rx = rotation_x(cos_a, sin_a);
        let p = rx * Point3D::new(1.0, 0.0, 0.0);
        assert_relative_eq!(p, Point3D::new(1.0, 0.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn test_quarter_turn_golden_value() {
        // Rx leaves (1,0,0) alone, Ry(90) sends it to (0,0,-1), Rz leaves that alone
        let r = compose_rotation(Degrees::new(90.0));
        let p = r.apply(Point3D::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3D::new(0.0, 0.0, -1.0), epsilon = TOL);
    }

    #[test]
    fn test_quarter_turn_full_matrix() {
        let r = compose_rotation(Degrees::new(90.0));
        let expected = Matrix3::new(
            0.0, 0.0, 1.0, //
            0.0, 1.0, 0.0, //
            -1.0, 0.0, 0.0,
        );
        assert!((r.matrix() - expected).abs().max() < TOL);
    }

    #[test]
    fn test_rotate_all_matches_apply() {
        let r = compose_rotation(Degrees::new(15.0));
        let points = [Point3D::new(1.0, 2.0, 3.0), Point3D::new(-1.0, 0.0, 0.5)];
        let rotated = r.rotate_all(&points);
        for (out, p) in rotated.iter().zip(points.iter()) {
            assert_eq!(*out, r.apply(*p));
        }
    }

    #[test]
    fn test_non_finite_angle_does_not_panic() {
        let r = compose_rotation(Degrees::new(f64::INFINITY));
        let p = r.apply(Point3D::new(1.0, 0.0, 0.0));
        assert!(p.x.is_nan());
    }
}
