//! Point type alias for 3D scene coordinates.

use nalgebra::Vector3;

/// 3D point used for flavor positions, field-line samples and mesh vertices.
///
/// This is a simple alias for `nalgebra::Vector3<f64>`; the rotation engine
/// multiplies it by a 3×3 matrix each tick.
pub type Point3D = Vector3<f64>;
