//! Orthographic view of the 3D panels

use crate::core_types::{Degrees, Point3D};

/// Orthographic camera on a sphere around the origin
///
/// Screen `x` runs along the camera's right vector and screen `y` along its
/// up vector; world `z` always projects onto screen `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    right: Point3D,
    up: Point3D,
    toward_viewer: Point3D,
}

impl Projection {
    /// Default elevation of the 3D panels
    pub const DEFAULT_ELEVATION: Degrees = Degrees::new(30.0);
    /// Default azimuth of the 3D panels
    pub const DEFAULT_AZIMUTH: Degrees = Degrees::new(-60.0);

    pub fn new(elevation: Degrees, azimuth: Degrees) -> Self {
        let (sin_el, cos_el) = elevation.to_radians().sin_cos();
        let (sin_az, cos_az) = azimuth.to_radians().sin_cos();
        Self {
            right: Point3D::new(-sin_az, cos_az, 0.0),
            up: Point3D::new(-sin_el * cos_az, -sin_el * sin_az, cos_el),
            toward_viewer: Point3D::new(cos_el * cos_az, cos_el * sin_az, sin_el),
        }
    }

    /// Screen coordinates of a world point
    pub fn project(&self, point: &Point3D) -> (f64, f64) {
        (self.right.dot(point), self.up.dot(point))
    }

    /// Signed distance toward the viewer; larger is closer
    pub fn depth(&self, point: &Point3D) -> f64 {
        self.toward_viewer.dot(point)
    }

    /// Project a polyline
    pub fn project_all(&self, points: &[Point3D]) -> Vec<(f64, f64)> {
        points.iter().map(|p| self.project(p)).collect()
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ELEVATION, Self::DEFAULT_AZIMUTH)
    }
}
