//! Decorative gluon field lines drawn around the flavor ring
//!
//! Each line is a closed loop of radius `1.5 + 0.2 * index` that undulates
//! vertically three times per turn. The loops drift with the animation angle:
//! the raw degree value is used directly as a phase, one tenth of it for the
//! horizontal drift and one fifth for the vertical ripple.

use super::color::Rgb;
use super::units::Degrees;
use super::vec3::Point3D;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Color-anticolor gluon line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GluonLine {
    RedAntiBlue,
    BlueAntiGreen,
    GreenAntiRed,
}

impl GluonLine {
    pub const ALL: [GluonLine; 3] = [
        GluonLine::RedAntiBlue,
        GluonLine::BlueAntiGreen,
        GluonLine::GreenAntiRed,
    ];

    /// Base loop radius
    const BASE_RADIUS: f64 = 1.5;
    /// Radius increment between consecutive loops
    const RADIUS_STEP: f64 = 0.2;

    pub const fn label(self) -> &'static str {
        match self {
            GluonLine::RedAntiBlue => "red_anti-blue",
            GluonLine::BlueAntiGreen => "blue_anti-green",
            GluonLine::GreenAntiRed => "green_anti-red",
        }
    }

    pub const fn color(self) -> Rgb {
        match self {
            GluonLine::RedAntiBlue => Rgb::from_u32(0xFF1493),
            GluonLine::BlueAntiGreen => Rgb::from_u32(0x1E90FF),
            GluonLine::GreenAntiRed => Rgb::from_u32(0x32CD32),
        }
    }

    /// Relative line weight in `(0, 1]`
    pub const fn strength(self) -> f64 {
        match self {
            GluonLine::RedAntiBlue => 1.0,
            GluonLine::BlueAntiGreen => 0.8,
            GluonLine::GreenAntiRed => 0.6,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            GluonLine::RedAntiBlue => 0,
            GluonLine::BlueAntiGreen => 1,
            GluonLine::GreenAntiRed => 2,
        }
    }

    pub fn radius(self) -> f64 {
        Self::BASE_RADIUS + Self::RADIUS_STEP * self.index() as f64
    }

    /// Point on the loop at parameter `theta` for the given animation angle
    pub fn sample(self, theta: f64, angle: Degrees) -> Point3D {
        let phase = angle.value();
        let r = self.radius();
        Point3D::new(
            r * (theta + phase / 10.0).cos(),
            r * (theta + phase / 10.0).sin(),
            (3.0 * theta + phase / 5.0).sin(),
        )
    }

    /// `samples` evenly spaced points over one full turn, endpoints included
    pub fn trace(self, samples: usize, angle: Degrees) -> Vec<Point3D> {
        linspace(0.0, TAU, samples)
            .map(|theta| self.sample(theta, angle))
            .collect()
    }
}

/// Evenly spaced values over `[start, end]`, endpoints included
pub(crate) fn linspace(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| start + step * i as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radii_increase_outward() {
        let radii: Vec<f64> = GluonLine::ALL.iter().map(|g| g.radius()).collect();
        assert!((radii[0] - 1.5).abs() < 1e-12);
        assert!((radii[2] - 1.9).abs() < 1e-12);
    }

    #[test]
    fn test_trace_stays_on_cylinder() {
        for line in GluonLine::ALL {
            for p in line.trace(100, Degrees::new(42.0)) {
                let horizontal = (p.x * p.x + p.y * p.y).sqrt();
                assert!((horizontal - line.radius()).abs() < 1e-9);
                assert!(p.z.abs() <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn test_trace_is_closed_loop() {
        let points = GluonLine::BlueAntiGreen.trace(100, Degrees::ZERO);
        assert_eq!(points.len(), 100);
        let (first, last) = (points[0], points[99]);
        assert!((first - last).norm() < 1e-9);
    }

    #[test]
    fn test_linspace_endpoints() {
        let values: Vec<f64> = linspace(-2.0, 2.0, 5).collect();
        assert_eq!(values, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(linspace(1.0, 3.0, 1).collect::<Vec<_>>(), vec![1.0]);
        assert_eq!(linspace(1.0, 3.0, 0).count(), 0);
    }
}
