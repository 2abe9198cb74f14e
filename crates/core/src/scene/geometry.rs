//! 3D geometry for the scene: flavor spheres, axes, interaction lines

use crate::core_types::gluon::linspace;
use crate::core_types::{Point3D, Rgb};
use std::f64::consts::{PI, TAU};

/// UV sphere around `center`, `resolution × resolution` vertices
///
/// `u` sweeps `[0, 2π]` around the z axis and `v` sweeps `[0, π]` from the
/// north pole down.
pub fn sphere_mesh(center: Point3D, radius: f64, resolution: usize) -> Vec<Point3D> {
    let vs: Vec<f64> = linspace(0.0, PI, resolution).collect();
    linspace(0.0, TAU, resolution)
        .flat_map(|u| {
            vs.iter().map(move |&v| {
                center
                    + radius * Point3D::new(u.cos() * v.sin(), u.sin() * v.sin(), v.cos())
            })
        })
        .collect()
}

/// Coordinate axis arrow from the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisArrow {
    pub label: char,
    pub color: Rgb,
    pub tip: Point3D,
    /// Where the label is drawn, slightly past the tip
    pub label_at: Point3D,
}

/// X (red), Y (green) and Z (blue) arrows of the given length
pub fn coordinate_axes(length: f64) -> [AxisArrow; 3] {
    let label_offset = 1.1;
    [
        ('X', Rgb::RED, Point3D::x()),
        ('Y', Rgb::GREEN, Point3D::y()),
        ('Z', Rgb::BLUE, Point3D::z()),
    ]
    .map(|(label, color, unit)| AxisArrow {
        label,
        color,
        tip: unit * length,
        label_at: unit * length * label_offset,
    })
}

/// Decorative helix in the interaction panel
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionLine {
    pub label: String,
    pub color: Rgb,
    pub points: Vec<Point3D>,
}

const INTERACTION_PALETTE: [Rgb; 5] = [
    Rgb::from_u32(0xFF6B6B),
    Rgb::from_u32(0x4ECDC4),
    Rgb::from_u32(0x45B7D1),
    Rgb::from_u32(0x96CEB4),
    Rgb::from_u32(0xFFEAA7),
];

/// Five stacked helices over `t ∈ [0, 4π]`
///
/// Line `i` is `(sin(t + 0.5i), cos(t + 0.5i), 0.5·sin(2t + i) + 0.5i)`.
pub fn interaction_lines(points_per_line: usize) -> Vec<InteractionLine> {
    INTERACTION_PALETTE
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            let offset = i as f64;
            let points = linspace(0.0, 2.0 * TAU, points_per_line)
                .map(|t| {
                    Point3D::new(
                        (t + 0.5 * offset).sin(),
                        (t + 0.5 * offset).cos(),
                        0.5 * (2.0 * t + offset).sin() + 0.5 * offset,
                    )
                })
                .collect();
            InteractionLine {
                label: format!("Interaction {}", i + 1),
                color,
                points,
            }
        })
        .collect()
}

/// Three static rings for the simplified scene: radius `1.5 + 0.2i`,
/// height `sin(3θ)`
pub fn fallback_rings(samples: usize) -> Vec<Vec<Point3D>> {
    (0..3)
        .map(|i| {
            let radius = 1.5 + 0.2 * f64::from(i);
            linspace(0.0, TAU, samples)
                .map(|theta| {
                    Point3D::new(
                        radius * theta.cos(),
                        radius * theta.sin(),
                        (3.0 * theta).sin(),
                    )
                })
                .collect()
        })
        .collect()
}
