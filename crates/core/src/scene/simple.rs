//! Simplified static scene used when the full interactive view is unavailable
//!
//! No animation, no panels: the six flavors at their home positions and
//! three undecorated rings, rendered as plain text lines.

use super::geometry::fallback_rings;
use super::projection::Projection;
use crate::core_types::{Flavor, Point3D, Rgb};

/// Samples per ring
const RING_SAMPLES: usize = 100;

/// Static flavors and rings
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleScene {
    pub flavors: [(Flavor, Point3D); 6],
    pub rings: Vec<Vec<Point3D>>,
}

impl Default for SimpleScene {
    fn default() -> Self {
        Self {
            flavors: Flavor::ALL.map(|f| (f, f.position())),
            rings: fallback_rings(RING_SAMPLES),
        }
    }
}

impl SimpleScene {
    /// Color of the undecorated rings
    pub const RING_COLOR: Rgb = Rgb::CYAN;

    /// Title and one line per flavor with its position
    pub fn describe(&self) -> Vec<String> {
        let mut lines = vec![
            "3D Quark Structure - Simplified Version".to_string(),
            "6 Quark Flavors in 3D Space".to_string(),
        ];
        lines.extend(self.flavors.iter().map(|(flavor, p)| {
            format!(
                "  {:<8} ({:>5.2}, {:>5.2}, {:>5.2})",
                flavor.to_string(),
                p.x,
                p.y,
                p.z
            )
        }));
        lines.push(format!("  {} field rings ({})", self.rings.len(), Self::RING_COLOR));
        lines
    }

    /// Character plot of the scene seen through `projection`
    ///
    /// Flavors are drawn with their symbol, rings with `·`.
    pub fn sketch(&self, projection: &Projection, width: usize, height: usize) -> Vec<String> {
        let mut grid = vec![vec![' '; width]; height];
        if width < 2 || height < 2 {
            return grid.into_iter().map(|row| row.into_iter().collect()).collect();
        }
        let limit = 2.2;
        let mut plot = |p: &Point3D, c: char| {
            let (sx, sy) = projection.project(p);
            let col = ((sx + limit) / (2.0 * limit) * (width - 1) as f64).round();
            let row = ((limit - sy) / (2.0 * limit) * (height - 1) as f64).round();
            if (0.0..width as f64).contains(&col) && (0.0..height as f64).contains(&row) {
                grid[row as usize][col as usize] = c;
            }
        };
        for ring in &self.rings {
            for p in ring {
                plot(p, '·');
            }
        }
        for (flavor, p) in &self.flavors {
            plot(p, flavor.symbol());
        }
        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_lists_every_flavor() {
        let lines = SimpleScene::default().describe();
        assert_eq!(lines.len(), 2 + 6 + 1);
        assert!(lines[2].contains("UP"));
        assert!(lines[7].contains("BOTTOM"));
        assert!(lines[8].contains("3 field rings"));
    }

    #[test]
    fn test_sketch_has_requested_size_and_symbols() {
        let sketch = SimpleScene::default().sketch(&Projection::default(), 60, 24);
        assert_eq!(sketch.len(), 24);
        assert!(sketch.iter().all(|row| row.chars().count() == 60));
        let all: String = sketch.concat();
        for flavor in Flavor::ALL {
            assert!(all.contains(flavor.symbol()), "missing {flavor}");
        }
    }
}
