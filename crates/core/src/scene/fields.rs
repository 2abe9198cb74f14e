//! Synthetic 2D fields: the RGB "color charge" field and the wave contour
//!
//! Both fields are sampled on square grids. Rows are independent, so they
//! are filled in parallel.

use crate::core_types::gluon::linspace;
use crate::core_types::Rgb;
use rayon::prelude::*;

/// Half-extent of the color field domain (`[-2, 2]²`)
pub const COLOR_FIELD_EXTENT: f64 = 2.0;

/// Half-extent of the wave field domain (`[-3, 3]²`)
pub const WAVE_FIELD_EXTENT: f64 = 3.0;

/// Radial damping of the wave packet
const WAVE_DAMPING: f64 = 0.1;

/// Axis coordinates of a square grid on `[-extent, extent]`
fn axis(extent: f64, resolution: usize) -> Vec<f64> {
    linspace(-extent, extent, resolution).collect()
}

/// Filled-contour band of `value` among `levels` equal bands over `[lo, hi]`
fn band(value: f64, lo: f64, hi: f64, levels: usize) -> usize {
    if levels == 0 || hi <= lo || !value.is_finite() {
        return 0;
    }
    let t = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    ((t * levels as f64) as usize).min(levels - 1)
}

/// Scalar field on a square grid, row-major with rows along y
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    pub resolution: usize,
    /// Sample coordinates along either axis
    pub axis: Vec<f64>,
    pub values: Vec<f64>,
}

impl ScalarField {
    /// Value at column `ix`, row `iy`
    pub fn get(&self, ix: usize, iy: usize) -> f64 {
        self.values[iy * self.resolution + ix]
    }

    /// World coordinate of grid index `i` along either axis
    pub fn coordinate(&self, i: usize) -> f64 {
        self.axis[i]
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Filled-contour band of `value` among `levels` equal bands spanning the
    /// field's range, in `0..levels`
    ///
    /// Scans the field for its range; use [`ScalarField::bands`] for the
    /// whole grid.
    pub fn level_of(&self, value: f64, levels: usize) -> usize {
        band(value, self.min(), self.max(), levels)
    }

    /// Contour band of every grid value
    pub fn bands(&self, levels: usize) -> Vec<usize> {
        let (lo, hi) = (self.min(), self.max());
        self.values
            .par_iter()
            .map(|&v| band(v, lo, hi, levels))
            .collect()
    }
}

/// Wave packet `sin(r)·exp(-0.1 r²)` on `[-3, 3]²`
pub fn wave_field(resolution: usize) -> ScalarField {
    let xs = axis(WAVE_FIELD_EXTENT, resolution);
    let mut values = vec![0.0; resolution * resolution];

    if resolution > 0 {
        values
            .par_chunks_mut(resolution)
            .zip(xs.par_iter())
            .for_each(|(row, &y)| {
                for (cell, &x) in row.iter_mut().zip(xs.iter()) {
                    let r2 = x * x + y * y;
                    *cell = r2.sqrt().sin() * (-WAVE_DAMPING * r2).exp();
                }
            });
    }

    ScalarField {
        resolution,
        axis: xs,
        values,
    }
}

/// RGB field normalized into `[0, 1]`, row-major with rows along y
#[derive(Debug, Clone, PartialEq)]
pub struct ColorField {
    pub resolution: usize,
    /// Sample coordinates along either axis
    pub axis: Vec<f64>,
    pub pixels: Vec<[f64; 3]>,
}

impl ColorField {
    pub fn get(&self, ix: usize, iy: usize) -> [f64; 3] {
        self.pixels[iy * self.resolution + ix]
    }

    /// World coordinate of grid index `i` along either axis
    pub fn coordinate(&self, i: usize) -> f64 {
        self.axis[i]
    }

    pub fn rgb(&self, ix: usize, iy: usize) -> Rgb {
        let [r, g, b] = self.get(ix, iy);
        Rgb::from_unit(r, g, b)
    }
}

/// Color field on `[-2, 2]²` with channels `sin(x²+y²)`, `cos(x+y)`,
/// `sin(x−y)`, normalized by the global minimum and maximum over all
/// channels
///
/// A degenerate range (every channel value equal) normalizes to zero.
pub fn color_field(resolution: usize) -> ColorField {
    let xs = axis(COLOR_FIELD_EXTENT, resolution);
    let mut pixels = vec![[0.0; 3]; resolution * resolution];

    if resolution > 0 {
        pixels
            .par_chunks_mut(resolution)
            .zip(xs.par_iter())
            .for_each(|(row, &y)| {
                for (pixel, &x) in row.iter_mut().zip(xs.iter()) {
                    *pixel = [(x * x + y * y).sin(), (x + y).cos(), (x - y).sin()];
                }
            });
    }

    let (lo, hi) = pixels
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &c| {
            (lo.min(c), hi.max(c))
        });
    let span = hi - lo;

    pixels.par_iter_mut().for_each(|pixel| {
        for c in pixel.iter_mut() {
            *c = if span > 0.0 { (*c - lo) / span } else { 0.0 };
        }
    });

    ColorField {
        resolution,
        axis: xs,
        pixels,
    }
}

/// Viridis colormap, piecewise-linear through five anchor colors
pub fn viridis(t: f64) -> Rgb {
    const ANCHORS: [[f64; 3]; 5] = [
        [68.0, 1.0, 84.0],
        [59.0, 82.0, 139.0],
        [33.0, 145.0, 140.0],
        [94.0, 201.0, 98.0],
        [253.0, 231.0, 37.0],
    ];
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (ANCHORS.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(ANCHORS.len() - 2);
    let frac = scaled - i as f64;
    let lerp = |k: usize| (ANCHORS[i][k] + (ANCHORS[i + 1][k] - ANCHORS[i][k]) * frac) / 255.0;
    Rgb::from_unit(lerp(0), lerp(1), lerp(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_field_is_normalized() {
        let field = color_field(50);
        assert_eq!(field.pixels.len(), 2500);
        let all: Vec<f64> = field.pixels.iter().flatten().copied().collect();
        let lo = all.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = all.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(lo.abs() < 1e-12);
        assert!((hi - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_color_field_tiny_grids() {
        // One sample at (-2, -2); three distinct channel values still span a range
        let field = color_field(1);
        assert_eq!(field.pixels.len(), 1);
        assert!(field.pixels[0].iter().all(|c| (0.0..=1.0).contains(c)));

        let empty = color_field(0);
        assert!(empty.pixels.is_empty());
    }

    #[test]
    fn test_wave_field_center_and_symmetry() {
        let field = wave_field(101);
        // Center sample is r = 0, where sin(0) = 0
        assert!(field.get(50, 50).abs() < 1e-12);
        assert!((field.get(10, 30) - field.get(30, 10)).abs() < 1e-12);
        assert!((field.get(0, 50) - field.get(100, 50)).abs() < 1e-12);
        assert!((field.coordinate(0) + 3.0).abs() < 1e-12);
        assert!((field.coordinate(100) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_wave_field_peak_near_expected_radius() {
        // sin(r)·e^{-0.1 r²} peaks near r ≈ 1.3 at about 0.81
        let field = wave_field(100);
        let max = field.max();
        assert!(max > 0.75 && max < 0.85, "peak {max}");
    }

    #[test]
    fn test_level_of_spans_all_bands() {
        let field = wave_field(100);
        assert_eq!(field.level_of(field.min(), 20), 0);
        assert_eq!(field.level_of(field.max(), 20), 19);
        assert_eq!(field.level_of(f64::NAN, 20), 0);
        assert!(field.bands(20).iter().all(|&b| b < 20));
    }

    #[test]
    fn test_bands_on_large_grid() {
        let field = wave_field(300);
        let bands = field.bands(20);
        assert_eq!(bands.len(), 90_000);
        assert!(bands.iter().all(|&b| b < 20));

        let (lo, hi) = (field.min(), field.max());
        for (i, &value) in field.values.iter().enumerate().step_by(997) {
            assert_eq!(bands[i], band(value, lo, hi, 20));
        }
        let peak = field.values.iter().position(|&v| v == hi);
        assert_eq!(peak.map(|i| bands[i]), Some(19));
    }

    #[test]
    fn test_coordinates_match_axis_samples() {
        let field = color_field(5);
        assert_eq!(field.axis, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(field.coordinate(3), 1.0);
    }

    #[test]
    fn test_viridis_endpoints() {
        assert_eq!(viridis(0.0), Rgb::from_u32(0x440154));
        assert_eq!(viridis(1.0), Rgb::from_u32(0xFDE725));
        assert_eq!(viridis(-3.0), viridis(0.0));
    }
}
