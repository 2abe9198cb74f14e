//! Display colors shared by the core and the presentation shells

use serde::{Deserialize, Serialize};
use std::fmt;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
    pub const GREEN: Rgb = Rgb::new(0x00, 0x80, 0x00);
    pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xFF);
    pub const CYAN: Rgb = Rgb::new(0x00, 0xFF, 0xFF);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal
    #[inline]
    #[must_use]
    pub const fn from_u32(hex: u32) -> Self {
        Rgb {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Build from normalized channels, clamping each into `[0, 1]`
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb {
            r: quantize(r),
            g: quantize(g),
            b: quantize(b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
