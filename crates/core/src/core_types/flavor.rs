//! The six quark flavors shown in the scene
//!
//! Every flavor carries fixed display data (color, charge, mass, spin) and a
//! home position. The set never changes at runtime, so it is a closed enum
//! with `const` accessors rather than a keyed lookup table.

use super::color::Rgb;
use super::vec3::Point3D;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quark flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Flavor {
    Up,
    Down,
    Charm,
    Strange,
    Top,
    Bottom,
}

impl Flavor {
    /// All quarks are spin-1/2 fermions
    pub const SPIN_LABEL: &'static str = "1/2";

    /// All flavors in display order
    pub const ALL: [Flavor; 6] = [
        Flavor::Up,
        Flavor::Down,
        Flavor::Charm,
        Flavor::Strange,
        Flavor::Top,
        Flavor::Bottom,
    ];

    /// Lower-case label
    pub const fn label(self) -> &'static str {
        match self {
            Flavor::Up => "up",
            Flavor::Down => "down",
            Flavor::Charm => "charm",
            Flavor::Strange => "strange",
            Flavor::Top => "top",
            Flavor::Bottom => "bottom",
        }
    }

    /// Single-letter symbol (u, d, c, s, t, b)
    pub const fn symbol(self) -> char {
        match self {
            Flavor::Up => 'u',
            Flavor::Down => 'd',
            Flavor::Charm => 'c',
            Flavor::Strange => 's',
            Flavor::Top => 't',
            Flavor::Bottom => 'b',
        }
    }

    pub const fn color(self) -> Rgb {
        match self {
            Flavor::Up => Rgb::from_u32(0xFF0000),
            Flavor::Down => Rgb::from_u32(0x0000FF),
            Flavor::Charm => Rgb::from_u32(0x00FF00),
            Flavor::Strange => Rgb::from_u32(0xFF00FF),
            Flavor::Top => Rgb::from_u32(0xFFA500),
            Flavor::Bottom => Rgb::from_u32(0x800080),
        }
    }

    /// Electric charge in thirds of the elementary charge
    pub const fn charge_thirds(self) -> i8 {
        match self {
            Flavor::Up | Flavor::Charm | Flavor::Top => 2,
            Flavor::Down | Flavor::Strange | Flavor::Bottom => -1,
        }
    }

    /// Electric charge in units of e
    pub fn charge(self) -> f64 {
        f64::from(self.charge_thirds()) / 3.0
    }

    pub const fn charge_label(self) -> &'static str {
        match self.charge_thirds() {
            2 => "+2/3",
            _ => "-1/3",
        }
    }

    /// Rest mass in MeV
    pub const fn mass_mev(self) -> f64 {
        match self {
            Flavor::Up => 2.3,
            Flavor::Down => 4.8,
            Flavor::Charm => 1280.0,
            Flavor::Strange => 95.0,
            Flavor::Top => 173_000.0,
            Flavor::Bottom => 4180.0,
        }
    }

    pub const fn mass_label(self) -> &'static str {
        match self {
            Flavor::Up => "2.3 MeV",
            Flavor::Down => "4.8 MeV",
            Flavor::Charm => "1.28 GeV",
            Flavor::Strange => "95 MeV",
            Flavor::Top => "173 GeV",
            Flavor::Bottom => "4.18 GeV",
        }
    }

    /// Fixed home position before any rotation
    pub fn position(self) -> Point3D {
        let [x, y, z] = self.coordinates();
        Point3D::new(x, y, z)
    }

    const fn coordinates(self) -> [f64; 3] {
        match self {
            Flavor::Up => [1.0, 0.0, 0.0],
            Flavor::Down => [-0.5, 0.87, 0.0],
            Flavor::Charm => [-0.5, -0.87, 0.0],
            Flavor::Strange => [0.5, -0.87, 0.5],
            Flavor::Top => [0.5, 0.87, -0.5],
            Flavor::Bottom => [0.0, 0.0, 1.0],
        }
    }

    /// Home positions of every flavor, indexed like [`Flavor::ALL`]
    pub fn home_positions() -> [Point3D; 6] {
        Flavor::ALL.map(Flavor::position)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charges_sum_to_one() {
        // Three up-type (+2/3) and three down-type (-1/3)
        let total: i32 = Flavor::ALL
            .iter()
            .map(|f| i32::from(f.charge_thirds()))
            .sum();
        assert_eq!(total, 3);
        assert!((Flavor::Up.charge() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(Flavor::Bottom.charge_label(), "-1/3");
    }

    #[test]
    fn test_top_is_heaviest() {
        let heaviest = Flavor::ALL
            .iter()
            .copied()
            .max_by(|a, b| a.mass_mev().total_cmp(&b.mass_mev()));
        assert_eq!(heaviest, Some(Flavor::Top));
    }

    #[test]
    fn test_home_positions_match_order() {
        let homes = Flavor::home_positions();
        assert_eq!(homes[0], Point3D::new(1.0, 0.0, 0.0));
        assert_eq!(homes[5], Point3D::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_display_is_upper_case() {
        assert_eq!(Flavor::Strange.to_string(), "STRANGE");
        assert_eq!(Flavor::Top.color().to_string(), "#FFA500");
    }
}
