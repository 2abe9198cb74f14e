//! Static content of the property chart and the info panel

use crate::core_types::{Flavor, Rgb};

/// One bar of the property chart (mass) with its charge marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyRow {
    pub flavor: Flavor,
    pub mass_mev: f64,
    pub charge: f64,
    pub color: Rgb,
}

/// Charge axis range of the property chart
pub const CHARGE_AXIS: (f64, f64) = (-0.5, 1.0);

pub fn property_chart() -> [PropertyRow; 6] {
    Flavor::ALL.map(|flavor| PropertyRow {
        flavor,
        mass_mev: flavor.mass_mev(),
        charge: flavor.charge(),
        color: flavor.color(),
    })
}

/// Info panel body, one entry per line
pub const INFO_TEXT: &[&str] = &[
    "QUANTUM CHROMODYNAMICS (QCD) VISUALIZATION",
    "",
    "Color Charges:",
    "• Red, Green, Blue (Anti-colors: Anti-red, etc.)",
    "• Confinement: Quarks cannot exist alone",
    "• Asymptotic Freedom: Weak coupling at high energy",
    "",
    "Quark Properties:",
    "• Spin: 1/2 (Fermions)",
    "• 6 Flavors: u, d, c, s, t, b",
    "• 3 Generations",
    "",
    "Strong Force:",
    "• Mediated by Gluons (8 types)",
    "• Carries color charge",
    "• Non-Abelian gauge theory",
];

/// Highlighted formulas shown beside the info text
pub const INFO_SYMBOLS: &[&str] = &[
    "SU(3)_C",
    "Q = ±2/3, ±1/3",
    "g_s ≈ 1",
    "Λ_QCD ≈ 200 MeV",
];
