//! Semantic unit types for angles
//!
//! Newtype wrappers that keep degrees and radians from being mixed up when
//! an angle travels from the animation loop into the trigonometry of the
//! rotation engine.
//!
//! Both wrap `f64` so long-running unbounded animations keep their
//! precision. Only `Degrees` is ordered; NaN sorts after every finite value.
//!
//! # Usage
//! ```
//! use quark_viz_core::core_types::units::{Degrees, Radians};
//!
//! let quarter = Degrees::new(90.0);
//! let rad: Radians = quarter.into();
//! assert!((*rad - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let later = quarter + Degrees::new(300.0);
//! assert_eq!(later.wrapped(), Degrees::new(30.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref, Mul, Neg, Sub};

/// Angle in degrees
///
/// Any real value is a valid angle. Values are not reduced modulo 360
/// unless [`Degrees::wrapped`] is called explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(f64);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0.0);
    pub const FULL_TURN: Degrees = Degrees(360.0);

    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }

    /// Reduce into `[0, 360)`
    #[must_use]
    pub fn wrapped(self) -> Self {
        let reduced = self.0.rem_euclid(Self::FULL_TURN.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if reduced >= Self::FULL_TURN.0 {
            Self::ZERO
        } else {
            Degrees(reduced)
        }
    }
}

// Total order so NaN angles still sort (after every finite value)
impl Eq for Degrees {}

impl PartialOrd for Degrees {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Degrees {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Degrees {
    type Target = f64;

    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl From<f64> for Degrees {
    fn from(value: f64) -> Self {
        Degrees(value)
    }
}

impl From<Radians> for Degrees {
    fn from(angle: Radians) -> Self {
        angle.to_degrees()
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl AddAssign for Degrees {
    fn add_assign(&mut self, rhs: Degrees) {
        self.0 += rhs.0;
    }
}

impl Sub for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}

impl Mul<f64> for Degrees {
    type Output = Degrees;
    fn mul(self, rhs: f64) -> Degrees {
        Degrees(self.0 * rhs)
    }
}

impl Neg for Degrees {
    type Output = Degrees;
    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

/// Angle in radians, only produced on the way into trigonometry
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(f64);

impl Radians {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Radians(value)
    }

    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    /// `(sin, cos)` in one call
    #[inline]
    #[must_use]
    pub fn sin_cos(self) -> (f64, f64) {
        self.0.sin_cos()
    }
}

impl Deref for Radians {
    type Target = f64;

    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl From<Degrees> for Radians {
    fn from(angle: Degrees) -> Self {
        angle.to_radians()
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad", self.0)
    }
}
