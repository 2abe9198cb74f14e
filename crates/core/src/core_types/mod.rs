//! Core types and utilities

pub mod color;
pub mod flavor;
pub mod gluon;
pub mod units;
pub mod vec3;

pub use color::Rgb;
pub use flavor::Flavor;
pub use gluon::GluonLine;
pub use units::{Degrees, Radians};
pub use vec3::Point3D;
