//! Quark Visualizer Core Library
//!
//! The reusable part of an illustrative 3D quark scene: six flavors at fixed
//! coordinates, slowly rotated every animation tick, surrounded by
//! decorative field lines and 2D panels.
//!
//! ## Rotation Engine
//!
//! - [`compose_rotation`] builds `Rz(θ)·Ry(θ)·Rx(θ)` from one angle in degrees
//! - [`RotationMatrix::apply`] rotates a point, preserving its norm
//!
//! ## Animation
//!
//! - [`AnimationState`] is an explicit value folded through [`tick`] and
//!   [`Command`]s; [`Animator`] wraps it for shells that prefer an owned driver
//!
//! ## Scene data
//!
//! - [`scene`] generates the color field, wave contour, interaction lines,
//!   property chart and info panel content for any renderer

// Core types and utilities
pub mod core_types;

pub mod animation;
pub mod config;
pub mod rotation;
pub mod scene;

// Re-export core types
pub use core_types::{Degrees, Flavor, GluonLine, Point3D, Radians, Rgb};

pub use animation::{
    tick, AngleMode, AnimationState, Animator, Command, Frame, Placement, TickSettings,
};
pub use config::{ConfigError, VisualizerConfig};
pub use rotation::{compose_rotation, RotationMatrix};
