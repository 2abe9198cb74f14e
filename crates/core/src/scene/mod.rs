//! Data for the decorative scene panels
//!
//! Everything here is a pure function of its inputs and the fixed flavor
//! catalog. Renderers (terminal, headless dumps) turn these values into
//! pixels; nothing in this module knows about a particular toolkit.

pub mod fields;
pub mod geometry;
pub mod panels;
pub mod projection;
pub mod simple;

pub use fields::{color_field, viridis, wave_field, ColorField, ScalarField};
pub use geometry::{
    coordinate_axes, fallback_rings, interaction_lines, sphere_mesh, AxisArrow, InteractionLine,
};
pub use panels::{property_chart, PropertyRow, INFO_SYMBOLS, INFO_TEXT};
pub use projection::Projection;
pub use simple::SimpleScene;
