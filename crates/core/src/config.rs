//! Visualizer configuration
//!
//! All tunables of the animation loop and the decorative panels live in one
//! serde struct so presentation shells can load them from a JSON file and
//! override individual fields from the command line.

use crate::animation::AngleMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the animation loop and scene generators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Delay between ticks in milliseconds
    pub tick_interval_ms: u64,
    /// Frames in one animation cycle (headless run length)
    pub total_frames: u32,
    /// Angle advance per tick at speed 1.0, in degrees
    pub base_step_degrees: f64,
    /// Whether the angle grows without bound or wraps into `[0, 360)`
    pub angle_mode: AngleMode,
    /// Speed multiplier at startup
    pub initial_speed: f64,
    /// Marker radius at startup
    pub initial_marker_size: f64,
    /// Grid points per side of the color field
    pub color_field_resolution: usize,
    /// Grid points per side of the wave contour
    pub wave_resolution: usize,
    /// Filled contour bands
    pub contour_levels: usize,
    /// Sphere mesh subdivisions per angle
    pub sphere_resolution: usize,
    /// Half-extent of the 3D axes
    pub axis_limit: f64,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            total_frames: 360,
            base_step_degrees: 0.5,
            angle_mode: AngleMode::Unbounded,
            initial_speed: 1.0,
            initial_marker_size: 0.3,
            color_field_resolution: 50,
            wave_resolution: 100,
            contour_levels: 20,
            sphere_resolution: 30,
            axis_limit: 2.0,
        }
    }
}

impl VisualizerConfig {
    /// Load configuration from a JSON file and validate it
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed(e.to_string()))?;
        Self::from_json(&contents)
    }

    /// Parse and validate configuration from a JSON string
    ///
    /// # Errors
    /// Returns error if the string is not valid JSON or fails validation
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(contents).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Check that every field is usable by the animation loop and generators
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::invalid("tick_interval_ms", "must be positive"));
        }
        if !self.base_step_degrees.is_finite() || self.base_step_degrees <= 0.0 {
            return Err(ConfigError::invalid(
                "base_step_degrees",
                "must be finite and positive",
            ));
        }
        if !self.initial_speed.is_finite() || self.initial_speed <= 0.0 {
            return Err(ConfigError::invalid(
                "initial_speed",
                "must be finite and positive",
            ));
        }
        if !self.initial_marker_size.is_finite() || self.initial_marker_size <= 0.0 {
            return Err(ConfigError::invalid(
                "initial_marker_size",
                "must be finite and positive",
            ));
        }
        if !self.axis_limit.is_finite() || self.axis_limit <= 0.0 {
            return Err(ConfigError::invalid(
                "axis_limit",
                "must be finite and positive",
            ));
        }
        for (name, value) in [
            ("color_field_resolution", self.color_field_resolution),
            ("wave_resolution", self.wave_resolution),
            ("sphere_resolution", self.sphere_resolution),
        ] {
            if value < 2 {
                return Err(ConfigError::invalid(name, "must be at least 2"));
            }
        }
        if self.contour_levels == 0 {
            return Err(ConfigError::invalid("contour_levels", "must be positive"));
        }
        Ok(())
    }
}

/// Errors that can occur while loading configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to read file
    ReadFailed(String),
    /// Failed to parse or serialize JSON
    ParseFailed(String),
    /// A field holds an unusable value
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: &str) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadFailed(msg) => write!(f, "Failed to read config: {msg}"),
            ConfigError::ParseFailed(msg) => write!(f, "Failed to parse config: {msg}"),
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid config field '{field}': {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
