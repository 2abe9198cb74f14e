//! Animation state and tick loop
//!
//! The animation is an explicit value: [`AnimationState`] goes into [`tick`]
//! and a new state comes out together with the [`Frame`] to draw. Widget
//! actions are [`Command`]s folded into the state the same way, so the
//! presentation shell never mutates animation fields directly.
//!
//! Each tick advances the angle by `base_step × speed`, composes one rotation
//! and applies it to each flavor's home position independently. The six
//! placements depend only on the current angle.

use crate::config::VisualizerConfig;
use crate::core_types::{Degrees, Flavor, Point3D};
use crate::rotation::{compose_rotation, RotationMatrix};
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

/// Speed slider range and step
pub const SPEED_MIN: f64 = 0.1;
pub const SPEED_MAX: f64 = 5.0;
pub const SPEED_STEP: f64 = 0.1;

/// Marker size slider range and step
pub const MARKER_SIZE_MIN: f64 = 0.1;
pub const MARKER_SIZE_MAX: f64 = 1.0;
pub const MARKER_SIZE_STEP: f64 = 0.05;

/// How the angle is kept between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleMode {
    /// Grow without bound; only the trigonometric image matters
    #[default]
    Unbounded,
    /// Reduce into `[0, 360)` after each advance
    Wrapped,
}

/// User action on the animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Pause,
    /// Start if paused, pause if running
    Toggle,
    /// Return the angle to zero
    Reset,
    SetSpeed(f64),
    SetMarkerSize(f64),
}

/// Snapshot of everything that changes between ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub angle: Degrees,
    pub running: bool,
    pub speed: f64,
    pub marker_size: f64,
    /// Ticks advanced since start or last reset
    pub frame: u64,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            angle: Degrees::ZERO,
            running: true,
            speed: 1.0,
            marker_size: 0.3,
            frame: 0,
        }
    }
}

/// Clamp into `[min, max]` and snap to the nearest multiple of `step`
///
/// Divides by the step count per unit so decimal steps land on the same
/// value as the literal (`6 / 20 == 0.3`, where `6 * 0.05 != 0.3`).
fn snap(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let per_unit = step.recip();
    let snapped = (value.clamp(min, max) * per_unit).round() / per_unit;
    snapped.clamp(min, max)
}

impl AnimationState {
    /// Initial state from configuration
    pub fn from_config(config: &VisualizerConfig) -> Self {
        Self::default()
            .apply(Command::SetSpeed(config.initial_speed))
            .apply(Command::SetMarkerSize(config.initial_marker_size))
    }

    /// Fold a command into the state, returning the new state
    ///
    /// Out-of-range speeds and sizes are clamped to the slider range and
    /// snapped to its step; non-finite values leave the field unchanged.
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::Start => {
                info!("Animation started");
                Self {
                    running: true,
                    ..self
                }
            }
            Command::Pause => {
                info!("Animation paused");
                Self {
                    running: false,
                    ..self
                }
            }
            Command::Toggle => {
                if self.running {
                    self.apply(Command::Pause)
                } else {
                    self.apply(Command::Start)
                }
            }
            Command::Reset => {
                info!("View reset");
                Self {
                    angle: Degrees::ZERO,
                    frame: 0,
                    ..self
                }
            }
            Command::SetSpeed(value) if value.is_finite() => Self {
                speed: snap(value, SPEED_MIN, SPEED_MAX, SPEED_STEP),
                ..self
            },
            Command::SetMarkerSize(value) if value.is_finite() => Self {
                marker_size: snap(value, MARKER_SIZE_MIN, MARKER_SIZE_MAX, MARKER_SIZE_STEP),
                ..self
            },
            Command::SetSpeed(_) | Command::SetMarkerSize(_) => self,
        }
    }

    /// Angle advance for one tick at the current speed
    pub fn step(&self, base_step: Degrees) -> Degrees {
        base_step * self.speed
    }

    /// Advance the angle by one tick if running
    pub fn advance(self, base_step: Degrees, mode: AngleMode) -> Self {
        if !self.running {
            return self;
        }
        let next = self.angle + self.step(base_step);
        Self {
            angle: match mode {
                AngleMode::Unbounded => next,
                AngleMode::Wrapped => next.wrapped(),
            },
            frame: self.frame + 1,
            ..self
        }
    }

    /// Rotation for the current angle
    pub fn rotation(&self) -> RotationMatrix {
        compose_rotation(self.angle)
    }

    /// Current placements of every flavor
    pub fn frame(&self) -> Frame {
        let rotation = self.rotation();
        Frame {
            index: self.frame,
            angle: self.angle,
            marker_size: self.marker_size,
            placements: Flavor::ALL.map(|flavor| Placement {
                flavor,
                position: rotation.apply(flavor.position()),
            }),
        }
    }
}

/// Tick parameters that stay fixed for a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSettings {
    pub base_step: Degrees,
    pub angle_mode: AngleMode,
}

impl Default for TickSettings {
    fn default() -> Self {
        Self {
            base_step: Degrees::new(0.5),
            angle_mode: AngleMode::Unbounded,
        }
    }
}

impl From<&VisualizerConfig> for TickSettings {
    fn from(config: &VisualizerConfig) -> Self {
        Self {
            base_step: Degrees::new(config.base_step_degrees),
            angle_mode: config.angle_mode,
        }
    }
}

/// One animation step: advance the angle, rotate all flavors
pub fn tick(state: AnimationState, settings: &TickSettings) -> (AnimationState, Frame) {
    let next = state.advance(settings.base_step, settings.angle_mode);
    let frame = next.frame();
    trace!(frame = frame.index, angle = *frame.angle, "tick");
    (next, frame)
}

/// A flavor at its rotated position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub flavor: Flavor,
    pub position: Point3D,
}

/// Everything a renderer needs for one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub index: u64,
    pub angle: Degrees,
    pub marker_size: f64,
    pub placements: [Placement; 6],
}

impl Frame {
    pub fn positions(&self) -> [Point3D; 6] {
        self.placements.map(|p| p.position)
    }

    /// Largest deviation of any placement's norm from its home norm
    pub fn max_norm_drift(&self) -> f64 {
        self.placements
            .iter()
            .map(|p| (p.position.norm() - p.flavor.position().norm()).abs())
            .fold(0.0, f64::max)
    }
}

/// Owned animation driver for presentation shells
#[derive(Debug, Clone)]
pub struct Animator {
    state: AnimationState,
    settings: TickSettings,
}

impl Animator {
    pub fn new(config: &VisualizerConfig) -> Self {
        let settings = TickSettings::from(config);
        let state = AnimationState::from_config(config);
        info!(
            base_step = *settings.base_step,
            mode = ?settings.angle_mode,
            speed = state.speed,
            "Created animator"
        );
        Self { state, settings }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn settings(&self) -> &TickSettings {
        &self.settings
    }

    /// Apply a widget command
    pub fn handle(&mut self, command: Command) {
        self.state = self.state.apply(command);
    }

    /// Run one tick and return the frame to draw
    pub fn tick(&mut self) -> Frame {
        let (next, frame) = tick(self.state, &self.settings);
        self.state = next;
        frame
    }

    /// Run `count` ticks, returning the last frame
    pub fn run(&mut self, count: u32) -> Frame {
        let mut frame = self.state.frame();
        for _ in 0..count {
            frame = self.tick();
        }
        frame
    }
}
