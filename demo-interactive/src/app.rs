//! Application state for the terminal shell
//!
//! Holds the animator, the current frame, and the panel data that never
//! changes between ticks (color field, contour bands, interaction lines).
//! Key presses become [`Action`]s; animation changes go through
//! [`Command`]s so the shell never edits animation fields itself.

use quark_viz_core::animation::{MARKER_SIZE_STEP, SPEED_STEP};
use quark_viz_core::scene::{
    color_field, interaction_lines, viridis, wave_field, InteractionLine, Projection,
};
use quark_viz_core::{AnimationState, Animator, Command, Frame, Rgb, VisualizerConfig};
use ratatui::crossterm::event::KeyCode;
use ratatui::style::Color;

/// Points per interaction line
const INTERACTION_POINTS: usize = 20;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Control(Command),
    Quit,
}

/// Map a key to an action given the current state
///
/// `+`/`-` nudge the speed slider, `]`/`[` the marker size slider.
pub fn action_for_key(code: KeyCode, state: &AnimationState) -> Option<Action> {
    let action = match code {
        KeyCode::Char('s' | 'S') => Action::Control(Command::Start),
        KeyCode::Char('p' | 'P') => Action::Control(Command::Pause),
        KeyCode::Char(' ') => Action::Control(Command::Toggle),
        KeyCode::Char('r' | 'R') => Action::Control(Command::Reset),
        KeyCode::Char('+' | '=') | KeyCode::Up => {
            Action::Control(Command::SetSpeed(state.speed + SPEED_STEP))
        }
        KeyCode::Char('-') | KeyCode::Down => {
            Action::Control(Command::SetSpeed(state.speed - SPEED_STEP))
        }
        KeyCode::Char(']') | KeyCode::Right => {
            Action::Control(Command::SetMarkerSize(state.marker_size + MARKER_SIZE_STEP))
        }
        KeyCode::Char('[') | KeyCode::Left => {
            Action::Control(Command::SetMarkerSize(state.marker_size - MARKER_SIZE_STEP))
        }
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Precomputed static panel contents
pub struct StaticPanels {
    /// Color field samples in world coordinates
    pub color_cells: Vec<((f64, f64), Color)>,
    /// Wave samples grouped by contour band, lowest band first
    pub contour_bands: Vec<(Color, Vec<(f64, f64)>)>,
    pub wave_range: (f64, f64),
    pub interactions: Vec<InteractionLine>,
}

impl StaticPanels {
    pub fn new(config: &VisualizerConfig) -> Self {
        let colors = color_field(config.color_field_resolution);
        let mut color_cells = Vec::with_capacity(colors.pixels.len());
        for iy in 0..colors.resolution {
            for ix in 0..colors.resolution {
                let at = (colors.coordinate(ix), colors.coordinate(iy));
                color_cells.push((at, to_color(colors.rgb(ix, iy))));
            }
        }

        let wave = wave_field(config.wave_resolution);
        let levels = config.contour_levels;
        let mut contour_bands: Vec<(Color, Vec<(f64, f64)>)> = (0..levels)
            .map(|band| {
                let t = band as f64 / (levels - 1).max(1) as f64;
                (to_color(viridis(t)), Vec::new())
            })
            .collect();
        for (i, band) in wave.bands(levels).into_iter().enumerate() {
            let (ix, iy) = (i % wave.resolution, i / wave.resolution);
            contour_bands[band]
                .1
                .push((wave.coordinate(ix), wave.coordinate(iy)));
        }

        Self {
            color_cells,
            contour_bands,
            wave_range: (wave.min(), wave.max()),
            interactions: interaction_lines(INTERACTION_POINTS),
        }
    }
}

pub struct App {
    pub config: VisualizerConfig,
    pub animator: Animator,
    pub frame: Frame,
    pub panels: StaticPanels,
    pub projection: Projection,
    /// Last control feedback shown in the status panel
    pub message: &'static str,
}

impl App {
    pub fn new(config: VisualizerConfig) -> Self {
        let animator = Animator::new(&config);
        let frame = animator.state().frame();
        let panels = StaticPanels::new(&config);
        Self {
            config,
            animator,
            frame,
            panels,
            projection: Projection::default(),
            message: "Animation started",
        }
    }

    pub fn on_tick(&mut self) {
        self.frame = self.animator.tick();
    }

    /// Handle a key press; returns `false` when the app should quit
    pub fn on_key(&mut self, code: KeyCode) -> bool {
        match action_for_key(code, self.animator.state()) {
            Some(Action::Quit) => false,
            Some(Action::Control(command)) => {
                self.animator.handle(command);
                self.message = match command {
                    Command::Start => "Animation started",
                    Command::Pause => "Animation paused",
                    Command::Toggle if self.animator.state().running => "Animation started",
                    Command::Toggle => "Animation paused",
                    Command::Reset => "View reset",
                    Command::SetSpeed(_) => "Speed changed",
                    Command::SetMarkerSize(_) => "Quark size changed",
                };
                // Redraw the current angle immediately (reset, size change)
                self.frame = self.animator.state().frame();
                true
            }
            None => true,
        }
    }
}
