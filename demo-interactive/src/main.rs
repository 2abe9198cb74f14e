//! Interactive quark visualizer
//!
//! Terminal dashboard with the rotating 3D flavor scene and five static
//! panels. Keys drive the start/pause/reset buttons and the speed and size
//! sliders. If the terminal cannot be set up, a simplified text scene is
//! printed instead.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --package demo-interactive
//! cargo run --release --package demo-interactive -- --tick-ms 30 --wrap-angle
//! ```

mod app;
mod logging;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use logging::DeferredLog;
use quark_viz_core::scene::{Projection, SimpleScene};
use quark_viz_core::{AngleMode, VisualizerConfig};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Interactive quark visualizer
#[derive(Parser, Debug)]
#[command(name = "quark-viz")]
#[command(about = "Interactive 3D visualization of the six quark flavors", long_about = None)]
struct Args {
    /// JSON configuration file (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Milliseconds between animation ticks
    #[arg(short, long)]
    tick_ms: Option<u64>,

    /// Reduce the angle into [0, 360) after every tick
    #[arg(long)]
    wrap_angle: bool,

    /// Skip the dashboard and print the simplified scene
    #[arg(long)]
    simple: bool,
}

fn main() -> Result<()> {
    let log = DeferredLog::default();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(log.clone())
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    if args.simple {
        print_simple_scene();
        return Ok(());
    }

    if let Err(err) = run_dashboard(config, &log) {
        warn!("Error in full visualization: {err:#}");
        warn!("Trying simplified version...");
        print_simple_scene();
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<VisualizerConfig> {
    let mut config = match &args.config {
        Some(path) => VisualizerConfig::load(path)
            .with_context(|| format!("Loading config from {}", path.display()))?,
        None => VisualizerConfig::default(),
    };
    if let Some(ms) = args.tick_ms {
        config.tick_interval_ms = ms;
    }
    if args.wrap_angle {
        config.angle_mode = AngleMode::Wrapped;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Run the dashboard with logging held back until the terminal is restored
fn run_dashboard(config: VisualizerConfig, log: &DeferredLog) -> Result<()> {
    log.hold();
    let result = ratatui::try_init()
        .context("Terminal setup failed")
        .and_then(|mut terminal| {
            let result = run_loop(&mut terminal, App::new(config));
            ratatui::restore();
            result
        });
    log.release().context("Writing held log output")?;
    result
}

fn run_loop(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(app.config.tick_interval_ms);
    info!(?tick_rate, "Dashboard running");
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.on_key(key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }

    info!(frames = app.frame.index, "Dashboard closed");
    Ok(())
}

fn print_simple_scene() {
    let scene = SimpleScene::default();
    for line in scene.describe() {
        println!("{line}");
    }
    println!();
    for row in scene.sketch(&Projection::default(), 72, 28) {
        println!("{}", row.trim_end());
    }
}
