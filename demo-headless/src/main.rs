//! Headless quark visualizer
//!
//! Drives the animation loop without a terminal UI and prints the rotated
//! flavor positions every few frames, as a text table or as JSON lines.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-headless -- --frames 720 --speed 2.0 --report-interval 60
//! cargo run --package demo-headless -- --json --script "60:pause,90:start,120:reset"
//! cargo run --package demo-headless -- --simple
//! ```

mod runner;
mod script;

use anyhow::{Context, Result};
use clap::Parser;
use quark_viz_core::scene::{Projection, SimpleScene};
use quark_viz_core::{AngleMode, Animator, Frame, VisualizerConfig};
use script::parse_script;
use std::path::PathBuf;

/// Headless quark visualizer
#[derive(Parser, Debug)]
#[command(name = "quark-viz-headless")]
#[command(about = "Rotate the six quark flavors and print their positions", long_about = None)]
struct Args {
    /// JSON configuration file (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to run (default: one configured cycle)
    #[arg(short, long)]
    frames: Option<u32>,

    /// Rotation speed multiplier (0.1-5.0)
    #[arg(short, long)]
    speed: Option<f64>,

    /// Marker size (0.1-1.0)
    #[arg(long)]
    marker_size: Option<f64>,

    /// Reduce the angle into [0, 360) after every tick
    #[arg(long)]
    wrap_angle: bool,

    /// Print a report every N frames
    #[arg(short, long, default_value_t = 30)]
    report_interval: u32,

    /// Emit one JSON object per reported frame
    #[arg(long)]
    json: bool,

    /// Widget commands, e.g. "60:pause,90:start,120:speed=2.5,200:reset"
    #[arg(long, default_value = "")]
    script: String,

    /// Print the simplified static scene and exit
    #[arg(long)]
    simple: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.simple {
        print_simple_scene();
        return Ok(());
    }

    let config = load_config(&args)?;
    let frames = args.frames.unwrap_or(config.total_frames);
    let script = parse_script(&args.script).context("Invalid --script")?;

    let mut animator = Animator::new(&config);
    if !args.json {
        println!("=== Quark Structure Rotation ===\n");
        println!(
            "Frames: {}, step: {:.2}°/tick at speed {:.1}, angle mode: {:?}\n",
            frames,
            config.base_step_degrees,
            animator.state().speed,
            config.angle_mode
        );
    }

    let max_drift = runner::run(
        &mut animator,
        &script,
        frames,
        args.report_interval,
        |frame, running| {
            if args.json {
                println!("{}", serde_json::to_string(frame)?);
            } else {
                print_frame(frame, running);
            }
            Ok(())
        },
    )?;

    if !args.json {
        println!("=== Summary ===");
        println!("Final angle: {}", animator.state().angle);
        println!("Max norm drift: {:.3e}", max_drift);
    }

    Ok(())
}

/// Config file (if any) with command-line overrides applied
fn load_config(args: &Args) -> Result<VisualizerConfig> {
    let mut config = match &args.config {
        Some(path) => VisualizerConfig::load(path)
            .with_context(|| format!("Loading config from {}", path.display()))?,
        None => VisualizerConfig::default(),
    };
    if let Some(speed) = args.speed {
        config.initial_speed = speed;
    }
    if let Some(size) = args.marker_size {
        config.initial_marker_size = size;
    }
    if args.wrap_angle {
        config.angle_mode = AngleMode::Wrapped;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn print_frame(frame: &Frame, running: bool) {
    println!(
        "Frame {:>5} | angle {:>8} | marker {:.2}{}",
        frame.index,
        frame.angle.to_string(),
        frame.marker_size,
        if running { "" } else { " | PAUSED" }
    );
    for placement in &frame.placements {
        let p = placement.position;
        println!(
            "  {:<8} Q={:<5} ({:>6.3}, {:>6.3}, {:>6.3})  |p|={:.3}",
            placement.flavor.to_string(),
            placement.flavor.charge_label(),
            p.x,
            p.y,
            p.z,
            p.norm()
        );
    }
    println!();
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
