//! End-to-end runs of the animation loop as a presentation shell drives it

use approx::assert_relative_eq;
use quark_viz_core::{
    AngleMode, Animator, Command, Degrees, Flavor, VisualizerConfig,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn one_cycle_of_default_config() {
    let config = VisualizerConfig::default();
    let mut animator = Animator::new(&config);
    let frame = animator.run(config.total_frames);

    // 360 ticks at 0.5° per tick is half a turn
    assert_eq!(frame.index, 360);
    assert_eq!(frame.angle, Degrees::new(180.0));
    assert!(frame.max_norm_drift() < 1e-12);
}

#[test]
fn unbounded_mode_keeps_growing() {
    let mut animator = Animator::new(&VisualizerConfig::default());
    animator.run(2000);
    assert_eq!(animator.state().angle, Degrees::new(1000.0));
}

#[test]
fn wrapped_mode_matches_unbounded_positions() {
    let unbounded_config = VisualizerConfig {
        base_step_degrees: 3.7,
        ..Default::default()
    };
    let wrapped_config = VisualizerConfig {
        angle_mode: AngleMode::Wrapped,
        ..unbounded_config.clone()
    };

    let mut unbounded = Animator::new(&unbounded_config);
    let mut wrapped = Animator::new(&wrapped_config);
    for _ in 0..500 {
        let a = unbounded.tick();
        let b = wrapped.tick();
        assert!(*b.angle < 360.0);
        for (pa, pb) in a.placements.iter().zip(b.placements.iter()) {
            assert_eq!(pa.flavor, pb.flavor);
            assert_relative_eq!(pa.position, pb.position, epsilon = 1e-9);
        }
    }
}

#[test]
fn widget_session() {
    let mut animator = Animator::new(&VisualizerConfig::default());

    animator.run(10);
    assert_eq!(animator.state().angle, Degrees::new(5.0));

    animator.handle(Command::Pause);
    animator.run(10);
    assert_eq!(animator.state().angle, Degrees::new(5.0));

    animator.handle(Command::SetSpeed(2.0));
    animator.handle(Command::Start);
    animator.run(10);
    assert_relative_eq!(*animator.state().angle, 15.0, epsilon = 1e-9);

    animator.handle(Command::Reset);
    let frame = animator.tick();
    assert_relative_eq!(*frame.angle, 1.0, epsilon = 1e-9);
    assert_eq!(frame.index, 1);

    animator.handle(Command::SetMarkerSize(0.62));
    assert_relative_eq!(animator.state().marker_size, 0.6, epsilon = 1e-12);
}

#[test]
fn frame_lists_every_flavor_once() {
    let mut animator = Animator::new(&VisualizerConfig::default());
    let frame = animator.tick();
    let flavors: Vec<Flavor> = frame.placements.iter().map(|p| p.flavor).collect();
    assert_eq!(flavors, Flavor::ALL.to_vec());
}

#[test]
fn frame_serializes_to_json() {
    let mut animator = Animator::new(&VisualizerConfig::default());
    let frame = animator.run(4);
    let json = serde_json::to_string(&frame).expect("frame serializes");
    assert!(json.contains("\"Up\""));
    let back: quark_viz_core::Frame = serde_json::from_str(&json).expect("frame parses");
    assert_eq!(back.index, 4);
    assert_eq!(back.angle, frame.angle);
}
