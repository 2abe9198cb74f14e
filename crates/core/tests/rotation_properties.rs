//! Property checks for the rotation engine over a sweep of angles and points
//!
//! Covers norm preservation, identity at zero, periodicity over full turns,
//! orthonormality, a hand-computed quarter-turn golden value, and the
//! equivalence of many small advances with one large one.

use approx::assert_relative_eq;
use quark_viz_core::{
    compose_rotation, tick, AnimationState, Command, Degrees, Flavor, Point3D, TickSettings,
};

/// Angles from large negative to large positive, including non-round values
fn angle_sweep() -> Vec<Degrees> {
    (-40..=40)
        .map(|i| Degrees::new(f64::from(i) * 37.3))
        .chain([Degrees::new(1e5), Degrees::new(-1e5 - 0.25)])
        .collect()
}

fn point_sweep() -> Vec<Point3D> {
    let mut points = Flavor::home_positions().to_vec();
    points.extend([
        Point3D::new(2.5, -7.0, 0.125),
        Point3D::new(-1e3, 1e-3, 42.0),
        Point3D::zeros(),
    ]);
    points
}

#[test]
fn norm_is_preserved_for_all_angles_and_points() {
    for angle in angle_sweep() {
        let r = compose_rotation(angle);
        for p in point_sweep() {
            let rotated = r.apply(p);
            assert_relative_eq!(rotated.norm(), p.norm(), epsilon = 1e-9, max_relative = 1e-12);
        }
    }
}

#[test]
fn zero_angle_leaves_points_unchanged() {
    let r = compose_rotation(Degrees::ZERO);
    for p in point_sweep() {
        assert_eq!(r.apply(p), p);
    }
}

#[test]
fn full_turn_is_periodic() {
    for angle in angle_sweep() {
        let a = compose_rotation(angle);
        let b = compose_rotation(angle + Degrees::FULL_TURN);
        assert!(
            a.max_difference(&b) < 1e-9,
            "angle {angle} differs after a full turn"
        );
    }
}

#[test]
fn every_rotation_is_orthonormal() {
    for angle in angle_sweep() {
        let r = compose_rotation(angle);
        assert!(r.is_orthonormal(1e-12), "angle {angle}");
        let round_trip = r.inverse().then_after(&r);
        assert!(round_trip.max_difference(&quark_viz_core::RotationMatrix::identity()) < 1e-12);
    }
}

#[test]
fn quarter_turn_golden_value() {
    // Rz(90)·Ry(90)·Rx(90)·(1,0,0)ᵗ = (0, 0, -1)
    let p = compose_rotation(Degrees::new(90.0)).apply(Point3D::new(1.0, 0.0, 0.0));
    assert_relative_eq!(p, Point3D::new(0.0, 0.0, -1.0), epsilon = 1e-12);

    // The bottom flavor at (0,0,1) lands on (1,0,0)
    let q = compose_rotation(Degrees::new(90.0)).apply(Flavor::Bottom.position());
    assert_relative_eq!(q, Point3D::new(1.0, 0.0, 0.0), epsilon = 1e-12);
}

#[test]
fn many_small_steps_match_one_large_rotation() {
    let settings = TickSettings::default();
    for speed in [0.1, 0.7, 1.0, 3.3] {
        let mut state = AnimationState::default().apply(Command::SetSpeed(speed));
        let step = state.step(settings.base_step);
        let ticks = 1000;
        let mut frame = state.frame();
        for _ in 0..ticks {
            (state, frame) = tick(state, &settings);
        }

        let direct = compose_rotation(step * f64::from(ticks));
        for placement in frame.placements {
            assert_relative_eq!(
                placement.position,
                direct.apply(placement.flavor.position()),
                epsilon = 1e-9
            );
        }
    }
}
