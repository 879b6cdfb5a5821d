//! Property-based tests for track geometry.

use proptest::prelude::*;
use railrun_test_helpers::fixtures::{circle_points, s_curve_points, straight_points};
use railrun_test_helpers::{assert_approx_eq, must};
use railrun_track::{CurvatureEstimator, TrackGeometry};

fn s_curve() -> TrackGeometry {
    must(TrackGeometry::new(s_curve_points(600.0, 40.0), false))
}

proptest! {
    #[test]
    fn position_then_closest_point_round_trips(fraction in 0.0f64..=1.0) {
        let track = s_curve();
        let d = fraction * track.total_length();
        let p = track.position_at_distance(d);
        let back = track.distance_at_position(p);
        prop_assert!((back - d).abs() < 0.05, "d {} back {}", d, back);
    }

    #[test]
    fn closed_loop_round_trip(fraction in 0.0f64..1.0) {
        let track = must(TrackGeometry::new(circle_points(80.0, 24), true));
        let d = fraction * track.total_length();
        let back = track.distance_at_position(track.position_at_distance(d));
        let wrapped = (back - d).abs().min(track.total_length() - (back - d).abs());
        prop_assert!(wrapped < 0.05, "d {} back {}", d, back);
    }

    #[test]
    fn tangent_is_unit_everywhere(d in -100.0f64..800.0) {
        let track = s_curve();
        let t = track.tangent_at_distance(d);
        prop_assert!((t.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn open_track_clamps(d in proptest::num::f64::ANY) {
        let track = s_curve();
        let resolved = track.resolve_distance(d);
        prop_assert!(resolved >= 0.0 && resolved <= track.total_length());
        prop_assert!(track.position_at_distance(d).is_finite());
    }

    #[test]
    fn closed_track_wraps(d in -5_000.0f64..5_000.0) {
        let track = must(TrackGeometry::new(circle_points(30.0, 12), true));
        let resolved = track.resolve_distance(d);
        prop_assert!(resolved >= 0.0 && resolved < track.total_length());
        let a = track.position_at_distance(d);
        let b = track.position_at_distance(d + track.total_length());
        prop_assert!(a.distance(b) < 1e-6);
    }

    #[test]
    fn curvature_is_finite_and_non_negative(d in -50.0f64..700.0) {
        let track = s_curve();
        let k = CurvatureEstimator::default().curvature_at(&track, d);
        prop_assert!(k.is_finite() && k >= 0.0);
    }
}

#[test]
fn equal_distance_steps_cover_equal_path() {
    let track = s_curve();
    let steps = 200;
    let step = track.total_length() / f64::from(steps);
    for i in 0..steps {
        let a = track.position_at_distance(step * f64::from(i));
        let b = track.position_at_distance(step * f64::from(i + 1));
        // Chord never exceeds the arc and stays close to it at this spacing.
        let chord = a.distance(b);
        assert!(chord <= step * 1.02, "step {i}: chord {chord}");
        assert!(chord >= step * 0.95, "step {i}: chord {chord}");
    }
}

#[test]
fn straight_fixture_length_matches() {
    let track = must(TrackGeometry::new(straight_points(430.0), false));
    assert_approx_eq!(track.total_length(), 430.0, 1e-6);
}
