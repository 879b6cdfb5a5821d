//! Property-based tests for the safe-speed advisory.

use proptest::prelude::*;
use railrun_advisory::{AdvisoryConfig, SpeedAdvisory};
use railrun_test_helpers::fixtures::s_curve_points;
use railrun_test_helpers::must;
use railrun_track::{TerminalConfig, TerminalLayout, TrackGeometry};

proptest! {
    #[test]
    fn curvature_speed_is_bounded_and_monotone(a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let advisory = SpeedAdvisory::default();
        let config = AdvisoryConfig::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let v_lo = advisory.curvature_safe_speed(lo);
        let v_hi = advisory.curvature_safe_speed(hi);
        prop_assert!(v_hi <= v_lo);
        prop_assert!(v_lo >= config.min_safe_speed && v_lo <= config.max_safe_speed);
        prop_assert!(v_hi >= config.min_safe_speed && v_hi <= config.max_safe_speed);
    }

    #[test]
    fn terminal_speed_never_increases_towards_platform_end(d in 0.0f64..700.0, step in 0.0f64..50.0) {
        let layout = TerminalLayout::from_track_length(700.0, &TerminalConfig::default());
        let advisory = SpeedAdvisory::default();
        prop_assert!(
            advisory.terminal_safe_speed(d + step, &layout)
                <= advisory.terminal_safe_speed(d, &layout)
        );
    }

    #[test]
    fn advice_is_pure_and_bounded(d in -100.0f64..800.0) {
        let track = must(TrackGeometry::new(s_curve_points(600.0, 40.0), false));
        let layout = TerminalLayout::from_track_length(track.total_length(), &TerminalConfig::default());
        let advisory = SpeedAdvisory::default();

        let first = advisory.advise(&track, &layout, d);
        let second = advisory.advise(&track, &layout, d);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.safe_speed <= first.curvature_limit);
        prop_assert!(first.safe_speed <= first.terminal_limit);
        prop_assert!(first.safe_speed >= 3.0 && first.safe_speed <= 30.0);
    }
}
