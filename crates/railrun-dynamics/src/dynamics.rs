//! Fixed-step longitudinal integrator.

use crate::controls::VehicleControls;
use crate::params::VehicleParams;
use crate::state::VehicleKinematicState;

/// Single-axis train dynamics.
///
/// Holds the kinematic state, the current controls and the acceleration of the
/// previous step (for jerk). Each [`step`](Self::step) is O(1) and total: any
/// `dt` is accepted, with negative or non-finite values treated as zero.
///
/// # Example
///
/// ```
/// use railrun_dynamics::{LongitudinalDynamics, VehicleParams};
///
/// let mut train = LongitudinalDynamics::new(VehicleParams::default());
/// train.set_controls(0.0, 1.0);
/// train.step(1.0 / 60.0);
///
/// // Braking at standstill holds the train; it never rolls backwards.
/// assert!(train.state().speed.abs() < 1e-12);
/// assert!(train.state().acceleration.abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LongitudinalDynamics {
    params: VehicleParams,
    controls: VehicleControls,
    state: VehicleKinematicState,
    previous_acceleration: f64,
    inverse_mass: f64,
    speed_ceiling: f64,
}

impl LongitudinalDynamics {
    /// Create a train at rest with released controls.
    ///
    /// `params` is expected to have passed [`VehicleParams::validate`]; a
    /// non-positive mass or speed ceiling still yields a train that cannot
    /// move rather than NaN state.
    pub fn new(params: VehicleParams) -> Self {
        let inverse_mass = if params.mass.is_finite() && params.mass > 0.0 {
            params.mass.recip()
        } else {
            0.0
        };
        let speed_ceiling = if params.max_speed.is_finite() {
            params.max_speed.max(0.0)
        } else {
            0.0
        };

        Self {
            params,
            controls: VehicleControls::RELEASED,
            state: VehicleKinematicState::default(),
            previous_acceleration: 0.0,
            inverse_mass,
            speed_ceiling,
        }
    }

    /// Set throttle and brake, each clamped to `[0, 1]`.
    pub fn set_controls(&mut self, throttle: f64, brake: f64) {
        self.controls = VehicleControls::new(throttle, brake);
    }

    /// Replace the controls wholesale.
    pub fn apply_controls(&mut self, controls: VehicleControls) {
        self.controls = controls;
    }

    /// Current controls.
    #[inline]
    pub fn controls(&self) -> VehicleControls {
        self.controls
    }

    /// Snapshot of the kinematic state.
    #[inline]
    pub fn state(&self) -> VehicleKinematicState {
        self.state
    }

    /// Parameters the train was built with.
    #[inline]
    pub fn params(&self) -> &VehicleParams {
        &self.params
    }

    /// Net longitudinal force at `speed` under the current controls, in N.
    pub fn net_force(&self, speed: f64) -> f64 {
        let speed = speed.max(0.0);
        let cutoff = self.params.traction_cutoff_speed();
        let taper = if cutoff > 0.0 {
            (1.0 - speed / cutoff).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let traction = self.controls.throttle() * self.params.traction_force_max * taper;
        let brake = self.controls.brake() * self.params.brake_force_max;
        let drag = self.params.drag_coefficient * speed * speed;

        traction - brake - drag - self.params.rolling_resistance
    }

    /// Advance by `dt` seconds.
    ///
    /// Acceleration is always `net_force / mass`, including at rest or at the
    /// speed ceiling; only the integrated speed is clamped. Jerk is derived
    /// from the previous step's acceleration before it is overwritten.
    pub fn step(&mut self, dt: f64) {
        if !(dt.is_finite() && dt > 0.0) {
            self.state.jerk = 0.0;
            return;
        }

        let acceleration = self.net_force(self.state.speed) * self.inverse_mass;

        self.state.jerk = (acceleration - self.previous_acceleration) / dt;
        self.previous_acceleration = acceleration;
        self.state.acceleration = acceleration;
        self.state.speed = (self.state.speed + acceleration * dt).clamp(0.0, self.speed_ceiling);
        self.state.distance += self.state.speed * dt;
    }

    /// Return to rest at distance zero with released controls.
    pub fn reset(&mut self) {
        self.state = VehicleKinematicState::default();
        self.previous_acceleration = 0.0;
        self.controls = VehicleControls::RELEASED;
    }
}

impl Default for LongitudinalDynamics {
    fn default() -> Self {
        Self::new(VehicleParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railrun_test_helpers::assert_approx_eq;

    const H: f64 = 1.0 / 60.0;

    fn run(train: &mut LongitudinalDynamics, ticks: usize) {
        for _ in 0..ticks {
            train.step(H);
        }
    }

    #[test]
    fn test_full_throttle_from_rest() {
        let mut train = LongitudinalDynamics::default();
        train.set_controls(1.0, 0.0);
        train.step(H);

        // (90 000 - 1 500) / 30 000
        let state = train.state();
        assert_approx_eq!(state.acceleration, 2.95, 1e-9);
        assert_approx_eq!(state.speed, 2.95 * H, 1e-12);
        assert_approx_eq!(state.distance, 2.95 * H * H, 1e-12);
        assert_approx_eq!(state.jerk, 2.95 / H, 1e-6);
    }

    #[test]
    fn test_jerk_uses_previous_acceleration() {
        let mut train = LongitudinalDynamics::default();
        train.set_controls(1.0, 0.0);
        train.step(H);
        let first = train.state().acceleration;
        train.step(H);
        let second = train.state();
        assert_approx_eq!(second.jerk, (second.acceleration - first) / H, 1e-9);
    }

    #[test]
    fn test_zero_dt_gives_zero_jerk_and_no_motion() {
        let mut train = LongitudinalDynamics::default();
        train.set_controls(1.0, 0.0);
        run(&mut train, 10);
        let before = train.state();

        train.step(0.0);
        let after = train.state();
        assert!(after.jerk.abs() < 1e-12);
        assert_approx_eq!(after.speed, before.speed, 1e-12);
        assert_approx_eq!(after.distance, before.distance, 1e-12);
    }

    #[test]
    fn test_invalid_dt_treated_as_zero() {
        let mut train = LongitudinalDynamics::default();
        train.set_controls(1.0, 0.0);
        for dt in [-1.0, f64::NAN, f64::INFINITY] {
            train.step(dt);
            assert!(train.state().speed.abs() < 1e-12);
            assert!(train.state().distance.abs() < 1e-12);
        }
    }

    #[test]
    fn test_brake_never_reverses() {
        let mut train = LongitudinalDynamics::default();
        train.set_controls(1.0, 0.0);
        run(&mut train, 120);
        train.set_controls(0.0, 1.0);
        run(&mut train, 600);

        let state = train.state();
        assert!(state.speed.abs() < 1e-12);
        assert_approx_eq!(state.acceleration, -(150_000.0 + 1_500.0) / 30_000.0, 1e-12);
        assert!(state.jerk.abs() < 1e-9);
    }

    #[test]
    fn test_stopping_under_brake_has_no_jerk_spike() {
        let mut train = LongitudinalDynamics::default();
        train.set_controls(1.0, 0.0);
        run(&mut train, 300);
        train.set_controls(0.0, 1.0);
        // The brake application itself is a genuine step in acceleration.
        train.step(H);

        let mut stopped_at = None;
        for tick in 0..600 {
            train.step(H);
            let state = train.state();
            // Drag fades with speed, so jerk stays small and smooth.
            assert!(state.jerk.abs() < 1.0, "tick {tick}: jerk {}", state.jerk);
            if stopped_at.is_none() && state.speed.abs() < 1e-12 {
                stopped_at = Some(tick);
            }
        }
        assert!(stopped_at.is_some());
    }

    #[test]
    fn test_braking_deceleration() {
        let mut train = LongitudinalDynamics::default();
        train.set_controls(1.0, 0.0);
        run(&mut train, 300);
        let v = train.state().speed;

        train.set_controls(0.0, 1.0);
        train.step(H);
        let expected = -(150_000.0 + 12.0 * v * v + 1_500.0) / 30_000.0;
        assert_approx_eq!(train.state().acceleration, expected, 1e-9);
    }

    #[test]
    fn test_coasting_decelerates() {
        let mut train = LongitudinalDynamics::default();
        train.set_controls(1.0, 0.0);
        run(&mut train, 300);
        let v = train.state().speed;
        train.set_controls(0.0, 0.0);
        run(&mut train, 60);
        assert!(train.state().speed < v);
    }

    #[test]
    fn test_traction_tapers_near_top_speed() {
        let mut train = LongitudinalDynamics::default();
        train.set_controls(1.0, 0.0);
        let launch = train.net_force(0.0);
        let near_top = train.net_force(29.0);
        let beyond_cutoff = train.net_force(40.0);
        assert!(near_top < launch * 0.2);
        assert!(beyond_cutoff < 0.0);
    }

    #[test]
    fn test_speed_ceiling_keeps_force_acceleration() {
        let params = VehicleParams {
            max_speed: 5.0,
            traction_taper_ratio: 10.0,
            drag_coefficient: 0.0,
            ..VehicleParams::default()
        };
        let mut train = LongitudinalDynamics::new(params);
        train.set_controls(1.0, 0.0);
        run(&mut train, 600);

        let state = train.state();
        assert_approx_eq!(state.speed, 5.0, 1e-12);
        assert_approx_eq!(
            state.acceleration,
            train.net_force(5.0) / params.mass,
            1e-12
        );
        assert!(state.acceleration > 0.0);
        assert!(state.jerk.abs() < 1e-9);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut train = LongitudinalDynamics::default();
        train.set_controls(1.0, 0.3);
        run(&mut train, 120);
        train.reset();

        assert_eq!(train.state(), VehicleKinematicState::default());
        assert_eq!(train.controls(), VehicleControls::RELEASED);

        // No jerk spike from stale acceleration after a reset.
        train.step(H);
        assert!(train.state().jerk.abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_params_do_not_produce_nan() {
        let params = VehicleParams {
            mass: 0.0,
            max_speed: f64::NAN,
            ..VehicleParams::default()
        };
        let mut train = LongitudinalDynamics::new(params);
        train.set_controls(1.0, 0.0);
        run(&mut train, 10);
        let state = train.state();
        assert!(state.speed.is_finite());
        assert!(state.distance.is_finite());
        assert!(state.acceleration.is_finite());
    }
}
