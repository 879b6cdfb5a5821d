//! A simple driver for headless runs.

use railrun_dynamics::VehicleControls;
use railrun_engine::Snapshot;
use railrun_track::TerminalLayout;

/// Proportional speed keeper that stops in the platform.
///
/// Holds `cruise_fraction` of the advised safe speed, braking in proportion
/// to any excess. Once the train is inside the platform it brakes steadily to
/// a stop.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pub cruise_fraction: f64,
    pub throttle_gain: f64,
    pub brake_gain: f64,
    pub platform_brake: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            cruise_fraction: 0.9,
            throttle_gain: 0.5,
            brake_gain: 0.3,
            platform_brake: 0.5,
        }
    }
}

impl Autopilot {
    /// Controls for the next frame.
    pub fn controls(&self, snapshot: &Snapshot, layout: &TerminalLayout) -> VehicleControls {
        let distance = snapshot.kinematics.distance;
        if distance >= layout.station_start_distance {
            return VehicleControls::new(0.0, self.platform_brake);
        }

        let error = self.cruise_fraction * snapshot.safe_speed - snapshot.kinematics.speed;
        if error >= 0.0 {
            VehicleControls::new(error * self.throttle_gain, 0.0)
        } else {
            VehicleControls::new(0.0, -error * self.brake_gain)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railrun_engine::{Level, LevelDefinition, Simulation, SimulationConfig};
    use railrun_test_helpers::must;

    fn snapshot_at_rest() -> (Snapshot, TerminalLayout) {
        let config = SimulationConfig::default();
        let level = must(Level::build(&LevelDefinition::default(), &config.terminal));
        let layout = *level.layout();
        let mut sim = Simulation::new(config, level);
        sim.start();
        (sim.snapshot(), layout)
    }

    #[test]
    fn test_accelerates_from_rest() {
        let (snapshot, layout) = snapshot_at_rest();
        let controls = Autopilot::default().controls(&snapshot, &layout);
        assert!(controls.throttle() > 0.0);
        assert!(controls.brake().abs() < 1e-12);
    }

    #[test]
    fn test_brakes_when_over_safe_speed() {
        let (mut snapshot, layout) = snapshot_at_rest();
        snapshot.kinematics.speed = snapshot.safe_speed + 5.0;
        let controls = Autopilot::default().controls(&snapshot, &layout);
        assert!(controls.throttle().abs() < 1e-12);
        assert!(controls.brake() > 0.0);
    }

    #[test]
    fn test_brakes_inside_platform() {
        let (mut snapshot, layout) = snapshot_at_rest();
        snapshot.kinematics.distance = layout.station_start_distance + 1.0;
        snapshot.kinematics.speed = 2.0;
        let controls = Autopilot::default().controls(&snapshot, &layout);
        assert!((controls.brake() - 0.5).abs() < 1e-12);
    }
}
