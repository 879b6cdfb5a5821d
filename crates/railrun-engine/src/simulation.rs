//! The per-tick simulation.

use glam::DVec3;
use railrun_advisory::{Advisory, SpeedAdvisory};
use railrun_comfort::{ComfortAccumulator, ComfortState, PenaltyBreakdown};
use railrun_dynamics::{LongitudinalDynamics, VehicleControls, VehicleKinematicState};
use railrun_rules::{
    FailureReason, HudFlags, RunInputs, RunState, RunStateMachine, StatusMessage, Transition,
};
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::config::SimulationConfig;
use crate::level::Level;

/// Immutable view of the simulation after a tick.
///
/// This is everything rendering, audio and HUD collaborators may read. It is a
/// copy; writing to it has no effect on the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Speed, distance, acceleration and jerk.
    pub kinematics: VehicleKinematicState,
    /// Controls in effect.
    pub controls: VehicleControls,
    /// Comfort and its ceiling.
    pub comfort: ComfortState,
    /// Comfort as a fraction of the ceiling.
    pub comfort_ratio: f64,
    /// Penalty rates applied by the last tick.
    pub penalties: PenaltyBreakdown,
    /// Run state.
    pub run_state: RunState,
    /// Failure reason, if the run failed.
    pub failure_reason: Option<FailureReason>,
    /// Driver guidance.
    pub status: StatusMessage,
    /// End-of-run overlay flags.
    pub hud: HudFlags,
    /// Advised speed, the lower of the two limits below.
    pub safe_speed: f64,
    /// Curvature-limited speed.
    pub curvature_limit: f64,
    /// Terminal-guidance speed.
    pub terminal_limit: f64,
    /// Ticks simulated while running since construction.
    pub tick: u64,
}

/// One train on one level.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    level: Level,
    dynamics: LongitudinalDynamics,
    advisory: SpeedAdvisory,
    comfort: ComfortAccumulator,
    rules: RunStateMachine,
    advice: Advisory,
    previous_distance: f64,
    ticks: u64,
}

impl Simulation {
    /// Create a simulation in [`RunState::Ready`].
    ///
    /// Each component is built from its own section of `config`, which is
    /// expected to have passed [`SimulationConfig::validate`].
    pub fn new(config: SimulationConfig, level: Level) -> Self {
        let dynamics = LongitudinalDynamics::new(config.vehicle);
        let advisory = SpeedAdvisory::from_config(config.advisory.clone());
        let comfort = ComfortAccumulator::new(config.comfort);
        let rules = RunStateMachine::new(config.rules);
        let advice = advisory.advise(level.track(), level.layout(), 0.0);

        info!(
            level = level.name(),
            length = level.track().total_length(),
            closed = level.track().is_closed(),
            "level loaded"
        );

        Self {
            config,
            level,
            dynamics,
            advisory,
            comfort,
            rules,
            advice,
            previous_distance: 0.0,
            ticks: 0,
        }
    }

    /// Configuration the simulation was built with.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current level.
    #[inline]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Current run state.
    #[inline]
    pub fn state(&self) -> RunState {
        self.rules.state()
    }

    /// Current kinematic state.
    #[inline]
    pub fn kinematics(&self) -> VehicleKinematicState {
        self.dynamics.state()
    }

    /// Advice computed on the last tick (or at load/restart).
    #[inline]
    pub fn advice(&self) -> &Advisory {
        &self.advice
    }

    /// Distance at the start of the last tick, for interpolation.
    #[inline]
    pub fn previous_distance(&self) -> f64 {
        self.previous_distance
    }

    /// Submit controls for the next tick.
    pub fn set_controls(&mut self, throttle: f64, brake: f64) {
        self.dynamics.set_controls(throttle, brake);
    }

    /// Submit controls for the next tick.
    pub fn apply_controls(&mut self, controls: VehicleControls) {
        self.dynamics.apply_controls(controls);
    }

    /// Depart. Only has an effect in [`RunState::Ready`].
    pub fn start(&mut self) {
        if self.rules.start() {
            info!(level = self.level.name(), "run started");
        }
    }

    /// Advance one fixed step of `h` seconds.
    ///
    /// Stages run in order: dynamics, advisory, comfort, rules. Outside
    /// [`RunState::Running`] only the advisory is refreshed and the train
    /// stays where it is.
    pub fn tick(&mut self, h: f64) -> Transition {
        let kinematics = self.dynamics.state();
        self.previous_distance = kinematics.distance;

        let running = self.rules.state().is_running();
        if running {
            self.dynamics.step(h);
        }

        let kinematics = self.dynamics.state();
        self.advice = self
            .advisory
            .advise(self.level.track(), self.level.layout(), kinematics.distance);

        if !running {
            return Transition::None;
        }

        let comfort = self.comfort.update(
            kinematics.speed,
            self.advice.safe_speed,
            kinematics.acceleration,
            kinematics.jerk,
            h,
        );

        let transition = self.rules.step(&RunInputs {
            distance: kinematics.distance,
            speed: kinematics.speed,
            comfort,
            layout: *self.level.layout(),
        });
        self.ticks += 1;

        trace!(
            tick = self.ticks,
            distance = kinematics.distance,
            speed = kinematics.speed,
            safe_speed = self.advice.safe_speed,
            comfort,
            "tick"
        );

        if let Transition::To(state) = transition {
            info!(
                state = %state,
                distance = kinematics.distance,
                speed = kinematics.speed,
                comfort,
                tick = self.ticks,
                "run state changed"
            );
        }
        transition
    }

    /// Put the train back at the start with full comfort and keep running.
    ///
    /// Works from any state; this is the only way out of Won or Failed.
    pub fn restart(&mut self) {
        let from = self.rules.state();
        self.dynamics.reset();
        self.comfort.reset();
        self.rules.restart();
        self.previous_distance = 0.0;
        self.ticks = 0;
        self.advice = self
            .advisory
            .advise(self.level.track(), self.level.layout(), 0.0);
        info!(from = %from, level = self.level.name(), "run restarted");
    }

    /// Replace the level wholesale and return to [`RunState::Ready`].
    pub fn load_level(&mut self, level: Level) {
        self.level = level;
        self.dynamics.reset();
        self.comfort.reset();
        self.rules.reset();
        self.previous_distance = 0.0;
        self.ticks = 0;
        self.advice = self
            .advisory
            .advise(self.level.track(), self.level.layout(), 0.0);
        info!(
            level = self.level.name(),
            length = self.level.track().total_length(),
            closed = self.level.track().is_closed(),
            "level loaded"
        );
    }

    /// Immutable copy of everything collaborators may read.
    pub fn snapshot(&self) -> Snapshot {
        let kinematics = self.dynamics.state();
        let comfort = self.comfort.state();
        let run_state = self.rules.state();

        Snapshot {
            kinematics,
            controls: self.dynamics.controls(),
            comfort,
            comfort_ratio: comfort.ratio(),
            penalties: self.comfort.last_breakdown(),
            run_state,
            failure_reason: run_state.failure_reason(),
            status: StatusMessage::project(run_state, kinematics.distance, self.level.layout()),
            hud: HudFlags::project(run_state),
            safe_speed: self.advice.safe_speed,
            curvature_limit: self.advice.curvature_limit,
            terminal_limit: self.advice.terminal_limit,
            tick: self.ticks,
        }
    }

    /// Advice at an arbitrary distance, without touching the simulation.
    ///
    /// Render frames use this with an interpolated distance.
    pub fn advisory_at(&self, distance: f64) -> Advisory {
        self.advisory
            .advise(self.level.track(), self.level.layout(), distance)
    }

    /// World position at `distance` along the current track.
    pub fn position_at(&self, distance: f64) -> DVec3 {
        self.level.track().position_at_distance(distance)
    }

    /// Points ahead of the train for the path preview.
    pub fn preview_points(&self, count: usize, spacing: f64) -> Vec<DVec3> {
        self.level
            .track()
            .preview_points(self.dynamics.state().distance, spacing, count)
    }
}
