//! Frame-driven sessions.

use railrun_dynamics::VehicleControls;
use railrun_scheduler::{FixedStepScheduler, FrameReport};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::level::Level;
use crate::simulation::{Simulation, Snapshot};

/// Result of one render frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Simulation ticks run during this frame.
    pub steps: u32,
    /// Fraction of a tick left over, in `[0, 1)`.
    pub alpha: f64,
    /// Whether the frame interval was clamped.
    pub clamped: bool,
    /// Distance for rendering, interpolated between the last two ticks.
    pub render_distance: f64,
    /// State after the frame's ticks.
    pub snapshot: Snapshot,
}

/// A simulation driven by render-frame timestamps.
///
/// # Example
///
/// ```
/// use railrun_dynamics::VehicleControls;
/// use railrun_engine::{Level, LevelDefinition, Session, Simulation, SimulationConfig};
///
/// let config = SimulationConfig::default();
/// let level = Level::build(&LevelDefinition::default(), &config.terminal)?;
/// let mut session = Session::new(Simulation::new(config, level));
/// session.start();
///
/// session.frame(0.0, VehicleControls::RELEASED);
/// // A half-second hitch is clamped to 0.25 s: 15 ticks at 60 Hz.
/// let out = session.frame(0.5, VehicleControls::new(1.0, 0.0));
/// assert!(out.clamped);
/// assert_eq!(out.steps, 15);
/// # Ok::<(), railrun_errors::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    scheduler: FixedStepScheduler,
    simulation: Simulation,
}

impl Session {
    /// Wrap a simulation with a scheduler built from its configuration.
    pub fn new(simulation: Simulation) -> Self {
        let scheduler = FixedStepScheduler::new(simulation.config().scheduler);
        Self {
            scheduler,
            simulation,
        }
    }

    /// The simulation.
    #[inline]
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// The scheduler.
    #[inline]
    pub fn scheduler(&self) -> &FixedStepScheduler {
        &self.scheduler
    }

    /// Depart and begin scheduling ticks.
    pub fn start(&mut self) {
        self.simulation.start();
        self.scheduler.start();
    }

    /// Stop scheduling. Fractional time is discarded.
    pub fn stop(&mut self) {
        self.scheduler.stop();
        info!(tick = self.simulation.snapshot().tick, "session stopped");
    }

    /// Restart the run; stale accumulated time is not replayed.
    pub fn restart(&mut self) {
        self.scheduler.stop();
        self.simulation.restart();
        self.scheduler.start();
    }

    /// Swap in a new level. The session stops until started again.
    pub fn load_level(&mut self, level: Level) {
        self.scheduler.stop();
        self.simulation.load_level(level);
    }

    /// Feed one render frame.
    ///
    /// `controls` take effect from the first tick of this frame.
    pub fn frame(&mut self, timestamp: f64, controls: VehicleControls) -> FrameOutput {
        self.simulation.apply_controls(controls);

        let simulation = &mut self.simulation;
        let report = self.scheduler.frame(timestamp, |h| {
            simulation.tick(h);
        });
        if report.clamped {
            debug!(
                elapsed = report.elapsed,
                steps = report.steps,
                "frame interval clamped"
            );
        }

        self.output(&report)
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.simulation.snapshot()
    }

    fn output(&self, report: &FrameReport) -> FrameOutput {
        let snapshot = self.simulation.snapshot();
        let previous = self.simulation.previous_distance();
        let current = snapshot.kinematics.distance;

        FrameOutput {
            steps: report.steps,
            alpha: report.alpha,
            clamped: report.clamped,
            render_distance: previous + (current - previous) * report.alpha,
            snapshot,
        }
    }
}
