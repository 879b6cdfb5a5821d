//! Tick orchestration for the railrun motion-and-safety simulation.
//!
//! [`Simulation`] owns one instance of every component and advances them in a
//! fixed order each tick:
//!
//! 1. [`LongitudinalDynamics`](railrun_dynamics::LongitudinalDynamics)
//!    integrates the controls
//! 2. [`SpeedAdvisory`](railrun_advisory::SpeedAdvisory) samples the track
//!    ahead of the new position
//! 3. [`ComfortAccumulator`](railrun_comfort::ComfortAccumulator) scores the
//!    ride against the fresh safe speed
//! 4. [`RunStateMachine`](railrun_rules::RunStateMachine) decides whether
//!    the run is won or lost
//!
//! Later stages only ever see the fully updated output of earlier stages from
//! the same tick. [`Session`] pairs a simulation with a
//! [`FixedStepScheduler`](railrun_scheduler::FixedStepScheduler) so a host
//! can drive it from variable-rate frame callbacks, and reads back an
//! immutable [`Snapshot`] after each frame.
//!
//! # Example
//!
//! ```
//! use railrun_dynamics::VehicleControls;
//! use railrun_engine::{Level, LevelDefinition, Session, Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::default();
//! let level = Level::build(&LevelDefinition::default(), &config.terminal)?;
//! let mut session = Session::new(Simulation::new(config, level));
//! session.start();
//!
//! let throttle = VehicleControls::new(1.0, 0.0);
//! let mut t = 0.0;
//! for _ in 0..120 {
//!     t += 1.0 / 60.0;
//!     session.frame(t, throttle);
//! }
//! assert!(session.snapshot().kinematics.speed > 0.0);
//! # Ok::<(), railrun_errors::ConfigError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod file;
pub mod level;
pub mod prelude;
pub mod session;
pub mod simulation;

pub use config::SimulationConfig;
pub use file::LevelFile;
pub use level::{Level, LevelDefinition};
pub use session::{FrameOutput, Session};
pub use simulation::{Simulation, Snapshot};
