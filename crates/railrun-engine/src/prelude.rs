//! Prelude for convenient imports.
//!
//! Re-exports the engine types together with the component types that appear
//! in their signatures.

pub use crate::config::SimulationConfig;
pub use crate::file::LevelFile;
pub use crate::level::{Level, LevelDefinition};
pub use crate::session::{FrameOutput, Session};
pub use crate::simulation::{Simulation, Snapshot};

pub use railrun_advisory::{Advisory, SafeSpeedSample};
pub use railrun_comfort::{ComfortState, PenaltyBreakdown};
pub use railrun_dynamics::{VehicleControls, VehicleKinematicState};
pub use railrun_rules::{FailureReason, HudFlags, RunState, StatusMessage, Transition};
pub use railrun_track::TerminalLayout;
