//! Prelude for convenient imports.

pub use crate::config::RulesConfig;
pub use crate::machine::{RunInputs, RunStateMachine};
pub use crate::state::{FailureReason, RunState, Transition};
pub use crate::status::{HudFlags, StatusMessage};
