//! Run rules for railrun.
//!
//! A run starts in [`RunState::Ready`], enters [`RunState::Running`] when the
//! driver departs and ends in exactly one terminal state:
//!
//! - [`RunState::Won`]: stopped inside the platform
//! - [`RunState::Failed`] with [`FailureReason::Bumper`]: reached the bumper
//! - [`RunState::Failed`] with [`FailureReason::Comfort`]: comfort ran out
//!
//! [`RunStateMachine`] is the single owner of the state. Transitions are
//! computed as a [`Transition`] value and applied explicitly, and the only way
//! out of a terminal state is [`RunStateMachine::restart`]. Status text and HUD
//! flags are read-only projections of the state.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod machine;
pub mod prelude;
pub mod state;
pub mod status;

pub use config::RulesConfig;
pub use machine::{RunInputs, RunStateMachine};
pub use state::{FailureReason, RunState, Transition};
pub use status::{HudFlags, StatusMessage};
