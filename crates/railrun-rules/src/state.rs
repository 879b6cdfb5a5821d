//! Run states and transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureReason {
    /// The train reached the bumper.
    Bumper,
    /// Passenger comfort was exhausted.
    Comfort,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bumper => write!(f, "bumper"),
            Self::Comfort => write!(f, "comfort"),
        }
    }
}

/// State of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RunState {
    /// Waiting for the driver to depart.
    #[default]
    Ready,
    /// Driving.
    Running,
    /// Stopped inside the platform.
    Won,
    /// Run over.
    Failed(FailureReason),
}

impl RunState {
    /// Whether the run has ended.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Failed(_))
    }

    /// Whether the simulation should advance.
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Failure reason, if the run failed.
    #[inline]
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            Self::Failed(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::Running => write!(f, "running"),
            Self::Won => write!(f, "won"),
            Self::Failed(reason) => write!(f, "failed ({reason})"),
        }
    }
}

/// Outcome of evaluating the transition rule.
///
/// Returned by value and applied explicitly by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Transition {
    /// Stay in the current state.
    #[default]
    None,
    /// Move to the given state.
    To(RunState),
}

impl Transition {
    /// Target state, if any.
    #[inline]
    pub fn target(&self) -> Option<RunState> {
        match self {
            Self::None => None,
            Self::To(state) => Some(*state),
        }
    }
}
