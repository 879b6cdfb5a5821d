//! Read-only projections of the run state for the HUD.

use std::fmt;

use railrun_track::TerminalLayout;
use serde::{Deserialize, Serialize};

use crate::state::{FailureReason, RunState};

/// Guidance shown to the driver.
///
/// A pure function of run state, distance and terminal layout; it never feeds
/// back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StatusMessage {
    /// Waiting to depart.
    Ready,
    /// Running, short of the platform.
    Approaching {
        /// Metres to the start of the platform.
        to_station: f64,
    },
    /// Running inside the platform.
    InPlatform {
        /// Metres to the end of the platform.
        to_platform_end: f64,
    },
    /// Running past the end of the platform.
    Overran {
        /// Metres to the bumper.
        to_bumper: f64,
    },
    /// Stopped at the platform.
    Won,
    /// Run failed.
    Failed(FailureReason),
}

impl StatusMessage {
    /// Project the run state onto a message.
    ///
    /// ```
    /// use railrun_rules::{RunState, StatusMessage};
    /// use railrun_track::{TerminalConfig, TerminalLayout};
    ///
    /// let layout = TerminalLayout::from_track_length(1000.0, &TerminalConfig::default());
    /// let status = StatusMessage::project(RunState::Running, 425.0, &layout);
    /// assert_eq!(status.to_string(), "Station in 500 m");
    /// ```
    pub fn project(state: RunState, distance: f64, layout: &TerminalLayout) -> Self {
        match state {
            RunState::Ready => Self::Ready,
            RunState::Won => Self::Won,
            RunState::Failed(reason) => Self::Failed(reason),
            RunState::Running => {
                if distance < layout.station_start_distance {
                    Self::Approaching {
                        to_station: layout.remaining_to_station_start(distance),
                    }
                } else if distance <= layout.station_end_distance {
                    Self::InPlatform {
                        to_platform_end: layout.remaining_to_station_end(distance),
                    }
                } else {
                    Self::Overran {
                        to_bumper: layout.remaining_to_bumper(distance),
                    }
                }
            }
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "Ready to depart"),
            Self::Approaching { to_station } => write!(f, "Station in {to_station:.0} m"),
            Self::InPlatform { to_platform_end } => write!(
                f,
                "In the platform, stop within {to_platform_end:.0} m"
            ),
            Self::Overran { to_bumper } => {
                write!(f, "Overran the platform, bumper in {to_bumper:.0} m")
            }
            Self::Won => write!(f, "Stopped at the platform. Well driven!"),
            Self::Failed(FailureReason::Bumper) => write!(f, "Hit the bumper"),
            Self::Failed(FailureReason::Comfort) => {
                write!(f, "Passengers could not take any more")
            }
        }
    }
}

/// Flags that drive the end-of-run overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HudFlags {
    /// Show the end-of-run overlay.
    pub show_end_overlay: bool,
    /// The run ended in success.
    pub success: bool,
}

impl HudFlags {
    /// Project the run state onto HUD flags.
    pub fn project(state: RunState) -> Self {
        Self {
            show_end_overlay: state.is_terminal(),
            success: state == RunState::Won,
        }
    }
}
