//! The run state machine.

use railrun_track::TerminalLayout;
use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::state::{FailureReason, RunState, Transition};

/// Everything the transition rule looks at, read after the rest of the tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunInputs {
    /// Distance travelled, in metres.
    pub distance: f64,
    /// Current speed, in m/s.
    pub speed: f64,
    /// Current comfort.
    pub comfort: f64,
    /// Bumper and platform bounds of the current level.
    pub layout: TerminalLayout,
}

/// Single owner of the run state.
///
/// # Example
///
/// ```
/// use railrun_rules::{FailureReason, RulesConfig, RunInputs, RunState, RunStateMachine};
/// use railrun_track::{TerminalConfig, TerminalLayout};
///
/// let layout = TerminalLayout::from_track_length(1000.0, &TerminalConfig::default());
/// let mut rules = RunStateMachine::new(RulesConfig::default());
/// rules.start();
///
/// let inputs = RunInputs { distance: 996.0, speed: 4.0, comfort: 50.0, layout };
/// rules.step(&inputs);
/// assert_eq!(rules.state(), RunState::Failed(FailureReason::Bumper));
/// ```
#[derive(Debug, Clone)]
pub struct RunStateMachine {
    config: RulesConfig,
    state: RunState,
}

impl RunStateMachine {
    /// Create a machine in [`RunState::Ready`].
    pub fn new(config: RulesConfig) -> Self {
        Self {
            config,
            state: RunState::Ready,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Configuration in use.
    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Depart: Ready to Running. Returns whether the state changed.
    pub fn start(&mut self) -> bool {
        if self.state == RunState::Ready {
            self.state = RunState::Running;
            return true;
        }
        false
    }

    /// Re-enter Running from any state.
    ///
    /// The caller resets distance, speed and comfort alongside.
    pub fn restart(&mut self) {
        self.state = RunState::Running;
    }

    /// Return to Ready, as when a new level is loaded.
    pub fn reset(&mut self) {
        self.state = RunState::Ready;
    }

    /// Evaluate the transition rule without changing anything.
    ///
    /// Only a running machine transitions. In priority order: reaching the
    /// bumper fails the run, stopping inside the platform wins it, and
    /// exhausted comfort fails it.
    pub fn evaluate(&self, inputs: &RunInputs) -> Transition {
        if !self.state.is_running() {
            return Transition::None;
        }

        let layout = &inputs.layout;
        if inputs.distance >= layout.bumper_distance {
            Transition::To(RunState::Failed(FailureReason::Bumper))
        } else if inputs.speed <= self.config.stop_speed_threshold
            && layout.in_station(inputs.distance)
        {
            Transition::To(RunState::Won)
        } else if inputs.comfort <= 0.0 {
            Transition::To(RunState::Failed(FailureReason::Comfort))
        } else {
            Transition::None
        }
    }

    /// Apply a transition produced by [`evaluate`](Self::evaluate).
    ///
    /// Terminal states are left only through [`restart`](Self::restart), so a
    /// transition offered to a finished run is ignored. Returns whether the
    /// state changed.
    pub fn apply(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::To(next) if !self.state.is_terminal() && next != self.state => {
                self.state = next;
                true
            }
            _ => false,
        }
    }

    /// Evaluate and apply in one go.
    pub fn step(&mut self, inputs: &RunInputs) -> Transition {
        let transition = self.evaluate(inputs);
        if self.apply(transition) {
            transition
        } else {
            Transition::None
        }
    }
}

impl Default for RunStateMachine {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}
