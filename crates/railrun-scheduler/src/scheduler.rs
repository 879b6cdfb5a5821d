//! Fixed-step scheduler for the simulation tick.
//!
//! The scheduler owns no clock. The host passes the timestamp of each render
//! frame (seconds on any monotonic timeline) and the scheduler turns the time
//! elapsed since the previous frame into zero or more fixed steps.

use crate::STEP_EPSILON;
use crate::config::SchedulerConfig;

/// Outcome of a single [`FixedStepScheduler::frame`] call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    /// Number of simulation steps released by this frame.
    pub steps: u32,
    /// Fraction of a step left in the accumulator, in `[0, 1)`.
    pub alpha: f64,
    /// Wall time credited to the accumulator after clamping.
    pub elapsed: f64,
    /// Whether the raw frame interval exceeded the maximum and was clamped.
    pub clamped: bool,
}

impl FrameReport {
    /// Report for a frame that advanced nothing.
    fn idle(alpha: f64) -> Self {
        Self {
            alpha,
            ..Self::default()
        }
    }
}

/// Accumulator-based fixed-step scheduler.
///
/// # Determinism
///
/// - Every step callback receives exactly the configured step
/// - A frame contributes at most `max_frame_seconds`, so one frame releases at
///   most `ceil(max_frame / step)` steps
/// - Backwards or non-finite timestamps contribute no time
///
/// # Example
///
/// ```
/// use railrun_scheduler::{FixedStepScheduler, SchedulerConfig};
///
/// let mut scheduler = FixedStepScheduler::new(SchedulerConfig::with_rate_hz(50.0));
/// scheduler.start();
/// scheduler.frame(10.0, |_| {});
///
/// // A two second stall is clamped to 0.25 s, i.e. 12 steps at 50 Hz.
/// let report = scheduler.frame(12.0, |_| {});
/// assert!(report.clamped);
/// assert_eq!(report.steps, 12);
/// ```
#[derive(Debug, Clone)]
pub struct FixedStepScheduler {
    /// Fixed step in seconds
    step: f64,

    /// Per-frame clamp in seconds
    max_frame: f64,

    /// Unconsumed wall time in seconds
    accumulator: f64,

    /// Timestamp of the previous frame, `None` until the first frame after `start`
    last_timestamp: Option<f64>,

    /// Whether frames are being turned into steps
    running: bool,

    /// Steps released since construction
    total_steps: u64,
}

impl FixedStepScheduler {
    /// Create a stopped scheduler.
    ///
    /// The configuration is expected to have passed
    /// [`SchedulerConfig::validate`]; degenerate values are still guarded so
    /// the scheduler cannot spin.
    pub fn new(config: SchedulerConfig) -> Self {
        let step = if config.step_seconds.is_finite() && config.step_seconds > 0.0 {
            config.step_seconds
        } else {
            crate::DEFAULT_STEP_SECONDS
        };
        let max_frame = if config.max_frame_seconds.is_finite() {
            config.max_frame_seconds.max(step)
        } else {
            crate::MAX_FRAME_SECONDS.max(step)
        };

        Self {
            step,
            max_frame,
            accumulator: 0.0,
            last_timestamp: None,
            running: false,
            total_steps: 0,
        }
    }

    /// Begin turning frames into steps.
    ///
    /// The first frame after `start` only records its timestamp.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_timestamp = None;
        self.accumulator = 0.0;
    }

    /// Cancel pending scheduling and discard accumulated time.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_timestamp = None;
        self.accumulator = 0.0;
    }

    /// Advance by one render frame.
    ///
    /// Invokes `on_step` once per whole step contained in the (clamped) time
    /// since the previous frame. The callback always receives the fixed step.
    pub fn frame<F>(&mut self, timestamp: f64, mut on_step: F) -> FrameReport
    where
        F: FnMut(f64),
    {
        if !self.running || !timestamp.is_finite() {
            return FrameReport::idle(self.alpha());
        }

        let Some(previous) = self.last_timestamp.replace(timestamp) else {
            return FrameReport::idle(self.alpha());
        };

        let raw = timestamp - previous;
        let clamped = raw > self.max_frame;
        let elapsed = raw.clamp(0.0, self.max_frame);
        self.accumulator += elapsed;

        let mut steps: u32 = 0;
        while self.accumulator + STEP_EPSILON >= self.step {
            on_step(self.step);
            self.accumulator = (self.accumulator - self.step).max(0.0);
            steps = steps.saturating_add(1);
        }
        self.total_steps = self.total_steps.saturating_add(u64::from(steps));

        FrameReport {
            steps,
            alpha: self.alpha(),
            elapsed,
            clamped,
        }
    }

    /// Fraction of a step waiting in the accumulator, in `[0, 1)`.
    #[inline]
    pub fn alpha(&self) -> f64 {
        (self.accumulator / self.step).clamp(0.0, 1.0)
    }

    /// Unconsumed wall time in seconds.
    #[inline]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// The fixed step `h` in seconds.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Per-frame clamp in seconds.
    #[inline]
    pub fn max_frame(&self) -> f64 {
        self.max_frame
    }

    /// Whether the scheduler is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Steps released since construction.
    #[inline]
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Simulated time released since construction, in seconds.
    #[inline]
    pub fn simulated_time(&self) -> f64 {
        self.total_steps as f64 * self.step
    }
}

impl Default for FixedStepScheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}
