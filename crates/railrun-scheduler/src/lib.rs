//! Fixed-step scheduling for the railrun simulation.
//!
//! Rendering callbacks arrive at whatever rate the host manages; the
//! simulation must advance in constant increments to stay deterministic.
//! [`FixedStepScheduler`] accumulates wall time between frames and releases it
//! as whole steps of exactly `h` seconds, leaving the fractional remainder for
//! interpolated rendering.
//!
//! # Guarantees
//!
//! - A single frame never contributes more than `max_frame_seconds` of time,
//!   so a stall cannot trigger a runaway catch-up
//! - Every step callback receives the same `h`
//! - Callbacks run to completion one after another, with no reentrancy
//! - `stop()` discards accumulated time so a later `start()` never replays it
//!
//! # Example
//!
//! ```
//! use railrun_scheduler::{FixedStepScheduler, SchedulerConfig};
//!
//! let mut scheduler = FixedStepScheduler::new(SchedulerConfig::default());
//! scheduler.start();
//!
//! let mut simulated = 0.0;
//! scheduler.frame(0.0, |h| simulated += h);
//! let report = scheduler.frame(0.05, |h| simulated += h);
//!
//! assert_eq!(report.steps, 3);
//! assert!(report.alpha >= 0.0 && report.alpha < 1.0);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod prelude;
pub mod scheduler;

pub use config::SchedulerConfig;
pub use scheduler::{FixedStepScheduler, FrameReport};

/// Default simulation step (60 Hz).
pub const DEFAULT_STEP_SECONDS: f64 = 1.0 / 60.0;

/// Longest wall-clock interval a single frame may contribute.
pub const MAX_FRAME_SECONDS: f64 = 0.25;

/// Slack used when comparing the accumulator against the step, so that
/// frames of exactly `h` seconds always release exactly one step.
pub(crate) const STEP_EPSILON: f64 = 1e-9;
