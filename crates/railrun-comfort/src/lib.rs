//! Passenger comfort for railrun.
//!
//! Comfort is a scalar in `[0, max]`. Each tick it drops by the weighted sum
//! of three penalties (running above the safe speed, braking harder than a
//! threshold, jerk above a threshold) or, when none of them applies, recovers
//! at a fixed rate. The two never happen in the same tick.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod accumulator;
pub mod config;
pub mod prelude;

pub use accumulator::{ComfortAccumulator, ComfortState, PenaltyBreakdown};
pub use config::ComfortConfig;
