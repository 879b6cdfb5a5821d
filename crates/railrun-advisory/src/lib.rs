//! Safe-speed advisory for railrun.
//!
//! Two limits govern how fast the train should go:
//!
//! - Curvature: `gain / sqrt(|k| + epsilon)` at each lookahead distance, so a
//!   sharper bend ahead gives a lower limit and straight track saturates at
//!   the configured maximum
//! - Terminal guidance: `sqrt(2 a d)` where `d` is the distance left to the
//!   end of the platform, the speed from which a constant deceleration `a`
//!   still stops the train in time
//!
//! The advised speed is the more restrictive of the two. Advice is a pure
//! function of the track, the layout and the distance travelled, so it can be
//! recomputed on every tick and every render frame.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod advisory;
pub mod config;
pub mod prelude;
pub mod sample;

pub use advisory::{Advisory, SpeedAdvisory};
pub use config::AdvisoryConfig;
pub use sample::SafeSpeedSample;
