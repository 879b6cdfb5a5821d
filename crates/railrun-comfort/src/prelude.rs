//! Prelude for convenient imports.

pub use crate::accumulator::{ComfortAccumulator, ComfortState, PenaltyBreakdown};
pub use crate::config::ComfortConfig;
