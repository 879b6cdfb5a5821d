//! Prelude for convenient imports.

pub use crate::advisory::{Advisory, SpeedAdvisory};
pub use crate::config::AdvisoryConfig;
pub use crate::sample::SafeSpeedSample;
