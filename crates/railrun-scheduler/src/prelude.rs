//! Prelude module for common scheduler types.

pub use crate::config::SchedulerConfig;
pub use crate::scheduler::{FixedStepScheduler, FrameReport};
pub use crate::{DEFAULT_STEP_SECONDS, MAX_FRAME_SECONDS};
