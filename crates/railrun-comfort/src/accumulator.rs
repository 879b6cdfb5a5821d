//! Comfort accumulation.

use serde::{Deserialize, Serialize};

use crate::config::ComfortConfig;

/// Comfort value and its ceiling, as handed to the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortState {
    /// Current comfort in `[0, max]`.
    pub comfort: f64,
    /// Ceiling.
    pub max: f64,
}

impl ComfortState {
    /// Comfort as a fraction of the ceiling, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.max > 0.0 {
            (self.comfort / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Whether comfort has run out.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.comfort <= 0.0
    }
}

/// Per-second rates applied by the last update.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PenaltyBreakdown {
    /// Overspeed penalty rate.
    pub overspeed: f64,
    /// Hard-braking penalty rate.
    pub hard_brake: f64,
    /// Jerk penalty rate.
    pub jerk: f64,
    /// Regeneration rate; non-zero only when every penalty is zero.
    pub regenerated: f64,
}

impl PenaltyBreakdown {
    /// Sum of the three penalty rates.
    #[inline]
    pub fn total_penalty(&self) -> f64 {
        self.overspeed + self.hard_brake + self.jerk
    }

    /// Whether any penalty applied.
    #[inline]
    pub fn penalized(&self) -> bool {
        self.total_penalty() > 0.0
    }
}

/// Decaying and regenerating comfort scalar.
///
/// # Example
///
/// ```
/// use railrun_comfort::{ComfortAccumulator, ComfortConfig};
///
/// let mut comfort = ComfortAccumulator::new(ComfortConfig::default());
///
/// // 5 m/s over the limit for one second: 5 * 4 = 20 points.
/// for _ in 0..60 {
///     comfort.update(25.0, 20.0, 0.0, 0.0, 1.0 / 60.0);
/// }
/// assert!((comfort.comfort() - 80.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct ComfortAccumulator {
    config: ComfortConfig,
    comfort: f64,
    last: PenaltyBreakdown,
}

impl ComfortAccumulator {
    /// Create an accumulator at full comfort.
    pub fn new(config: ComfortConfig) -> Self {
        let max = config.max_comfort.max(0.0);
        Self {
            config: ComfortConfig {
                max_comfort: max,
                ..config
            },
            comfort: max,
            last: PenaltyBreakdown::default(),
        }
    }

    /// Penalty and regeneration rates for one set of inputs.
    ///
    /// Pure; does not touch the accumulated comfort.
    pub fn rates(
        &self,
        speed: f64,
        safe_speed: f64,
        acceleration: f64,
        jerk: f64,
    ) -> PenaltyBreakdown {
        let c = &self.config;
        let overspeed = finite_or_zero((speed - safe_speed).max(0.0) * c.overspeed_rate);
        let hard_brake =
            finite_or_zero((c.hard_brake_threshold - acceleration).max(0.0) * c.hard_brake_rate);
        let jerk = finite_or_zero((jerk.abs() - c.jerk_threshold).max(0.0) * c.jerk_rate);

        let mut breakdown = PenaltyBreakdown {
            overspeed,
            hard_brake,
            jerk,
            regenerated: 0.0,
        };
        if !breakdown.penalized() {
            breakdown.regenerated = c.regen_rate.max(0.0);
        }
        breakdown
    }

    /// Apply one tick and return the new comfort.
    pub fn update(
        &mut self,
        speed: f64,
        safe_speed: f64,
        acceleration: f64,
        jerk: f64,
        dt: f64,
    ) -> f64 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let breakdown = self.rates(speed, safe_speed, acceleration, jerk);
        let delta = (breakdown.regenerated - breakdown.total_penalty()) * dt;
        self.comfort = (self.comfort + delta).clamp(0.0, self.config.max_comfort);
        self.last = breakdown;
        self.comfort
    }

    /// Current comfort.
    #[inline]
    pub fn comfort(&self) -> f64 {
        self.comfort
    }

    /// Comfort and ceiling.
    #[inline]
    pub fn state(&self) -> ComfortState {
        ComfortState {
            comfort: self.comfort,
            max: self.config.max_comfort,
        }
    }

    /// Comfort as a fraction of the ceiling.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.state().ratio()
    }

    /// Rates applied by the most recent [`update`](Self::update).
    #[inline]
    pub fn last_breakdown(&self) -> PenaltyBreakdown {
        self.last
    }

    /// Configuration in use.
    #[inline]
    pub fn config(&self) -> &ComfortConfig {
        &self.config
    }

    /// Restore full comfort.
    pub fn reset(&mut self) {
        self.comfort = self.config.max_comfort;
        self.last = PenaltyBreakdown::default();
    }
}

impl Default for ComfortAccumulator {
    fn default() -> Self {
        Self::new(ComfortConfig::default())
    }
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
