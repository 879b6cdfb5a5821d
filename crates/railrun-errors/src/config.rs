//! Configuration validation errors.
//!
//! These are raised by `validate()` on configuration values and by track
//! construction. A malformed configuration is a level-load problem and never
//! reaches the per-tick simulation path.

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Value outside its permitted range.
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Dotted field path, e.g. `vehicle.max_speed`
        field: String,
        /// The rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// Value must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Dotted field path
        field: String,
        /// The rejected value
        value: f64,
    },

    /// Value is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Dotted field path
        field: String,
        /// The rejected value
        value: f64,
    },

    /// Two related values are in the wrong order.
    #[error("{lower} ({lower_value}) must not exceed {upper} ({upper_value})")]
    Ordering {
        /// Field expected to be the smaller one
        lower: String,
        /// Its value
        lower_value: f64,
        /// Field expected to be the larger one
        upper: String,
        /// Its value
        upper_value: f64,
    },

    /// Track needs more control points.
    #[error("track needs at least {min} control points, got {actual}")]
    TooFewPoints {
        /// Number of points supplied
        actual: usize,
        /// Minimum number of points
        min: usize,
    },

    /// Control point has a NaN or infinite coordinate.
    #[error("control point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point
        index: usize,
    },

    /// A list that must not be empty is empty.
    #[error("{0} must not be empty")]
    Empty(String),
}

impl ConfigError {
    /// Create an out of range error.
    pub fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Create a not-positive error.
    pub fn not_positive(field: impl Into<String>, value: f64) -> Self {
        Self::NotPositive {
            field: field.into(),
            value,
        }
    }

    /// Create a non-finite error.
    pub fn non_finite(field: impl Into<String>, value: f64) -> Self {
        Self::NonFinite {
            field: field.into(),
            value,
        }
    }

    /// Create an ordering error.
    pub fn ordering(
        lower: impl Into<String>,
        lower_value: f64,
        upper: impl Into<String>,
        upper_value: f64,
    ) -> Self {
        Self::Ordering {
            lower: lower.into(),
            lower_value,
            upper: upper.into(),
            upper_value,
        }
    }

    /// Create an empty-list error.
    pub fn empty(field: impl Into<String>) -> Self {
        Self::Empty(field.into())
    }

    /// Field path the error refers to, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::OutOfRange { field, .. }
            | Self::NotPositive { field, .. }
            | Self::NonFinite { field, .. }
            | Self::Empty(field) => Some(field),
            Self::Ordering { lower, .. } => Some(lower),
            Self::TooFewPoints { .. } | Self::NonFinitePoint { .. } => None,
        }
    }
}

/// Require `value` to be finite and strictly positive.
///
/// # Errors
///
/// Returns [`ConfigError::NonFinite`] or [`ConfigError::NotPositive`].
pub fn require_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::not_positive(field, value));
    }
    Ok(())
}

/// Require `value` to be finite and not negative.
///
/// # Errors
///
/// Returns [`ConfigError::NonFinite`] or [`ConfigError::OutOfRange`].
pub fn require_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::out_of_range(field, value, 0.0, f64::INFINITY));
    }
    Ok(())
}

/// Require `value` to be finite.
///
/// # Errors
///
/// Returns [`ConfigError::NonFinite`].
pub fn require_finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::non_finite(field, value));
    }
    Ok(())
}
