/// Convenience result type used across conicgrad.
pub type ConicResult<T> = Result<T, ConicError>;

/// Top-level error taxonomy.
///
/// Every variant is a configuration-time failure: once a [`crate::GradientConfig`] exists,
/// rendering it cannot fail on account of its contents.
#[derive(thiserror::Error, Debug)]
pub enum ConicError {
    /// Fewer than two color stops were supplied.
    #[error("gradient requires at least 2 color stops, got {count}")]
    InvalidStopCount {
        /// Number of stops actually supplied.
        count: usize,
    },

    /// A color channel of a stop lies outside `[0, 1]`.
    #[error("color stop {stop} has out of range component: {value}")]
    ChannelOutOfRange {
        /// Index of the offending stop.
        stop: usize,
        /// The offending channel value.
        value: f64,
    },

    /// Some stops carry explicit positions while others do not.
    #[error("colors must either all have positions, or none have positions")]
    MixedPositionSpecification,

    /// The first stop is not at position 0 or the last is not at position 1.
    #[error("first stop must be at position 0 and last at position 1 (got {first} and {last})")]
    BoundaryPositionMismatch {
        /// Position of the first stop.
        first: f64,
        /// Position of the last stop.
        last: f64,
    },

    /// Stop positions decrease somewhere in the list.
    #[error("color stops are out of order at stop {index}")]
    UnorderedStops {
        /// Index of the first stop whose position is lower than its predecessor's.
        index: usize,
    },

    /// A color literal (hex string or channel array) could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when deserializing gradient definitions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConicError {
    /// Build a [`ConicError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ConicError::InvalidColor`] value.
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    /// Build a [`ConicError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
