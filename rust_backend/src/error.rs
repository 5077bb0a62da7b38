//! Error types for longitude normalization.

/// Result type for longitude operations
pub type LonResult<T> = Result<T, LonError>;

/// Error type for longitude operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LonError {
    /// The data holds values below 0 and above 180 at the same time, so the
    /// current convention cannot be inferred.
    #[error(
        "lon has both data that is larger than 180 and smaller than 0 (min = {min}, max = {max}); cannot infer the transformation"
    )]
    AmbiguousRange { min: f64, max: f64 },

    /// Two longitudes share the same value after wrapping.
    #[error("there are equal longitude coordinates when wrapped (repeated value: {value})")]
    DuplicateCoordinates { value: f64 },

    #[error("shape mismatch: shape holds {expected} elements but {actual} values were given")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("invalid wrap mode: {0} (expected true, false, 180 or 360)")]
    InvalidMode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LonError {
    /// Whether the error was raised by the normalization checks themselves,
    /// as opposed to malformed arguments or configuration.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            LonError::AmbiguousRange { .. } | LonError::DuplicateCoordinates { .. }
        )
    }
}
