use thiserror::Error;

/// Error types for the forecast pipeline
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Fewer observations than the model can be fitted on
    #[error("insufficient history: need at least {required} points, got {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    /// History dates must be strictly increasing with no duplicates
    #[error("history dates are not strictly increasing at index {0}")]
    NonMonotonicDates(usize),

    /// A flat series carries no signal the model can decompose
    #[error("degenerate history: series is entirely flat")]
    DegenerateHistory,

    /// Horizon must be a positive number of days
    #[error("invalid horizon: {0} days")]
    InvalidHorizon(u32),

    /// Smoothing parameters outside (0, 1)
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Error from Polars DataFrame operations
    #[error("dataframe error: {0}")]
    DataFrame(String),
}

impl From<polars::error::PolarsError> for ForecastError {
    fn from(error: polars::error::PolarsError) -> Self {
        ForecastError::DataFrame(error.to_string())
    }
}

/// Type alias for Result with ForecastError
pub type Result<T> = std::result::Result<T, ForecastError>;
