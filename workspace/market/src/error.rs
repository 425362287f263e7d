use thiserror::Error;

/// Error types for the market data module
#[derive(Error, Debug)]
pub enum MarketError {
    /// The display name or symbol is not in the ticker directory
    #[error("ticker not found: {0}")]
    TickerNotFound(String),

    /// Any provider-side failure: transport, non-success status, malformed
    /// payload, unknown symbol upstream, or an empty result set. Callers see
    /// one variant regardless of which provider detail failed.
    #[error("market data unavailable: {0}")]
    DataUnavailable(String),

    /// The request itself is malformed (e.g. inverted date range)
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for MarketError {
    fn from(error: reqwest::Error) -> Self {
        MarketError::DataUnavailable(format!("transport error: {error}"))
    }
}

/// Type alias for Result with MarketError
pub type Result<T> = std::result::Result<T, MarketError>;
