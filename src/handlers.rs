pub mod forecast;
pub mod health;
pub mod history;
pub mod logo;
pub mod summary;
pub mod tickers;

use axum::http::StatusCode;
use axum::response::Json;
use market::MarketError;

use crate::schemas::ErrorResponse;

/// Error half of every handler's return type: a status code plus the
/// user-visible error envelope.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, code: &str, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }),
    )
}

/// Translate the fetcher's error taxonomy into HTTP responses.
pub fn map_market_error(error: MarketError) -> ApiError {
    match error {
        MarketError::TickerNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "NOT_FOUND", error.to_string())
        }
        MarketError::DataUnavailable(_) => error_response(
            StatusCode::BAD_GATEWAY,
            "DATA_UNAVAILABLE",
            error.to_string(),
        ),
        MarketError::InvalidRequest(_) => error_response(
            StatusCode::BAD_REQUEST,
            "INVALID_REQUEST",
            error.to_string(),
        ),
    }
}

/// Reject symbols outside the directory before any provider work happens.
pub fn require_known_symbol(
    directory: &market::TickerDirectory,
    symbol: &str,
) -> Result<(), ApiError> {
    if directory.contains_symbol(symbol) {
        Ok(())
    } else {
        Err(error_response(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("ticker not found: {symbol}"),
        ))
    }
}
