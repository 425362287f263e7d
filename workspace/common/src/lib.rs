//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' request/response payloads
//! so the frontend can deserialize API responses without duplicating shapes.

mod forecast;
mod history;

pub use forecast::{ForecastComponents, ForecastPoint, ForecastResponse};
pub use history::{DateRange, PriceHistory, PricePoint};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
/// Note: The backend has its own definition in stockcast/src/schemas.rs with
/// the same field names. We mirror it here for the frontend to reuse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

// ===================== Tickers =====================

/// One entry of the ticker directory (mirrors backend TickerResponse).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TickerDto {
    /// Human-readable company name shown in the selector
    pub display_name: String,
    /// Exchange symbol, e.g. "RELIANCE.NS"
    pub symbol: String,
}

/// Business-summary payload for a single ticker.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SummaryDto {
    pub symbol: String,
    /// Free-text blurb from the provider, or the fixed placeholder
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_response_round_trips() {
        let resp = ApiResponse {
            data: TickerDto {
                display_name: "Infosys".to_string(),
                symbol: "INFY.NS".to_string(),
            },
            message: "ok".to_string(),
            success: true,
        };

        let json = serde_json::to_string(&resp).unwrap();
        let back: ApiResponse<TickerDto> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.data.symbol, "INFY.NS");
        assert!(back.success);
    }
}
