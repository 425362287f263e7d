use chrono::NaiveDate;
use common::{
    DateRange, ForecastComponents, ForecastPoint, ForecastResponse, PriceHistory, PricePoint,
    SummaryDto, TickerDto,
};
use market::{MarketDataProvider, TickerDirectory};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// The fixed index universe
    pub directory: TickerDirectory,
    /// Market data source
    pub provider: Arc<dyn MarketDataProvider>,
    /// Which provider is configured, for the health endpoint
    pub provider_label: String,
    /// Session cache for fetch results, keyed by operation + symbol + range
    pub cache: Cache<String, CachedData>,
    /// Directory holding optional per-ticker logo assets
    pub logo_dir: PathBuf,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    History(PriceHistory),
    Summary(String),
}

/// Query parameters for the history endpoint
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct HistoryQuery {
    /// Start date (YYYY-MM-DD); defaults to the dashboard's fixed lookback
    pub start_date: Option<NaiveDate>,
    /// End date (YYYY-MM-DD); defaults to today
    pub end_date: Option<NaiveDate>,
}

/// Query parameters for the forecast endpoint
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ForecastQuery {
    /// Years of prediction (the dashboard slider, 1-4)
    pub years: u32,
    /// Optional explicit history window start (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// Optional explicit history window end (YYYY-MM-DD)
    pub end_date: Option<NaiveDate>,
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Configured market data provider
    pub provider: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::tickers::get_tickers,
        crate::handlers::summary::get_summary,
        crate::handlers::history::get_history,
        crate::handlers::forecast::get_forecast,
        crate::handlers::logo::get_logo,
    ),
    components(
        schemas(
            ApiResponse<Vec<TickerDto>>,
            ApiResponse<SummaryDto>,
            ApiResponse<PriceHistory>,
            ApiResponse<ForecastResponse>,
            ErrorResponse,
            HealthResponse,
            HistoryQuery,
            ForecastQuery,
            TickerDto,
            SummaryDto,
            PricePoint,
            PriceHistory,
            DateRange,
            ForecastPoint,
            ForecastComponents,
            ForecastResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "tickers", description = "Ticker directory endpoints"),
        (name = "market", description = "Market data endpoints"),
        (name = "forecast", description = "Forecast endpoints"),
    ),
    info(
        title = "Stockcast API",
        description = "Indian stock forecast dashboard - fetches NIFTY 50 price history and serves additive time-series forecasts",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
