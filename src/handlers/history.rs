use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::{Local, NaiveDate};
use common::PriceHistory;
use tracing::instrument;

use crate::config::default_start_date;
use crate::handlers::{map_market_error, require_known_symbol, ApiError};
use crate::schemas::{ApiResponse, AppState, CachedData, HistoryQuery};

/// Resolve the requested window against the dashboard defaults.
pub fn resolve_range(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> (NaiveDate, NaiveDate) {
    let start = start_date.unwrap_or_else(default_start_date);
    let end = end_date.unwrap_or_else(|| Local::now().date_naive());
    (start, end)
}

/// Fetch a symbol's history through the session cache.
///
/// Used by both the history and forecast endpoints so a slider change does
/// not trigger a redundant provider call for data already in this session.
pub async fn load_history(
    state: &AppState,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<PriceHistory, ApiError> {
    let cache_key = format!("history_{symbol}_{start}_{end}");
    if let Some(CachedData::History(history)) = state.cache.get(&cache_key).await {
        return Ok(history);
    }

    let history = state
        .provider
        .fetch_history(symbol, start, end)
        .await
        .map_err(map_market_error)?;

    state
        .cache
        .insert(cache_key, CachedData::History(history.clone()))
        .await;

    Ok(history)
}

/// Get daily OHLC history for a ticker
#[utoipa::path(
    get,
    path = "/api/v1/tickers/{symbol}/history",
    tag = "market",
    params(
        ("symbol" = String, Path, description = "Exchange symbol, e.g. RELIANCE.NS"),
        HistoryQuery,
    ),
    responses(
        (status = 200, description = "History retrieved successfully", body = ApiResponse<PriceHistory>),
        (status = 404, description = "Symbol not in the directory", body = crate::schemas::ErrorResponse),
        (status = 502, description = "Provider data unavailable", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_history(
    Path(symbol): Path<String>,
    Query(query): Query<HistoryQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PriceHistory>>, ApiError> {
    require_known_symbol(&state.directory, &symbol)?;

    let (start, end) = resolve_range(query.start_date, query.end_date);
    let history = load_history(&state, &symbol, start, end).await?;

    Ok(Json(ApiResponse {
        data: history,
        message: "History retrieved successfully".to_string(),
        success: true,
    }))
}
