use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use common::ForecastResponse;
use compute::{default_forecaster, horizon_days};
use tracing::instrument;

use crate::handlers::history::{load_history, resolve_range};
use crate::handlers::{error_response, require_known_symbol, ApiError};
use crate::helpers::converters::forecast_frame_to_response;
use crate::schemas::{ApiResponse, AppState, ForecastQuery};

/// Bounds of the dashboard's prediction slider.
const MIN_YEARS: u32 = 1;
const MAX_YEARS: u32 = 4;

/// Fit the additive model on the ticker's history and return the forecast
#[utoipa::path(
    get,
    path = "/api/v1/tickers/{symbol}/forecast",
    tag = "forecast",
    params(
        ("symbol" = String, Path, description = "Exchange symbol, e.g. RELIANCE.NS"),
        ForecastQuery,
    ),
    responses(
        (status = 200, description = "Forecast computed successfully", body = ApiResponse<ForecastResponse>),
        (status = 404, description = "Symbol not in the directory", body = crate::schemas::ErrorResponse),
        (status = 422, description = "History cannot be forecast", body = crate::schemas::ErrorResponse),
        (status = 502, description = "Provider data unavailable", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast(
    Path(symbol): Path<String>,
    Query(query): Query<ForecastQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ForecastResponse>>, ApiError> {
    require_known_symbol(&state.directory, &symbol)?;

    if !(MIN_YEARS..=MAX_YEARS).contains(&query.years) {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "INVALID_REQUEST",
            format!(
                "years must be between {MIN_YEARS} and {MAX_YEARS}, got {}",
                query.years
            ),
        ));
    }

    let (start, end) = resolve_range(query.start_date, query.end_date);
    let history = load_history(&state, &symbol, start, end).await?;

    let horizon = horizon_days(query.years);
    // Single fit attempt; a failure is reported and the user re-triggers.
    let fit = default_forecaster()
        .fit_and_forecast(&history.close_series(), horizon)
        .map_err(|error| {
            error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "FORECAST_UNAVAILABLE",
                error.to_string(),
            )
        })?;

    let response = forecast_frame_to_response(&symbol, horizon, fit).map_err(|error| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            error,
        )
    })?;

    Ok(Json(ApiResponse {
        data: response,
        message: "Forecast computed successfully".to_string(),
        success: true,
    }))
}
