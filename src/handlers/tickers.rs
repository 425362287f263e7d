use axum::{extract::State, response::Json};
use common::TickerDto;
use tracing::instrument;

use crate::schemas::{ApiResponse, AppState};

/// List the fixed ticker directory for the stock selector
#[utoipa::path(
    get,
    path = "/api/v1/tickers",
    tag = "tickers",
    responses(
        (status = 200, description = "Ticker directory retrieved successfully", body = ApiResponse<Vec<TickerDto>>)
    )
)]
#[instrument]
pub async fn get_tickers(State(state): State<AppState>) -> Json<ApiResponse<Vec<TickerDto>>> {
    let entries = state.directory.entries();
    Json(ApiResponse {
        data: entries,
        message: "Tickers retrieved successfully".to_string(),
        success: true,
    })
}
