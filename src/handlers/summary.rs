use axum::{
    extract::{Path, State},
    response::Json,
};
use common::SummaryDto;
use tracing::instrument;

use crate::handlers::{require_known_symbol, ApiError};
use crate::schemas::{ApiResponse, AppState, CachedData};

/// Get the business summary for a ticker.
///
/// Degrades to the provider's placeholder text instead of failing, so the
/// sidebar never breaks the interaction.
#[utoipa::path(
    get,
    path = "/api/v1/tickers/{symbol}/summary",
    tag = "tickers",
    params(
        ("symbol" = String, Path, description = "Exchange symbol, e.g. RELIANCE.NS"),
    ),
    responses(
        (status = 200, description = "Summary retrieved successfully", body = ApiResponse<SummaryDto>),
        (status = 404, description = "Symbol not in the directory", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_summary(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SummaryDto>>, ApiError> {
    require_known_symbol(&state.directory, &symbol)?;

    let cache_key = format!("summary_{symbol}");
    if let Some(CachedData::Summary(summary)) = state.cache.get(&cache_key).await {
        return Ok(Json(ApiResponse {
            data: SummaryDto {
                symbol,
                summary,
            },
            message: "Summary retrieved from cache".to_string(),
            success: true,
        }));
    }

    let summary = state.provider.fetch_summary(&symbol).await;
    state
        .cache
        .insert(cache_key, CachedData::Summary(summary.clone()))
        .await;

    Ok(Json(ApiResponse {
        data: SummaryDto { symbol, summary },
        message: "Summary retrieved successfully".to_string(),
        success: true,
    }))
}
