use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::{debug, instrument};

use crate::handlers::{error_response, require_known_symbol, ApiError};
use crate::schemas::AppState;

/// Serve the optional per-ticker logo asset.
///
/// A missing file is a non-error for the dashboard: the frontend renders a
/// blank placeholder on 404.
#[utoipa::path(
    get,
    path = "/api/v1/tickers/{symbol}/logo",
    tag = "tickers",
    params(
        ("symbol" = String, Path, description = "Exchange symbol, e.g. RELIANCE.NS"),
    ),
    responses(
        (status = 200, description = "Logo image", content_type = "image/png"),
        (status = 404, description = "No logo asset for this symbol", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_logo(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    require_known_symbol(&state.directory, &symbol)?;

    let path = state.logo_dir.join(format!("{symbol}.png"));
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, "image/png")], bytes)),
        Err(_) => {
            debug!(?path, "logo asset missing, client will render placeholder");
            Err(error_response(
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("no logo asset for {symbol}"),
            ))
        }
    }
}
