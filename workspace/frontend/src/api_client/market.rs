use common::PriceHistory;

use crate::api_client;

/// Fetch the full history window the dashboard shows (the backend applies
/// its fixed default range when no dates are passed).
pub async fn get_history(symbol: String) -> Result<PriceHistory, String> {
    log::trace!("Fetching history for {}", symbol);

    let result = api_client::get::<PriceHistory>(&format!("/tickers/{}/history", symbol)).await;

    match &result {
        Ok(history) => log::info!(
            "Fetched {} rows of history for {}",
            history.points.len(),
            symbol
        ),
        Err(e) => log::error!("Failed to fetch history for {}: {}", symbol, e),
    }

    result
}
