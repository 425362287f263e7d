use common::{SummaryDto, TickerDto};

use crate::api_client;

pub async fn get_tickers() -> Result<Vec<TickerDto>, String> {
    log::trace!("Fetching ticker directory");
    let result = api_client::get::<Vec<TickerDto>>("/tickers").await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch tickers: {}", e);
    }

    result
}

pub async fn get_summary(symbol: String) -> Result<SummaryDto, String> {
    log::trace!("Fetching summary for {}", symbol);
    api_client::get::<SummaryDto>(&format!("/tickers/{}/summary", symbol)).await
}

/// URL of the optional per-ticker logo; the `<img>` falls back to a blank
/// placeholder when the asset is missing.
pub fn logo_url(symbol: &str) -> String {
    api_client::absolute_url(&format!("/tickers/{}/logo", symbol))
}
