use common::ForecastResponse;

use crate::api_client;

pub async fn get_forecast(symbol: String, years: u32) -> Result<ForecastResponse, String> {
    log::trace!("Fetching forecast for {} over {} years", symbol, years);

    let result = api_client::get::<ForecastResponse>(&format!(
        "/tickers/{}/forecast?years={}",
        symbol, years
    ))
    .await;

    match &result {
        Ok(forecast) => log::info!(
            "Fetched forecast for {}: {} rows, horizon {} days",
            symbol,
            forecast.points.len(),
            forecast.horizon_days
        ),
        Err(e) => log::error!("Failed to fetch forecast for {}: {}", symbol, e),
    }

    result
}
