use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use common::{PriceHistory, PricePoint};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::error::{MarketError, Result};
use crate::provider::{validate_range, MarketDataProvider, NO_SUMMARY};

const CHART_BASE: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const SUMMARY_BASE: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";
const REFERER: &str = "https://finance.yahoo.com/";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) stockcast/0.1";

/// Yahoo Finance provider.
///
/// Talks to the unofficial chart and quoteSummary endpoints. Rows with any
/// missing OHLC field are dropped; surviving rows are sorted ascending and
/// de-duplicated by date before they leave this crate.
#[derive(Debug, Clone)]
pub struct YahooProvider {
    client: reqwest::Client,
}

impl Default for YahooProvider {
    fn default() -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl YahooProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn chart_endpoint(symbol: &str, start_date: NaiveDate, end_date: NaiveDate) -> String {
        // Inclusive range: Yahoo treats period2 as exclusive midnight UTC.
        let period1 = start_date.and_hms_opt(0, 0, 0).map(|t| t.and_utc().timestamp());
        let period2 = end_date
            .succ_opt()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|t| t.and_utc().timestamp());
        format!(
            "{}/{}?period1={}&period2={}&interval=1d&events=history",
            CHART_BASE,
            urlencoding::encode(symbol),
            period1.unwrap_or(0),
            period2.unwrap_or(0),
        )
    }

    fn summary_endpoint(symbol: &str) -> String {
        format!(
            "{}/{}?modules=assetProfile",
            SUMMARY_BASE,
            urlencoding::encode(symbol)
        )
    }

    async fn get_text(&self, endpoint: &str) -> Result<String> {
        let response = self
            .client
            .get(endpoint)
            .header("referer", REFERER)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketError::DataUnavailable(format!(
                "provider returned status {status}"
            )));
        }

        Ok(response.text().await?)
    }

    fn parse_chart(symbol: &str, body: &str) -> Result<PriceHistory> {
        let chart_response: YahooChartResponse = serde_json::from_str(body)
            .map_err(|e| MarketError::DataUnavailable(format!("malformed chart payload: {e}")))?;

        if let Some(error) = &chart_response.chart.error {
            return Err(MarketError::DataUnavailable(format!(
                "provider error: {}",
                error.description
            )));
        }

        let result = chart_response
            .chart
            .result
            .as_ref()
            .and_then(|r| r.first())
            .ok_or_else(|| MarketError::DataUnavailable("no chart data in response".to_string()))?;

        let timestamps = result
            .timestamp
            .as_ref()
            .ok_or_else(|| MarketError::DataUnavailable("no timestamps in response".to_string()))?;
        let quote = result
            .indicators
            .quote
            .first()
            .ok_or_else(|| MarketError::DataUnavailable("no quote block in response".to_string()))?;

        let mut points = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let date = match DateTime::from_timestamp(ts, 0) {
                Some(dt) => dt.date_naive(),
                None => continue,
            };

            // Keep the row only when every OHLC field is present.
            if let (Some(Some(open)), Some(Some(high)), Some(Some(low)), Some(Some(close))) = (
                quote.open.get(i),
                quote.high.get(i),
                quote.low.get(i),
                quote.close.get(i),
            ) {
                points.push(PricePoint {
                    date,
                    open: *open,
                    high: *high,
                    low: *low,
                    close: *close,
                });
            }
        }

        if points.is_empty() {
            return Err(MarketError::DataUnavailable(format!(
                "empty result set for {symbol}"
            )));
        }

        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);

        Ok(PriceHistory::new(symbol, points))
    }

    fn parse_summary(body: &str) -> Option<String> {
        let response: YahooQuoteSummaryResponse = serde_json::from_str(body).ok()?;
        response
            .quote_summary
            .result?
            .into_iter()
            .next()?
            .asset_profile?
            .long_business_summary
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    #[instrument(skip(self))]
    async fn fetch_history(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PriceHistory> {
        validate_range(start_date, end_date)?;

        let endpoint = Self::chart_endpoint(symbol, start_date, end_date);
        debug!(%symbol, %start_date, %end_date, "fetching daily history");
        let body = self.get_text(&endpoint).await?;

        let history = Self::parse_chart(symbol, &body)?;
        debug!(%symbol, rows = history.len(), "history fetched");
        Ok(history)
    }

    #[instrument(skip(self))]
    async fn fetch_summary(&self, symbol: &str) -> String {
        let endpoint = Self::summary_endpoint(symbol);
        match self.get_text(&endpoint).await {
            Ok(body) => Self::parse_summary(&body).unwrap_or_else(|| NO_SUMMARY.to_string()),
            Err(error) => {
                warn!(%symbol, %error, "summary fetch failed, using placeholder");
                NO_SUMMARY.to_string()
            }
        }
    }
}

// ============================================================================
// Yahoo chart / quoteSummary response structures
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartData {
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<YahooApiError>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooApiError {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartIndicators {
    quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartQuote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: YahooQuoteSummaryData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteSummaryData {
    result: Option<Vec<YahooQuoteSummaryResult>>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteSummaryResult {
    #[serde(rename = "assetProfile")]
    asset_profile: Option<YahooAssetProfile>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooAssetProfile {
    #[serde(rename = "longBusinessSummary")]
    long_business_summary: Option<String>,
}
