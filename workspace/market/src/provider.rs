use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use common::{PriceHistory, PricePoint};
use tracing::instrument;

use crate::error::{MarketError, Result};

/// Placeholder returned whenever the provider has no business summary.
pub const NO_SUMMARY: &str = "No summary available.";

/// A source of daily price history and company summaries.
///
/// Implementations must return histories sorted strictly ascending by date
/// with no duplicate dates, and must fold every provider-side failure into
/// `MarketError::DataUnavailable`.
#[async_trait]
pub trait MarketDataProvider: Send + Sync + std::fmt::Debug {
    /// Fetch daily OHLC rows for `symbol` over the inclusive date range.
    async fn fetch_history(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PriceHistory>;

    /// Fetch the free-text business summary for `symbol`.
    ///
    /// Never fails the interaction: any error degrades to [`NO_SUMMARY`].
    async fn fetch_summary(&self, symbol: &str) -> String;
}

pub(crate) fn validate_range(start_date: NaiveDate, end_date: NaiveDate) -> Result<()> {
    if start_date > end_date {
        return Err(MarketError::InvalidRequest(format!(
            "start date {start_date} is after end date {end_date}"
        )));
    }
    Ok(())
}

/// Deterministic offline provider used by tests and as a no-network demo
/// backend. Prices are a gentle trend plus a weekly wave seeded from the
/// symbol, so repeated fetches of the same range are identical.
#[derive(Debug, Clone, Default)]
pub struct SyntheticProvider;

impl SyntheticProvider {
    pub fn new() -> Self {
        Self
    }

    fn seed(symbol: &str) -> f64 {
        symbol.bytes().map(|b| b as u64).sum::<u64>() as f64
    }
}

#[async_trait]
impl MarketDataProvider for SyntheticProvider {
    #[instrument(skip(self))]
    async fn fetch_history(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PriceHistory> {
        validate_range(start_date, end_date)?;

        let base = 100.0 + Self::seed(symbol) % 900.0;
        let mut points = Vec::new();
        let mut date = start_date;
        let mut index = 0u32;

        while date <= end_date {
            // Trading calendar: weekdays only, like the real provider.
            if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                let drift = index as f64 * 0.25;
                let wave = (index as f64 * std::f64::consts::TAU / 5.0).sin() * 2.0;
                let close = base + drift + wave;
                points.push(PricePoint {
                    date,
                    open: close - 0.5,
                    high: close + 1.0,
                    low: close - 1.5,
                    close,
                });
                index += 1;
            }
            date += Duration::days(1);
        }

        if points.is_empty() {
            return Err(MarketError::DataUnavailable(format!(
                "no trading days between {start_date} and {end_date}"
            )));
        }

        Ok(PriceHistory::new(symbol, points))
    }

    async fn fetch_summary(&self, symbol: &str) -> String {
        format!("{symbol} is a synthetic instrument generated for offline use.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn synthetic_history_is_strictly_ascending() {
        let provider = SyntheticProvider::new();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        let history = provider.fetch_history("INFY.NS", start, end).await.unwrap();
        assert!(!history.is_empty());
        for pair in history.points.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[tokio::test]
    async fn synthetic_history_is_deterministic() {
        let provider = SyntheticProvider::new();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        let a = provider.fetch_history("TCS.NS", start, end).await.unwrap();
        let b = provider.fetch_history("TCS.NS", start, end).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn inverted_range_is_rejected() {
        let provider = SyntheticProvider::new();
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let err = provider.fetch_history("TCS.NS", start, end).await.unwrap_err();
        assert!(matches!(err, MarketError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn weekend_only_range_is_unavailable() {
        let provider = SyntheticProvider::new();
        // 2024-01-06/07 is a Saturday/Sunday pair.
        let start = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();

        let err = provider.fetch_history("TCS.NS", start, end).await.unwrap_err();
        assert!(matches!(err, MarketError::DataUnavailable(_)));
    }
}
