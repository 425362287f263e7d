use anyhow::Result;
use chrono::NaiveDate;
use market::{MarketDataProvider, SyntheticProvider, YahooProvider};
use moka::future::Cache;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::schemas::AppState;

/// Default start of the historical window, matching the dashboard's fixed
/// lookback. The end of the window is always "today".
pub const DEFAULT_START: &str = "2015-01-01";

pub fn default_start_date() -> NaiveDate {
    // The constant is well-formed, so this cannot fail at runtime.
    NaiveDate::parse_from_str(DEFAULT_START, "%Y-%m-%d").unwrap_or_default()
}

/// Initialize application configuration and state
pub fn initialize_app_state() -> Result<AppState> {
    // Load configuration
    dotenvy::dotenv().ok();

    let provider_label =
        std::env::var("STOCKCAST_PROVIDER").unwrap_or_else(|_| "yahoo".to_string());
    let provider: Arc<dyn MarketDataProvider> = match provider_label.as_str() {
        "synthetic" => {
            tracing::info!("Using synthetic market data provider");
            Arc::new(SyntheticProvider::new())
        }
        _ => Arc::new(YahooProvider::new()),
    };

    let ttl_secs = std::env::var("CACHE_TTL_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(300);

    // Session cache for fetch results; staleness across sessions is accepted.
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(ttl_secs))
        .build();

    let logo_dir = std::env::var("STOCKCAST_LOGO_DIR").unwrap_or_else(|_| "logos".to_string());

    Ok(AppState {
        directory: market::TickerDirectory::new(),
        provider,
        provider_label,
        cache,
        logo_dir: PathBuf::from(logo_dir),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_start_parses() {
        assert_eq!(
            default_start_date(),
            NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()
        );
    }
}
