#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use async_trait::async_trait;
    use axum::Router;
    use chrono::NaiveDate;
    use common::PriceHistory;
    use market::{MarketDataProvider, SyntheticProvider, TickerDirectory};
    use moka::future::Cache;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Provider wrapper that counts history calls, so tests can assert that
    /// unknown symbols are rejected before any provider work happens.
    #[derive(Debug)]
    pub struct CountingProvider {
        inner: SyntheticProvider,
        pub history_calls: Arc<AtomicUsize>,
    }

    impl CountingProvider {
        pub fn new() -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    inner: SyntheticProvider::new(),
                    history_calls: calls.clone(),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl MarketDataProvider for CountingProvider {
        async fn fetch_history(
            &self,
            symbol: &str,
            start_date: NaiveDate,
            end_date: NaiveDate,
        ) -> market::Result<PriceHistory> {
            self.history_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch_history(symbol, start_date, end_date).await
        }

        async fn fetch_summary(&self, symbol: &str) -> String {
            self.inner.fetch_summary(symbol).await
        }
    }

    /// Create AppState for testing, backed by the synthetic provider and an
    /// empty logo directory.
    pub fn setup_test_app_state_with(provider: Arc<dyn MarketDataProvider>) -> AppState {
        AppState {
            directory: TickerDirectory::new(),
            provider,
            provider_label: "synthetic".to_string(),
            cache: Cache::new(100),
            logo_dir: PathBuf::from("logos-that-do-not-exist"),
        }
    }

    pub fn setup_test_app_state() -> AppState {
        setup_test_app_state_with(Arc::new(SyntheticProvider::new()))
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        let _ = init_test_tracing();
        create_router(setup_test_app_state())
    }

    /// App plus the call counter of its provider
    pub fn setup_counting_app() -> (Router, Arc<AtomicUsize>) {
        let _ = init_test_tracing();
        let (provider, calls) = CountingProvider::new();
        let app = create_router(setup_test_app_state_with(Arc::new(provider)));
        (app, calls)
    }
}
