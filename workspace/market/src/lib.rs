pub mod directory;
pub mod error;
pub mod provider;
pub mod yahoo;

pub use directory::TickerDirectory;
pub use error::{MarketError, Result};
pub use provider::{MarketDataProvider, SyntheticProvider, NO_SUMMARY};
pub use yahoo::YahooProvider;
