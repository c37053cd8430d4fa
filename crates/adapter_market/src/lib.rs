//! # adapter_market: Market Data Input Layer
//!
//! Adapts external market-data sources to the snapshot types the
//! expected-move kernel consumes:
//! - `MarketDataProvider`: The provider trait (`provider`)
//! - `YahooProvider`: HTTP client over Yahoo Finance's unofficial API (`yahoo`)
//! - `FixedSnapshotProvider`: Configured data for tests and offline demos (`snapshot`)
//! - `FeedError`: Feed failure taxonomy (`error`)
//!
//! The service layer talks to `dyn MarketDataProvider` only, so the
//! calculator can be exercised against fixed synthetic snapshots without a
//! live network dependency.

pub mod error;
pub mod provider;
pub mod snapshot;
pub mod yahoo;

pub use error::FeedError;
pub use provider::MarketDataProvider;
pub use snapshot::FixedSnapshotProvider;
pub use yahoo::YahooProvider;
