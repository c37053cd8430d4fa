//! Market data provider trait.

use async_trait::async_trait;
use emove_core::{ExpiryDate, OptionChain, Symbol};

use crate::error::FeedError;

/// Trait for market data providers.
///
/// One snapshot per call, no streaming and no retries: a submission makes
/// one spot lookup and one chain lookup, and any failure is surfaced to the
/// caller immediately.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Current underlying price for a symbol.
    ///
    /// Fails when the symbol is unknown upstream or has no recent trade
    /// data.
    async fn spot_price(&self, symbol: &Symbol) -> Result<f64, FeedError>;

    /// Option chain snapshot for a symbol and expiry.
    ///
    /// Fails when no chain exists for that expiry (non-trading-day expiry,
    /// delisted symbol, no options listed).
    async fn option_chain(
        &self,
        symbol: &Symbol,
        expiry: ExpiryDate,
    ) -> Result<OptionChain, FeedError>;
}
