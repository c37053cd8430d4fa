//! Fixed-snapshot market data provider.
//!
//! Returns a configured spot and chain for any symbol and expiry. Used by
//! service tests and as the offline `synthetic` data source, so the whole
//! stack can run without touching the network.

use async_trait::async_trait;

use emove_core::{ExpiryDate, OptionChain, Quote, Symbol};

use crate::error::FeedError;
use crate::provider::MarketDataProvider;

/// Provider that serves one configured snapshot.
#[derive(Debug, Clone)]
pub struct FixedSnapshotProvider {
    spot: f64,
    chain: OptionChain,
}

impl FixedSnapshotProvider {
    /// Creates a provider serving the given spot and chain.
    pub fn new(spot: f64, chain: OptionChain) -> Self {
        Self { spot, chain }
    }

    /// A plausible pre-earnings snapshot: spot 100.00 with a 5-point
    /// strike ladder on both sides.
    pub fn earnings_fixture() -> Self {
        Self::new(
            100.0,
            OptionChain::new(
                vec![
                    Quote::new(90.0, 10.20),
                    Quote::new(95.0, 5.40),
                    Quote::new(100.0, 3.20),
                    Quote::new(105.0, 1.10),
                    Quote::new(110.0, 0.45),
                ],
                vec![
                    Quote::new(90.0, 0.40),
                    Quote::new(95.0, 1.00),
                    Quote::new(100.0, 2.80),
                    Quote::new(105.0, 4.70),
                    Quote::new(110.0, 9.80),
                ],
            ),
        )
    }
}

#[async_trait]
impl MarketDataProvider for FixedSnapshotProvider {
    async fn spot_price(&self, symbol: &Symbol) -> Result<f64, FeedError> {
        tracing::debug!(%symbol, spot = self.spot, "Serving fixed spot price");
        Ok(self.spot)
    }

    async fn option_chain(
        &self,
        symbol: &Symbol,
        expiry: ExpiryDate,
    ) -> Result<OptionChain, FeedError> {
        tracing::debug!(%symbol, %expiry, "Serving fixed option chain");
        Ok(self.chain.clone())
    }
}
