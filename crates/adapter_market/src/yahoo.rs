//! Yahoo Finance market data provider.
//!
//! Fetches spot prices and option chains from Yahoo Finance's unofficial
//! v7 API. Data is delayed ~15 minutes and intended for personal use.
//!
//! Endpoints:
//! - `GET {base}/quote?symbols={symbol}` for the spot price
//! - `GET {base}/options/{symbol}?date={unix_ts}` for the chain, keyed by
//!   the expiry date at midnight UTC

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use emove_core::{ExpiryDate, OptionChain, Quote, Symbol};

use crate::error::FeedError;
use crate::provider::MarketDataProvider;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v7/finance";

// Yahoo rejects requests without a browser-like user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Yahoo Finance API client.
pub struct YahooProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooProvider {
    /// Creates a client against the public Yahoo Finance endpoint.
    pub fn new(timeout: Duration) -> Result<Self, FeedError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    /// Creates a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn spot_price(&self, symbol: &Symbol) -> Result<f64, FeedError> {
        let url = format!("{}/quote?symbols={}", self.base_url, symbol);

        tracing::debug!(%symbol, "Fetching spot price");
        let response: QuoteResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| FeedError::Http(e.to_string()))?
            .json()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))?;

        let row = response
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| FeedError::UnknownSymbol {
                symbol: symbol.to_string(),
            })?;

        row.regular_market_price.ok_or(FeedError::MissingField {
            field: "regularMarketPrice",
        })
    }

    async fn option_chain(
        &self,
        symbol: &Symbol,
        expiry: ExpiryDate,
    ) -> Result<OptionChain, FeedError> {
        let expiry_ts = expiry
            .into_inner()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always a valid time")
            .and_utc()
            .timestamp();
        let url = format!("{}/options/{}?date={}", self.base_url, symbol, expiry_ts);

        tracing::debug!(%symbol, %expiry, "Fetching option chain");
        let response: OptionsResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| FeedError::Http(e.to_string()))?
            .json()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))?;

        let chain_row = response
            .option_chain
            .result
            .into_iter()
            .next()
            .ok_or_else(|| FeedError::UnknownSymbol {
                symbol: symbol.to_string(),
            })?;

        let ladder = chain_row.options.into_iter().next().ok_or_else(|| {
            FeedError::NoChainForExpiry {
                symbol: symbol.to_string(),
                expiry: expiry.to_string(),
            }
        })?;

        let chain = OptionChain::new(
            convert_contracts(ladder.calls),
            convert_contracts(ladder.puts),
        );

        if chain.calls.is_empty() && chain.puts.is_empty() {
            return Err(FeedError::NoChainForExpiry {
                symbol: symbol.to_string(),
                expiry: expiry.to_string(),
            });
        }

        Ok(chain)
    }
}

/// Contracts without a last trade carry no usable premium and are dropped.
fn convert_contracts(contracts: Vec<YahooContract>) -> Vec<Quote> {
    contracts
        .into_iter()
        .filter_map(|c| c.last_price.map(|price| Quote::new(c.strike, price)))
        .collect()
}

// --- Yahoo wire formats ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteResponse {
    quote_response: QuoteResult,
}

#[derive(Debug, Deserialize)]
struct QuoteResult {
    result: Vec<QuoteRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteRow {
    regular_market_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptionsResponse {
    option_chain: OptionChainResult,
}

#[derive(Debug, Deserialize)]
struct OptionChainResult {
    result: Vec<ChainRow>,
}

#[derive(Debug, Deserialize)]
struct ChainRow {
    #[serde(default)]
    options: Vec<OptionLadder>,
}

#[derive(Debug, Deserialize)]
struct OptionLadder {
    #[serde(default)]
    calls: Vec<YahooContract>,
    #[serde(default)]
    puts: Vec<YahooContract>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YahooContract {
    strike: f64,
    last_price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_quote_response() {
        let payload = r#"{
            "quoteResponse": {
                "result": [
                    {"symbol": "AAPL", "regularMarketPrice": 187.44, "bid": 187.40}
                ],
                "error": null
            }
        }"#;

        let response: QuoteResponse = serde_json::from_str(payload).unwrap();
        let row = response.quote_response.result.into_iter().next().unwrap();
        assert_eq!(row.regular_market_price, Some(187.44));
    }

    #[test]
    fn test_decode_options_response() {
        let payload = r#"{
            "optionChain": {
                "result": [{
                    "underlyingSymbol": "AAPL",
                    "expirationDates": [1789689600],
                    "options": [{
                        "expirationDate": 1789689600,
                        "calls": [
                            {"strike": 180.0, "lastPrice": 9.10, "volume": 120},
                            {"strike": 185.0, "lastPrice": 5.45},
                            {"strike": 190.0}
                        ],
                        "puts": [
                            {"strike": 180.0, "lastPrice": 2.05},
                            {"strike": 185.0, "lastPrice": 4.10}
                        ]
                    }]
                }],
                "error": null
            }
        }"#;

        let response: OptionsResponse = serde_json::from_str(payload).unwrap();
        let ladder = response
            .option_chain
            .result
            .into_iter()
            .next()
            .unwrap()
            .options
            .into_iter()
            .next()
            .unwrap();

        let calls = convert_contracts(ladder.calls);
        let puts = convert_contracts(ladder.puts);

        // The untraded 190 call is dropped
        assert_eq!(calls, vec![Quote::new(180.0, 9.10), Quote::new(185.0, 5.45)]);
        assert_eq!(puts, vec![Quote::new(180.0, 2.05), Quote::new(185.0, 4.10)]);
    }

    #[test]
    fn test_decode_empty_result_rows() {
        let payload = r#"{"optionChain": {"result": [], "error": null}}"#;
        let response: OptionsResponse = serde_json::from_str(payload).unwrap();
        assert!(response.option_chain.result.is_empty());

        let payload = r#"{"quoteResponse": {"result": [], "error": null}}"#;
        let response: QuoteResponse = serde_json::from_str(payload).unwrap();
        assert!(response.quote_response.result.is_empty());
    }

    #[test]
    fn test_quote_row_without_price_field() {
        let payload = r#"{"quoteResponse": {"result": [{"symbol": "HALTED"}]}}"#;
        let response: QuoteResponse = serde_json::from_str(payload).unwrap();
        let row = response.quote_response.result.into_iter().next().unwrap();
        assert_eq!(row.regular_market_price, None);
    }
}
