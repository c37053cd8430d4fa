//! Market data feed errors.
//!
//! All variants describe the single externally-visible failure class "data
//! fetch failure"; the split exists so logs and tests can tell transport
//! problems from upstream data gaps.

use thiserror::Error;

/// Market data feed errors.
///
/// # Variants
///
/// - `Http`: Transport-level failure (connect, timeout, non-success status)
/// - `Decode`: Upstream payload did not match the expected shape
/// - `UnknownSymbol`: Upstream has no data for the symbol
/// - `NoChainForExpiry`: Symbol exists but lists no chain for the expiry
/// - `MissingField`: Payload decoded but lacked a required field
#[derive(Error, Debug)]
pub enum FeedError {
    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Response payload could not be decoded.
    #[error("Failed to decode market data: {0}")]
    Decode(String),

    /// Upstream has no data for the symbol.
    #[error("Unknown symbol: {symbol}")]
    UnknownSymbol {
        /// The symbol that was queried
        symbol: String,
    },

    /// No option chain listed for the requested expiry.
    #[error("No option chain for {symbol} expiring {expiry}")]
    NoChainForExpiry {
        /// The symbol that was queried
        symbol: String,
        /// The requested expiry (ISO 8601)
        expiry: String,
    },

    /// Decoded payload lacked a required field.
    #[error("Market data missing field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FeedError::Decode(err.to_string())
        } else {
            FeedError::Http(err.to_string())
        }
    }
}
