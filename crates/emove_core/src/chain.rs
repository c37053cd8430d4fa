//! Option chain snapshot types.
//!
//! A chain is taken as given by the market-data collaborator: strikes are
//! not assumed sorted or unique, and the call and put sides may list
//! strikes independently of one another.

use serde::{Deserialize, Serialize};

/// Last traded price for one option contract at one strike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Strike price
    pub strike: f64,
    /// Last traded price
    pub last_price: f64,
}

impl Quote {
    /// Creates a new quote.
    pub fn new(strike: f64, last_price: f64) -> Self {
        Self { strike, last_price }
    }
}

/// Option chain snapshot for a single underlying and single expiry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionChain {
    /// Call quotes, in exchange order
    pub calls: Vec<Quote>,
    /// Put quotes, in exchange order
    pub puts: Vec<Quote>,
}

impl OptionChain {
    /// Creates a chain from call and put quote lists.
    pub fn new(calls: Vec<Quote>, puts: Vec<Quote>) -> Self {
        Self { calls, puts }
    }

    /// Iterates call strikes in listing order.
    pub fn call_strikes(&self) -> impl Iterator<Item = f64> + '_ {
        self.calls.iter().map(|q| q.strike)
    }

    /// Iterates put strikes in listing order.
    pub fn put_strikes(&self) -> impl Iterator<Item = f64> + '_ {
        self.puts.iter().map(|q| q.strike)
    }

    /// First call quote at exactly the given strike, if any.
    ///
    /// Lookup is exact-match; when the chain lists the same strike more
    /// than once, the first quote in listing order wins.
    pub fn call_at(&self, strike: f64) -> Option<&Quote> {
        self.calls.iter().find(|q| q.strike == strike)
    }

    /// First put quote at exactly the given strike, if any.
    pub fn put_at(&self, strike: f64) -> Option<&Quote> {
        self.puts.iter().find(|q| q.strike == strike)
    }
}
