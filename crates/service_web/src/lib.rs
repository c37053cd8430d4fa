//! Web service for the expected-move calculator.
//!
//! Serves the interactive form page, a JSON calculation endpoint, and
//! health probes. The calculation endpoint marshals user input into the
//! `emove_core` kernel and renders the result; all market data arrives
//! through the `adapter_market` provider abstraction.

pub mod config;
pub mod routes;
pub mod server;

/// Service version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
