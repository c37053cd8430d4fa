//! # emove_core: Expected-Move Calculation Kernel
//!
//! ## Layer Role
//!
//! emove_core is the bottom layer of the workspace, providing:
//! - Option chain snapshot types: `Quote`, `OptionChain` (`chain`)
//! - Input types: `Symbol`, `ExpiryDate` (`types`)
//! - Error types: `ExpectedMoveError`, `DateError`, `SymbolError` (`types::error`)
//! - The expected-move estimator: `expected_move`, `nearest_strike` (`calc`)
//!
//! ## Zero I/O Principle
//!
//! This layer performs no network or file access and holds no state between
//! calls. Market data arrives as an `OptionChain` snapshot built by the
//! adapter layer; every computation is a pure function of its arguments, so
//! the estimator can be exercised with fixed synthetic chains in tests.
//!
//! ## Usage Examples
//!
//! ```rust
//! use emove_core::chain::{OptionChain, Quote};
//! use emove_core::calc::expected_move;
//!
//! let chain = OptionChain::new(
//!     vec![
//!         Quote::new(95.0, 5.40),
//!         Quote::new(100.0, 3.20),
//!         Quote::new(105.0, 1.10),
//!     ],
//!     vec![
//!         Quote::new(95.0, 1.00),
//!         Quote::new(100.0, 2.80),
//!         Quote::new(105.0, 4.90),
//!     ],
//! );
//!
//! let result = expected_move(100.0, &chain).unwrap();
//! assert_eq!(result.atm_strike, 100.0);
//! assert_eq!(result.expected_move, 4.05);
//! assert_eq!(result.upper_bound, 104.05);
//! assert_eq!(result.lower_bound, 95.95);
//! ```

pub mod calc;
pub mod chain;
pub mod types;

pub use calc::{expected_move, nearest_strike, ExpectedMove};
pub use chain::{OptionChain, Quote};
pub use types::error::{DateError, ExpectedMoveError, Severity, SymbolError};
pub use types::symbol::Symbol;
pub use types::time::ExpiryDate;
