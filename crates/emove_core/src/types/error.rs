//! Error types for the expected-move kernel.
//!
//! This module provides:
//! - `ExpectedMoveError`: Failures of the estimator itself
//! - `DateError`: Expiry date construction and parsing failures
//! - `SymbolError`: Ticker symbol validation failures
//! - `Severity`: Distinguishes data-availability warnings from hard errors

use std::fmt;
use thiserror::Error;

/// Which side of the chain an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionSide {
    Call,
    Put,
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionSide::Call => write!(f, "call"),
            OptionSide::Put => write!(f, "put"),
        }
    }
}

/// Severity of a calculation failure.
///
/// `Warning` marks data-availability conditions the user can work around by
/// picking a different expiry or symbol; `Error` marks everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Expected-move estimator errors.
///
/// # Variants
///
/// - `InvalidSpot`: Non-positive (or non-finite) spot price
/// - `EmptyChain`: No strikes to search for the ATM strike
/// - `MissingQuote`: ATM strike has no quote on one side of the chain
/// - `InsufficientOtmStrikes`: No strike strictly beyond the ATM strike on
///   one side, so no strangle can be priced
///
/// # Examples
///
/// ```
/// use emove_core::types::error::{ExpectedMoveError, OptionSide, Severity};
///
/// let err = ExpectedMoveError::MissingQuote {
///     side: OptionSide::Put,
///     strike: 100.0,
/// };
/// assert!(format!("{}", err).contains("put"));
/// assert_eq!(err.severity(), Severity::Error);
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpectedMoveError {
    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot value
        spot: f64,
    },

    /// No strikes available to search.
    #[error("Option chain has no strikes to search")]
    EmptyChain,

    /// No quote at the ATM strike on the given side.
    #[error("No {side} quote at ATM strike {strike}")]
    MissingQuote {
        /// Side of the chain the quote was missing from
        side: OptionSide,
        /// The ATM strike that had no exact match
        strike: f64,
    },

    /// No strike strictly beyond the ATM strike on the given side.
    #[error("No OTM {side} strike beyond ATM strike {atm_strike}")]
    InsufficientOtmStrikes {
        /// Side of the chain with no OTM strikes
        side: OptionSide,
        /// The ATM strike the partition was taken around
        atm_strike: f64,
    },
}

impl ExpectedMoveError {
    /// Severity of this failure.
    ///
    /// `InsufficientOtmStrikes` is a data-availability condition rather
    /// than a bug, so it is reported as a warning; all other variants are
    /// hard errors.
    pub fn severity(&self) -> Severity {
        match self {
            ExpectedMoveError::InsufficientOtmStrikes { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Expiry date errors.
///
/// # Variants
///
/// - `InvalidDate`: Components do not form a real calendar date
/// - `Parse`: String is not ISO 8601 `YYYY-MM-DD`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateError {
    /// Invalid calendar date components.
    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse an ISO 8601 date string.
    #[error("Invalid date format (expected YYYY-MM-DD): {0}")]
    Parse(String),
}

/// Ticker symbol errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymbolError {
    /// Empty or whitespace-only symbol.
    #[error("Symbol must not be empty")]
    Empty,
}
