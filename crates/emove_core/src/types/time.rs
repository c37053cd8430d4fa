//! Option expiry date type.
//!
//! `ExpiryDate` wraps `chrono::NaiveDate` with strict ISO 8601 parsing,
//! since `YYYY-MM-DD` is the wire format the market-data collaborator
//! expects for chain lookups.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DateError;

/// Option expiry date.
///
/// # Examples
///
/// ```
/// use emove_core::types::time::ExpiryDate;
///
/// let expiry = ExpiryDate::parse("2026-09-18").unwrap();
/// assert_eq!(expiry.year(), 2026);
/// assert_eq!(format!("{}", expiry), "2026-09-18");
///
/// // Out-of-range components fail to parse
/// assert!(ExpiryDate::parse("2025-13-40").is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpiryDate(NaiveDate);

impl ExpiryDate {
    /// Creates an expiry from year, month, and day components.
    ///
    /// # Errors
    /// `DateError::InvalidDate` if the components do not form a real
    /// calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(ExpiryDate)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses an expiry from ISO 8601 format (`YYYY-MM-DD`).
    ///
    /// # Errors
    /// `DateError::Parse` if the string is malformed or out of range.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(ExpiryDate)
            .map_err(|e| DateError::Parse(format!("{}: {}", s, e)))
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        ExpiryDate(Local::now().date_naive())
    }

    /// Returns the underlying `NaiveDate`.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl FromStr for ExpiryDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        ExpiryDate::parse(s)
    }
}

impl fmt::Display for ExpiryDate {
    /// Formats the date as ISO 8601 (`YYYY-MM-DD`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
