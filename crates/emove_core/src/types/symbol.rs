//! Ticker symbol type.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::SymbolError;

/// Validated, upper-cased ticker symbol.
///
/// Free-text input is trimmed and upper-cased on construction, so
/// `" aapl "` and `"AAPL"` name the same underlying. Empty input is
/// rejected.
///
/// # Examples
///
/// ```
/// use emove_core::types::symbol::Symbol;
///
/// let symbol = Symbol::new(" aapl ").unwrap();
/// assert_eq!(symbol.as_str(), "AAPL");
///
/// assert!(Symbol::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol from raw user input.
    pub fn new(raw: &str) -> Result<Self, SymbolError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SymbolError::Empty);
        }
        Ok(Symbol(trimmed.to_ascii_uppercase()))
    }

    /// Returns the normalised symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::new(s)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = SymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Symbol::new(&value)
    }
}

impl<'de> serde::Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        Symbol::new(&raw).map_err(serde::de::Error::custom)
    }
}
