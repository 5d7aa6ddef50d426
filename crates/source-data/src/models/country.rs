//! Normalized country listing entry.

use serde::{Deserialize, Serialize};

/// One currency attached to a country entry.
///
/// The code may be an empty string when the upstream entry carried no
/// usable code; downstream resolution still treats such an entry as
/// present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyEntry {
    pub code: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// A country entry as normalized by the directory adapter.
///
/// This is transient per refresh cycle; it carries no identity beyond the
/// name as seen this cycle. Entries without a usable name or with a
/// negative population never make it this far; the adapter drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCountry {
    pub name: String,
    pub capital: Option<String>,
    pub region: Option<String>,
    /// Non-negative after normalization.
    pub population: i64,
    pub flag_url: Option<String>,
    /// Unordered; iteration order is whatever the decoder produced and is
    /// not stable across calls.
    pub currencies: Vec<CurrencyEntry>,
}

impl RawCountry {
    /// Entry with just a name and population, no optional attributes.
    /// Handy in tests and when the upstream omits everything else.
    pub fn bare(name: impl Into<String>, population: i64) -> Self {
        Self {
            name: name.into(),
            capital: None,
            region: None,
            population,
            flag_url: None,
            currencies: Vec::new(),
        }
    }
}
