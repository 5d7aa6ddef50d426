//! Per-cycle exchange-rate snapshot.

use rust_decimal::Decimal;
use std::collections::HashMap;

/// The exchange-rate mapping fetched once per refresh cycle.
///
/// All rates are quoted against a single base currency. The snapshot is
/// immutable once built and is shared read-only across every record
/// processed in the same cycle; it must never be cached into a later
/// cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    base: String,
    rates: HashMap<String, Decimal>,
}

impl RateSnapshot {
    /// Build a snapshot from an upstream rate mapping.
    ///
    /// Keys are stored uppercased; entries with a non-positive rate are
    /// discarded, so a rate looked up from this snapshot is always
    /// positive.
    pub fn new(base: impl Into<String>, rates: HashMap<String, Decimal>) -> Self {
        let rates = rates
            .into_iter()
            .filter(|(_, rate)| *rate > Decimal::ZERO)
            .map(|(code, rate)| (code.to_uppercase(), rate))
            .collect();
        Self {
            base: base.into().to_uppercase(),
            rates,
        }
    }

    /// Snapshot with no rates at all. Used when the rate source is down
    /// and the cycle degrades to all-unknown rates.
    pub fn empty(base: impl Into<String>) -> Self {
        Self {
            base: base.into().to_uppercase(),
            rates: HashMap::new(),
        }
    }

    /// The reference currency all rates are quoted against.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Look up a rate by currency code, case-insensitively.
    ///
    /// Absence is not an error; it is a valid terminal state for the
    /// record being processed.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(&code.to_uppercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
