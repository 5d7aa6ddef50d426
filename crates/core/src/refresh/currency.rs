//! Currency resolution.
//!
//! Extracts one canonical currency code per country record and maps it to
//! a rate from the cycle's snapshot. Both steps are total functions:
//! missing currencies and unknown codes are valid terminal states, never
//! errors.

use rust_decimal::Decimal;

use atlas_source_data::{RateSnapshot, RawCountry};

/// Resolve the canonical currency code for a record.
///
/// None when the record carries no currencies at all. Otherwise the FIRST
/// entry in iteration order is used and uppercased; later entries are
/// never consulted, and a present entry with an empty code still resolves
/// to `Some("")`.
pub fn resolve_code(raw: &RawCountry) -> Option<String> {
    raw.currencies.first().map(|entry| entry.code.to_uppercase())
}

/// Look up the rate for a resolved code in the cycle snapshot.
///
/// None for a None code; otherwise a case-insensitive exact match.
/// Absence from the snapshot is not an error.
pub fn lookup_rate(code: Option<&str>, snapshot: &RateSnapshot) -> Option<Decimal> {
    snapshot.rate(code?)
}
