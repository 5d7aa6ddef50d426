//! Canonical shapes produced by the upstream adapters.
//!
//! - `country` - the normalized country listing entry ([`RawCountry`])
//! - `rates` - the per-cycle exchange-rate snapshot ([`RateSnapshot`])

mod country;
mod rates;

pub use country::{CurrencyEntry, RawCountry};
pub use rates::RateSnapshot;
