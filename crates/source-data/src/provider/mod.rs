//! Upstream source adapters.
//!
//! One directory per upstream, plus the trait definitions every adapter
//! implements. Concrete adapters own their reqwest client and apply the
//! timeout configured at construction.

pub mod open_er_api;
pub mod rest_countries;
mod traits;

pub use traits::{CountrySource, RateSource};
