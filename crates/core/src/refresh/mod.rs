//! Refresh module - the reconciliation engine and its per-record steps.
//!
//! A refresh cycle fetches the country directory and one exchange-rate
//! snapshot, enriches every fetched record (currency resolution, GDP
//! estimation), upserts each into storage under case-insensitive name
//! identity, and finally reconciles the status singleton from storage
//! truth. Failure isolation is the whole point: a failed cycle never
//! corrupts existing data, and one bad record never aborts its siblings.

pub mod currency;
pub mod gdp;

mod refresh_model;
mod refresh_service;


// Re-export the public interface
pub use gdp::{FixedMultiplier, MultiplierSource, ThreadRngMultiplier};
pub use refresh_model::RefreshOutcome;
pub use refresh_service::{RefreshService, RefreshServiceTrait};
