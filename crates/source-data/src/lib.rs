//! Atlas Source Data Crate
//!
//! This crate wraps the two upstream data sources the refresh pipeline
//! depends on: a country directory and an exchange-rate feed.
//!
//! # Overview
//!
//! Each upstream is hidden behind a small async trait:
//! - [`CountrySource`] yields the normalized country listing
//! - [`RateSource`] yields one [`RateSnapshot`] per call
//!
//! Upstream JSON is structurally inconsistent (names as strings or
//! objects, capitals as scalars or arrays, currencies keyed or listed).
//! All of that variance is absorbed here, at the adapter boundary: the
//! rest of the system only ever sees [`RawCountry`] and [`RateSnapshot`].
//!
//! # Failure model
//!
//! Every adapter failure is a [`SourceDataError`] carrying the name of
//! the upstream that produced it. Timeouts are bounded by the reqwest
//! client configured at construction; an expired timeout surfaces as
//! [`SourceDataError::Timeout`] rather than hanging the caller.

pub mod errors;
pub mod models;
pub mod provider;

// Re-export the canonical shapes
pub use models::{CurrencyEntry, RateSnapshot, RawCountry};

// Re-export provider types
pub use provider::open_er_api::OpenErApiSource;
pub use provider::rest_countries::RestCountriesSource;
pub use provider::{CountrySource, RateSource};

// Re-export the failure taxonomy
pub use errors::SourceDataError;
