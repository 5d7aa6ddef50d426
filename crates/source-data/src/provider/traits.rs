//! Source trait definitions.
//!
//! The refresh engine depends on these traits, never on a concrete
//! adapter, so tests can substitute deterministic doubles for both
//! upstreams.

use async_trait::async_trait;

use crate::errors::SourceDataError;
use crate::models::{RateSnapshot, RawCountry};

/// The country directory upstream.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Stable identifier for this source, used in logs and failure
    /// attribution ("RESTCOUNTRIES", ...).
    fn id(&self) -> &'static str;

    /// Fetch and normalize the full country listing.
    ///
    /// Entries without a usable name or with a negative population are
    /// silently dropped during normalization; they are not per-record
    /// errors. Every other failure mode is a [`SourceDataError`].
    async fn fetch_countries(&self) -> Result<Vec<RawCountry>, SourceDataError>;
}

/// The exchange-rate upstream.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Stable identifier for this source ("OPEN_ER_API", ...).
    fn id(&self) -> &'static str;

    /// Fetch one point-in-time rate snapshot.
    ///
    /// The snapshot is scoped to a single refresh cycle; callers must not
    /// reuse it across cycles.
    async fn fetch_rates(&self) -> Result<RateSnapshot, SourceDataError>;
}
