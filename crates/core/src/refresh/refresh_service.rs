//! The reconciliation engine.
//!
//! Orchestrates one refresh cycle:
//!
//! ```text
//! RefreshService
//!       │
//!       ├─► CountrySource (directory listing, fetched first; a failure
//!       │                  here aborts the cycle with zero writes)
//!       ├─► RateSource    (one snapshot per cycle; a failure here only
//!       │                  degrades the cycle to all-unknown rates)
//!       ├─► per record: resolve code → look up rate → estimate GDP
//!       │               → CountryRepository.upsert (case-insensitive name)
//!       └─► StatusService.recompute_from_storage (only if anything stuck)
//! ```
//!
//! Per-record outcomes are collected as values; one bad record never
//! aborts its siblings, and the engine itself never catches anything.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use atlas_source_data::{CountrySource, RateSnapshot, RateSource, RawCountry, SourceDataError};

use super::currency;
use super::gdp::{self, MultiplierSource};
use super::refresh_model::RefreshOutcome;
use crate::constants::DEFAULT_BASE_CURRENCY;
use crate::countries::{Country, CountryRepositoryTrait, CountryUpsert};
use crate::errors::Result;
use crate::status::StatusServiceTrait;

/// Trait for triggering refresh cycles.
#[async_trait]
pub trait RefreshServiceTrait: Send + Sync {
    /// Run one full refresh cycle.
    ///
    /// `Err` is the abort path: the country directory was unreachable (or
    /// empty) and no storage write happened. `Ok` is everything else,
    /// including the all-records-failed case. Inspect
    /// [`RefreshOutcome::success`].
    async fn run_refresh(&self) -> Result<RefreshOutcome>;
}

pub struct RefreshService {
    countries: Arc<dyn CountrySource>,
    rates: Arc<dyn RateSource>,
    repository: Arc<dyn CountryRepositoryTrait>,
    status: Arc<dyn StatusServiceTrait>,
    multiplier: Arc<dyn MultiplierSource>,
}

impl RefreshService {
    pub fn new(
        countries: Arc<dyn CountrySource>,
        rates: Arc<dyn RateSource>,
        repository: Arc<dyn CountryRepositoryTrait>,
        status: Arc<dyn StatusServiceTrait>,
        multiplier: Arc<dyn MultiplierSource>,
    ) -> Self {
        Self {
            countries,
            rates,
            repository,
            status,
            multiplier,
        }
    }

    /// Enrich and persist a single record. Every step returns a value;
    /// the caller collects failures without aborting the loop.
    async fn process_record(
        &self,
        raw: &RawCountry,
        snapshot: &RateSnapshot,
    ) -> Result<Country> {
        let code = currency::resolve_code(raw);
        let rate = currency::lookup_rate(code.as_deref(), snapshot);
        let estimated_gdp = gdp::estimate(raw.population, rate, self.multiplier.as_ref());

        let record = CountryUpsert {
            name: raw.name.clone(),
            capital: raw.capital.clone(),
            region: raw.region.clone(),
            population: raw.population,
            currency_code: code,
            exchange_rate: rate,
            estimated_gdp,
            flag_url: raw.flag_url.clone(),
        };
        record.validate()?;

        self.repository.upsert(record).await
    }
}

#[async_trait]
impl RefreshServiceTrait for RefreshService {
    async fn run_refresh(&self) -> Result<RefreshOutcome> {
        // Step 1: the directory listing. Propagated untouched on failure;
        // nothing has been written yet.
        let raw_countries = self.countries.fetch_countries().await?;
        if raw_countries.is_empty() {
            return Err(SourceDataError::EmptyPayload {
                source: self.countries.id(),
            }
            .into());
        }

        // Step 2: the rate snapshot, fetched only once the needed code
        // set is known. A failure here degrades the cycle instead of
        // aborting it: every rate and estimate resolves to unknown.
        let needed: BTreeSet<String> = raw_countries
            .iter()
            .filter_map(currency::resolve_code)
            .collect();
        debug!(
            "refresh: {} records fetched, {} distinct currency codes",
            raw_countries.len(),
            needed.len()
        );

        let snapshot = match self.rates.fetch_rates().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(
                    "refresh: rate source unavailable, continuing without rates: {}",
                    e
                );
                RateSnapshot::empty(DEFAULT_BASE_CURRENCY)
            }
        };

        // Step 3: per-record processing, sequential, failure-isolated.
        let mut outcome = RefreshOutcome::default();
        for raw in &raw_countries {
            match self.process_record(raw, &snapshot).await {
                Ok(_) => outcome.record_success(),
                Err(e) => outcome.record_failure(&raw.name, e),
            }
        }

        // Step 4: reconcile the status singleton from storage truth, not
        // from the in-memory counter; rows untouched this cycle still
        // count. Skipped entirely when nothing was written.
        if outcome.processed > 0 {
            if let Err(e) = self.status.recompute_from_storage().await {
                warn!(
                    "refresh: status recompute failed, counters converge next cycle: {}",
                    e
                );
            }
        }

        debug!("refresh: {}", outcome.summary());
        Ok(outcome)
    }
}
