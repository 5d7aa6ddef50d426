//! Post-refresh summary artifact.
//!
//! After every refresh cycle that persisted at least one record, the
//! summary is rebuilt from the top records by estimated GDP plus the
//! status singleton, and written as JSON into the data directory. Its
//! failure is logged by the caller and never fails the refresh response.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atlas_core::countries::{Country, CountryFilters, SortMode};
use atlas_core::errors::Result;
use atlas_core::status::SystemStatus;
use atlas_core::Error;

use crate::main_lib::AppState;

pub const SUMMARY_FILE: &str = "summary.json";

/// How many records the artifact keeps.
const TOP_COUNTRIES: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    pub name: String,
    pub region: Option<String>,
    pub currency_code: Option<String>,
    pub estimated_gdp: Option<Decimal>,
}

impl From<Country> for SummaryEntry {
    fn from(country: Country) -> Self {
        Self {
            name: country.name,
            region: country.region,
            currency_code: country.currency_code,
            estimated_gdp: country.estimated_gdp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryArtifact {
    pub generated_at: DateTime<Utc>,
    pub status: SystemStatus,
    pub top_countries_by_gdp: Vec<SummaryEntry>,
}

/// Rebuild and persist the summary artifact. Read-only against the
/// service layer; the only write is the file itself.
pub fn generate(state: &AppState) -> Result<PathBuf> {
    let top = state.country_service.list_countries(&CountryFilters {
        sort: Some(SortMode::GdpDesc),
        ..Default::default()
    })?;
    let status = state.status_service.current()?;

    let artifact = SummaryArtifact {
        generated_at: Utc::now(),
        status,
        top_countries_by_gdp: top
            .into_iter()
            .take(TOP_COUNTRIES)
            .map(SummaryEntry::from)
            .collect(),
    };

    let path = state.data_dir.join(SUMMARY_FILE);
    let body = serde_json::to_vec_pretty(&artifact)
        .map_err(|e| Error::Unexpected(format!("summary serialization failed: {}", e)))?;
    std::fs::write(&path, body)
        .map_err(|e| Error::Unexpected(format!("summary write failed: {}", e)))?;

    Ok(path)
}
