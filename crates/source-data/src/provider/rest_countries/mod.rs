//! Country directory adapter.
//!
//! Fetches the full country listing from a restcountries-style endpoint
//! and normalizes its notoriously inconsistent JSON into [`RawCountry`]:
//! names arrive as plain strings or `{common, official}` objects,
//! capitals as scalars or single-element arrays, flag URLs under several
//! keys, and currencies either as a code-keyed object or as an array of
//! entries. No downstream component ever branches on that variance again.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::SourceDataError;
use crate::models::{CurrencyEntry, RawCountry};
use crate::provider::CountrySource;

/// Source identifier used in logs and failure attribution.
const SOURCE_ID: &str = "RESTCOUNTRIES";

/// Upstream name: either a plain string or a structured object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NameField {
    Plain(String),
    Structured {
        common: Option<String>,
        official: Option<String>,
    },
}

impl NameField {
    fn into_name(self) -> Option<String> {
        let name = match self {
            Self::Plain(name) => name,
            Self::Structured { common, official } => common.or(official)?,
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// Upstream capital: a scalar or a collection; only the first entry is
/// meaningful.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CapitalField {
    One(String),
    Many(Vec<String>),
}

impl CapitalField {
    fn into_capital(self) -> Option<String> {
        match self {
            Self::One(capital) => Some(capital),
            Self::Many(capitals) => capitals.into_iter().next(),
        }
    }
}

/// Upstream flag URLs, keyed under `flags` as a string or object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FlagsField {
    Url(String),
    Keyed {
        png: Option<String>,
        svg: Option<String>,
    },
}

/// Currency entry inside an array-shaped `currencies` field.
#[derive(Debug, Deserialize)]
struct ListedCurrency {
    code: Option<String>,
    name: Option<String>,
    symbol: Option<String>,
}

/// Currency value inside an object-shaped `currencies` field; the code is
/// the key.
#[derive(Debug, Deserialize)]
struct KeyedCurrency {
    name: Option<String>,
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CurrenciesField {
    Keyed(HashMap<String, KeyedCurrency>),
    Listed(Vec<ListedCurrency>),
}

impl CurrenciesField {
    fn into_entries(self) -> Vec<CurrencyEntry> {
        match self {
            Self::Keyed(map) => map
                .into_iter()
                .map(|(code, value)| CurrencyEntry {
                    code,
                    name: value.name,
                    symbol: value.symbol,
                })
                .collect(),
            Self::Listed(entries) => entries
                .into_iter()
                .map(|entry| CurrencyEntry {
                    code: entry.code.unwrap_or_default(),
                    name: entry.name,
                    symbol: entry.symbol,
                })
                .collect(),
        }
    }
}

/// One raw listing entry as the upstream serves it.
#[derive(Debug, Deserialize)]
struct CountryPayload {
    name: Option<NameField>,
    capital: Option<CapitalField>,
    region: Option<String>,
    #[serde(default)]
    population: i64,
    flag: Option<String>,
    flags: Option<FlagsField>,
    currencies: Option<CurrenciesField>,
}

impl CountryPayload {
    /// Normalize into the canonical shape, or None when the entry must be
    /// dropped (no usable name, negative population).
    fn normalize(self) -> Option<RawCountry> {
        let name = self.name?.into_name()?;
        if self.population < 0 {
            return None;
        }

        let flag_url = self.flag.or(match self.flags {
            Some(FlagsField::Url(url)) => Some(url),
            Some(FlagsField::Keyed { png, svg }) => png.or(svg),
            None => None,
        });

        Some(RawCountry {
            name,
            capital: self.capital.and_then(CapitalField::into_capital),
            region: self.region,
            population: self.population,
            flag_url,
            currencies: self
                .currencies
                .map(CurrenciesField::into_entries)
                .unwrap_or_default(),
        })
    }
}

/// Decode and normalize a raw listing. Entries that fail to decode or
/// normalize are dropped silently; only the collection shape itself is a
/// source failure, and that is checked by the caller.
fn normalize_listing(values: Vec<serde_json::Value>) -> Vec<RawCountry> {
    values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<CountryPayload>(value).ok())
        .filter_map(CountryPayload::normalize)
        .collect()
}

/// Country directory adapter over a restcountries-style HTTP endpoint.
pub struct RestCountriesSource {
    client: Client,
    url: String,
}

impl RestCountriesSource {
    /// Build an adapter for `url` with the given per-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CountrySource for RestCountriesSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_countries(&self) -> Result<Vec<RawCountry>, SourceDataError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceDataError::from_reqwest(SOURCE_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceDataError::HttpStatus {
                source: SOURCE_ID,
                status: status.as_u16(),
            });
        }

        // A body that is not a collection fails this decode and surfaces
        // as a malformed-payload error. Individual entries are decoded
        // separately so one broken entry cannot fail the whole listing.
        let payloads: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| SourceDataError::from_reqwest(SOURCE_ID, e))?;

        let total = payloads.len();
        let countries = normalize_listing(payloads);

        if countries.len() < total {
            log::debug!(
                "{}: dropped {} unusable entries out of {}",
                SOURCE_ID,
                total - countries.len(),
                total
            );
        }

        Ok(countries)
    }
}
