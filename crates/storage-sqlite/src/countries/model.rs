//! Database row type for countries.

use std::str::FromStr;

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use atlas_core::countries::{Country, CountryUpsert};

/// Row shape for the `countries` table.
///
/// Decimals are stored as text and parsed back on read; the surrogate
/// `id` never changes once a row exists, upserts overwrite everything
/// else. `treat_none_as_null` matters here: an upsert that lost its rate
/// this cycle must null the stored one out, not keep it.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset, Identifiable)]
#[diesel(table_name = crate::schema::countries)]
#[diesel(treat_none_as_null = true)]
pub struct CountryRow {
    pub id: String,
    pub name: String,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub population: i64,
    pub currency_code: Option<String>,
    pub exchange_rate: Option<String>,
    pub estimated_gdp: Option<String>,
    pub flag_url: Option<String>,
    pub last_refreshed_at: NaiveDateTime,
}

impl CountryRow {
    /// Build the row for an upsert: all fields from the write shape, the
    /// given identity, and a fresh timestamp.
    pub fn from_upsert(id: String, record: &CountryUpsert, refreshed_at: NaiveDateTime) -> Self {
        Self {
            id,
            name: record.name.clone(),
            capital: record.capital.clone(),
            region: record.region.clone(),
            population: record.population,
            currency_code: record.currency_code.clone(),
            exchange_rate: record.exchange_rate.map(|d| d.to_string()),
            estimated_gdp: record.estimated_gdp.map(|d| d.to_string()),
            flag_url: record.flag_url.clone(),
            last_refreshed_at: refreshed_at,
        }
    }
}

impl From<CountryRow> for Country {
    fn from(row: CountryRow) -> Self {
        Country {
            id: row.id,
            name: row.name,
            capital: row.capital,
            region: row.region,
            population: row.population,
            currency_code: row.currency_code,
            exchange_rate: row
                .exchange_rate
                .as_deref()
                .and_then(|s| Decimal::from_str(s).ok()),
            estimated_gdp: row
                .estimated_gdp
                .as_deref()
                .and_then(|s| Decimal::from_str(s).ok()),
            flag_url: row.flag_url,
            last_refreshed_at: Utc.from_utc_datetime(&row.last_refreshed_at),
        }
    }
}
