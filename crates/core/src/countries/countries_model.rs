//! Country domain models.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_CURRENCY_CODE_LEN;
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Domain model for a persisted country record.
///
/// Identity is the `name`, compared case-insensitively for every lookup
/// and upsert: "Japan" and "japan" refer to the same record. The `id` is
/// a storage surrogate that stays stable across upserts.
///
/// `estimated_gdp` is present exactly when `exchange_rate` is; a record
/// whose currency never resolved to a rate carries neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: String,
    pub name: String,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub population: i64,
    pub currency_code: Option<String>,
    pub exchange_rate: Option<Decimal>,
    pub estimated_gdp: Option<Decimal>,
    pub flag_url: Option<String>,
    /// Set on every successful upsert.
    pub last_refreshed_at: DateTime<Utc>,
}

/// The write shape for an upsert: everything but the surrogate id and the
/// refresh timestamp, which the repository owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryUpsert {
    pub name: String,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub population: i64,
    pub currency_code: Option<String>,
    pub exchange_rate: Option<Decimal>,
    pub estimated_gdp: Option<Decimal>,
    pub flag_url: Option<String>,
}

impl CountryUpsert {
    /// Validate the record before it reaches storage.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }

        if self.population < 0 {
            return Err(ValidationError::InvalidInput(format!(
                "population must be non-negative, got {}",
                self.population
            ))
            .into());
        }

        if let Some(code) = &self.currency_code {
            if code.len() > MAX_CURRENCY_CODE_LEN {
                return Err(ValidationError::InvalidInput(format!(
                    "currency code '{}' exceeds {} characters",
                    code, MAX_CURRENCY_CODE_LEN
                ))
                .into());
            }
            if code.chars().any(|c| c.is_ascii_lowercase()) {
                return Err(ValidationError::InvalidInput(format!(
                    "currency code '{}' is not in canonical uppercase form",
                    code
                ))
                .into());
            }
        }

        if let Some(rate) = self.exchange_rate {
            if rate <= Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "exchange rate must be positive, got {}",
                    rate
                ))
                .into());
            }
        }

        // An estimate without a rate (or the reverse) breaks the record's
        // nullability pairing.
        match (self.exchange_rate, self.estimated_gdp) {
            (None, Some(_)) => {
                return Err(Error::ConstraintViolation(
                    "estimated GDP present without an exchange rate".to_string(),
                ))
            }
            (Some(_), None) => {
                return Err(Error::ConstraintViolation(
                    "exchange rate present without an estimated GDP".to_string(),
                ))
            }
            _ => {}
        }

        if let Some(gdp) = self.estimated_gdp {
            if gdp < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "estimated GDP must be non-negative, got {}",
                    gdp
                ))
                .into());
            }
        }

        Ok(())
    }
}

/// Sort modes accepted by the listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Highest estimated GDP first; records without an estimate last.
    GdpDesc,
    /// Alphabetical by name.
    NameAsc,
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gdp_desc" => Ok(SortMode::GdpDesc),
            "name_asc" => Ok(SortMode::NameAsc),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown sort mode '{}', expected 'gdp_desc' or 'name_asc'",
                other
            ))
            .into()),
        }
    }
}

/// Listing filters. Absent sort preserves storage-natural order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryFilters {
    pub region: Option<String>,
    pub currency_code: Option<String>,
    pub sort: Option<SortMode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_upsert() -> CountryUpsert {
        CountryUpsert {
            name: "Japan".to_string(),
            capital: Some("Tokyo".to_string()),
            region: Some("Asia".to_string()),
            population: 125_000_000,
            currency_code: Some("JPY".to_string()),
            exchange_rate: Some(dec!(151.4)),
            estimated_gdp: Some(dec!(1238000.55)),
            flag_url: None,
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(valid_upsert().validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut record = valid_upsert();
        record.name = "  ".to_string();
        assert!(matches!(
            record.validate(),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn oversized_currency_code_is_rejected() {
        let mut record = valid_upsert();
        record.currency_code = Some("WAYTOOLONGCODE".to_string());
        assert!(record.validate().is_err());
    }

    #[test]
    fn lowercase_currency_code_is_rejected() {
        let mut record = valid_upsert();
        record.currency_code = Some("jpy".to_string());
        assert!(record.validate().is_err());
    }

    #[test]
    fn rate_and_gdp_nullability_must_pair() {
        let mut record = valid_upsert();
        record.estimated_gdp = None;
        assert!(matches!(
            record.validate(),
            Err(Error::ConstraintViolation(_))
        ));

        let mut record = valid_upsert();
        record.exchange_rate = None;
        assert!(matches!(
            record.validate(),
            Err(Error::ConstraintViolation(_))
        ));

        let mut record = valid_upsert();
        record.exchange_rate = None;
        record.estimated_gdp = None;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn sort_mode_parses_known_values_only() {
        assert_eq!(SortMode::from_str("gdp_desc").unwrap(), SortMode::GdpDesc);
        assert_eq!(SortMode::from_str("name_asc").unwrap(), SortMode::NameAsc);
        assert!(SortMode::from_str("population_desc").is_err());
    }
}
