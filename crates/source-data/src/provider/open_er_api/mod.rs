//! Exchange-rate adapter.
//!
//! Fetches one point-in-time rate snapshot from an open.er-api-style
//! endpoint. The whole refresh cycle shares a single snapshot quoted
//! against one base currency.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::SourceDataError;
use crate::models::RateSnapshot;
use crate::provider::RateSource;

/// Source identifier used in logs and failure attribution.
const SOURCE_ID: &str = "OPEN_ER_API";

/// Base currency assumed when the upstream omits one.
const DEFAULT_BASE: &str = "USD";

/// Rate payload as the upstream serves it.
#[derive(Debug, Deserialize)]
struct RatesPayload {
    /// "success" on the happy path; some deployments omit it entirely.
    result: Option<String>,
    #[serde(alias = "base_code")]
    base: Option<String>,
    /// Absent when the upstream is broken; that is a shape error, not an
    /// empty snapshot.
    rates: Option<HashMap<String, Decimal>>,
}

impl RatesPayload {
    fn into_snapshot(self) -> Result<RateSnapshot, SourceDataError> {
        if let Some(result) = &self.result {
            if result != "success" {
                return Err(SourceDataError::MalformedPayload {
                    source: SOURCE_ID,
                    message: format!("upstream result was {:?}", result),
                });
            }
        }

        let rates = self.rates.ok_or_else(|| SourceDataError::MalformedPayload {
            source: SOURCE_ID,
            message: "missing rates field".to_string(),
        })?;

        Ok(RateSnapshot::new(
            self.base.unwrap_or_else(|| DEFAULT_BASE.to_string()),
            rates,
        ))
    }
}

/// Exchange-rate adapter over an open.er-api-style HTTP endpoint.
pub struct OpenErApiSource {
    client: Client,
    url: String,
}

impl OpenErApiSource {
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
impl RateSource for OpenErApiSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_rates(&self) -> Result<RateSnapshot, SourceDataError> {
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

        let payload: RatesPayload = response
            .json()
            .await
            .map_err(|e| SourceDataError::from_reqwest(SOURCE_ID, e))?;

        payload.into_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn decode(json: &str) -> Result<RateSnapshot, SourceDataError> {
        serde_json::from_str::<RatesPayload>(json)
            .expect("payload should decode")
            .into_snapshot()
    }

    #[test]
    fn success_payload_becomes_a_snapshot() {
        let snapshot = decode(
            r#"{"result": "success", "base_code": "USD", "rates": {"EUR": 0.92, "JPY": 151.4}}"#,
        )
        .unwrap();
        assert_eq!(snapshot.base(), "USD");
        assert_eq!(snapshot.rate("EUR"), Some(dec!(0.92)));
        assert_eq!(snapshot.rate("jpy"), Some(dec!(151.4)));
    }

    #[test]
    fn missing_rates_field_is_a_shape_error() {
        let err = decode(r#"{"result": "success", "base_code": "USD"}"#).unwrap_err();
        match err {
            SourceDataError::MalformedPayload { source, message } => {
                assert_eq!(source, "OPEN_ER_API");
                assert!(message.contains("rates"));
            }
            other => panic!("expected MalformedPayload, got {:?}", other),
        }
    }

    #[test]
    fn error_result_is_a_shape_error_even_with_rates() {
        let err = decode(r#"{"result": "error", "rates": {"EUR": 0.9}}"#).unwrap_err();
        assert!(matches!(err, SourceDataError::MalformedPayload { .. }));
    }

    #[test]
    fn omitted_result_and_base_default_to_usd() {
        let snapshot = decode(r#"{"rates": {"GBP": 0.79}}"#).unwrap();
        assert_eq!(snapshot.base(), "USD");
        assert_eq!(snapshot.rate("GBP"), Some(dec!(0.79)));
    }

    #[test]
    fn integer_rates_decode_too() {
        let snapshot = decode(r#"{"rates": {"ABC": 2}}"#).unwrap();
        assert_eq!(snapshot.rate("ABC"), Some(dec!(2)));
    }
}
