//! Error types for the source data crate.
//!
//! [`SourceDataError`] is the single failure type raised by the upstream
//! adapters. Every variant names the source that produced it, so callers
//! can attribute a failure without inspecting the message text.

use std::fmt;

/// Errors raised while fetching or decoding an upstream data source.
///
/// The refresh engine treats these asymmetrically: a failure from the
/// country directory aborts the cycle, a failure from the rate feed only
/// degrades it. That policy lives in the engine; here every upstream
/// fails the same way.
///
/// `Display` and `Error` are implemented by hand rather than derived with
/// `thiserror`: every variant carries a field literally named `source`
/// (the upstream's name), and `thiserror` unconditionally treats a field
/// named `source` as the error's cause — which requires it to implement
/// `std::error::Error`. A `&'static str` does not, so the derive cannot
/// express this API. The hand-written impls below reproduce exactly the
/// messages the `#[error(...)]` attributes specified; `source()` is `None`
/// because these leaf errors wrap no underlying error value.
#[derive(Debug)]
pub enum SourceDataError {
    /// The request did not complete within the configured budget.
    /// The in-flight call is cancelled by the client; nothing is retried.
    Timeout {
        /// The upstream that timed out
        source: &'static str,
    },

    /// The upstream answered with a non-success HTTP status.
    HttpStatus {
        /// The upstream that responded
        source: &'static str,
        /// The status code it returned
        status: u16,
    },

    /// The response body did not have the expected shape
    /// (e.g. not a collection, or missing the rates field).
    MalformedPayload {
        /// The upstream that responded
        source: &'static str,
        /// What was wrong with the body
        message: String,
    },

    /// The upstream responded successfully but with no usable records.
    EmptyPayload {
        /// The upstream that responded
        source: &'static str,
    },

    /// A transport-level error (DNS, connect, TLS, broken body).
    Network {
        /// The upstream being contacted
        source: &'static str,
        /// The underlying transport error text
        message: String,
    },
}

impl fmt::Display for SourceDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout { source } => write!(f, "timed out waiting for {source}"),
            Self::HttpStatus { source, status } => {
                write!(f, "{source} responded with HTTP {status}")
            }
            Self::MalformedPayload { source, message } => {
                write!(f, "unexpected payload from {source}: {message}")
            }
            Self::EmptyPayload { source } => write!(f, "{source} returned no usable records"),
            Self::Network { source, message } => {
                write!(f, "network error contacting {source}: {message}")
            }
        }
    }
}

impl std::error::Error for SourceDataError {}

impl SourceDataError {
    /// The name of the upstream this failure came from.
    pub fn source_name(&self) -> &'static str {
        match self {
            Self::Timeout { source }
            | Self::HttpStatus { source, .. }
            | Self::MalformedPayload { source, .. }
            | Self::EmptyPayload { source }
            | Self::Network { source, .. } => source,
        }
    }

    /// The HTTP status attached to this failure, when there is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify a reqwest error. Timeouts get their own variant so the
    /// bounded-wait contract is visible in the type; everything else is
    /// transport noise.
    pub fn from_reqwest(source: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout { source }
        } else if err.is_decode() {
            Self::MalformedPayload {
                source,
                message: err.to_string(),
            }
        } else {
            Self::Network {
                source,
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_name_is_attributed_per_variant() {
        let err = SourceDataError::Timeout { source: "COUNTRIES" };
        assert_eq!(err.source_name(), "COUNTRIES");

        let err = SourceDataError::HttpStatus {
            source: "RATES",
            status: 502,
        };
        assert_eq!(err.source_name(), "RATES");
        assert_eq!(err.status_code(), Some(502));
    }

    #[test]
    fn only_http_failures_carry_a_status() {
        let err = SourceDataError::EmptyPayload { source: "COUNTRIES" };
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn display_names_the_source() {
        let err = SourceDataError::MalformedPayload {
            source: "RATES",
            message: "missing rates field".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "unexpected payload from RATES: missing rates field"
        );
    }
}
