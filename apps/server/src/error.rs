//! HTTP error mapping.
//!
//! Core errors translate onto four response classes. The important one is
//! the refresh abort: an upstream source failure becomes a 503 "source
//! unavailable", which callers must be able to tell apart from the
//! 200-class partial-failure outcome of a cycle that did run.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use atlas_core::errors::DatabaseError;
use atlas_core::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    /// An upstream data source was unreachable; the refresh aborted.
    SourceUnavailable { source: String, detail: String },
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SourceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Source(e) => ApiError::SourceUnavailable {
                source: e.source_name().to_string(),
                detail: e.to_string(),
            },
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::Database(DatabaseError::NotFound(msg)) => ApiError::NotFound(msg),
            Error::Validation(e) => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::SourceUnavailable { detail, .. } => ErrorBody {
                error: "source unavailable",
                detail: Some(detail),
            },
            ApiError::NotFound(msg) => ErrorBody {
                error: "not found",
                detail: Some(msg),
            },
            ApiError::BadRequest(msg) => ErrorBody {
                error: "invalid request",
                detail: Some(msg),
            },
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                // Details stay in the logs.
                ErrorBody {
                    error: "internal error",
                    detail: None,
                }
            }
        };
        (status, Json(body)).into_response()
    }
}
