use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use crate::summary::SUMMARY_FILE;

/// Serve the latest generated summary artifact verbatim.
async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<serde_json::Value>> {
    let path = state.data_dir.join(SUMMARY_FILE);
    let body = match std::fs::read(&path) {
        Ok(body) => body,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ApiError::NotFound(
                "no summary has been generated yet".to_string(),
            ))
        }
        Err(e) => return Err(ApiError::Internal(format!("summary artifact unreadable: {}", e))),
    };
    let value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Internal(format!("summary artifact unreadable: {}", e)))?;
    Ok(Json(value))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/summary", get(get_summary))
}
