use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use atlas_core::refresh::RefreshOutcome;

use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::summary;

/// Trigger one refresh cycle synchronously.
///
/// A country-source failure surfaces as 503 via `ApiError`; every other
/// outcome, including an all-records-failed cycle, is a 200 with the
/// outcome body.
async fn trigger_refresh(State(state): State<Arc<AppState>>) -> ApiResult<Json<RefreshOutcome>> {
    let outcome = run_refresh_cycle(&state).await?;
    Ok(Json(outcome))
}

/// One refresh cycle plus artifact regeneration. Shared between the HTTP
/// trigger and the background scheduler.
pub async fn run_refresh_cycle(state: &Arc<AppState>) -> atlas_core::Result<RefreshOutcome> {
    let outcome = state.refresh_service.run_refresh().await?;

    // The artifact consumer is strictly read-only and its failure must
    // never fail the refresh itself.
    if outcome.processed > 0 {
        if let Err(e) = summary::generate(state) {
            tracing::warn!("summary artifact generation failed: {}", e);
        }
    }

    Ok(outcome)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/countries/refresh", post(trigger_refresh))
}
