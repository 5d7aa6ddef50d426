use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use atlas_core::status::SystemStatus;

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_status(State(state): State<Arc<AppState>>) -> ApiResult<Json<SystemStatus>> {
    Ok(Json(state.status_service.current()?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}
