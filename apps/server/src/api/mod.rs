//! HTTP routing.
//!
//! One file per resource, each exporting its own `router()`; everything
//! is merged under `/api` here.

pub mod countries;
pub mod refresh;
pub mod status;
pub mod summary;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(
            "/api",
            countries::router()
                .merge(refresh::router())
                .merge(status::router())
                .merge(summary::router()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
