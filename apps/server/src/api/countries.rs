use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use atlas_core::countries::{Country, CountryFilters, SortMode};

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
struct ListQuery {
    region: Option<String>,
    currency: Option<String>,
    sort: Option<String>,
}

async fn list_countries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Country>>> {
    let sort = query
        .sort
        .as_deref()
        .map(SortMode::from_str)
        .transpose()?;
    let filters = CountryFilters {
        region: query.region,
        currency_code: query.currency,
        sort,
    };
    Ok(Json(state.country_service.list_countries(&filters)?))
}

async fn get_country(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Country>> {
    Ok(Json(state.country_service.get_country(&name)?))
}

async fn delete_country(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.country_service.delete_country(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/countries/{name}", get(get_country).delete(delete_country))
}
