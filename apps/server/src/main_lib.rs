//! Application state and dependency wiring.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use atlas_core::countries::{CountryService, CountryServiceTrait};
use atlas_core::refresh::{RefreshService, RefreshServiceTrait, ThreadRngMultiplier};
use atlas_core::status::{StatusService, StatusServiceTrait};
use atlas_source_data::{OpenErApiSource, RestCountriesSource};
use atlas_storage_sqlite::countries::CountryRepository;
use atlas_storage_sqlite::status::StatusRepository;
use atlas_storage_sqlite::{create_pool, db, run_migrations, spawn_writer};

use crate::config::Config;

pub struct AppState {
    pub country_service: Arc<dyn CountryServiceTrait>,
    pub refresh_service: Arc<dyn RefreshServiceTrait>,
    pub status_service: Arc<dyn StatusServiceTrait>,
    /// Where generated artifacts (the refresh summary) land.
    pub data_dir: PathBuf,
}

pub fn init_tracing() {
    let log_format = std::env::var("ATLAS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = create_pool(&db_path)?;
    run_migrations(&pool)?;
    let writer = spawn_writer(pool.clone());

    let country_repository = Arc::new(CountryRepository::new(pool.clone(), writer.clone()));
    let status_repository = Arc::new(StatusRepository::new(pool.clone(), writer.clone()));

    let status_service: Arc<dyn StatusServiceTrait> =
        Arc::new(StatusService::new(status_repository));
    let country_service: Arc<dyn CountryServiceTrait> = Arc::new(CountryService::new(
        country_repository.clone(),
        status_service.clone(),
    ));

    let countries_source = Arc::new(RestCountriesSource::new(
        config.countries_url.clone(),
        config.source_timeout,
    ));
    let rates_source = Arc::new(OpenErApiSource::new(
        config.rates_url.clone(),
        config.source_timeout,
    ));
    let refresh_service: Arc<dyn RefreshServiceTrait> = Arc::new(RefreshService::new(
        countries_source,
        rates_source,
        country_repository,
        status_service.clone(),
        Arc::new(ThreadRngMultiplier),
    ));

    std::fs::create_dir_all(&config.data_dir)?;

    Ok(Arc::new(AppState {
        country_service,
        refresh_service,
        status_service,
        data_dir: PathBuf::from(&config.data_dir),
    }))
}
