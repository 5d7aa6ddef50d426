use atlas_server::api::app_router;
use atlas_server::config::Config;
use atlas_server::main_lib::{build_state, init_tracing};
use atlas_server::scheduler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();
    let state = build_state(&config).await?;

    // Optional background refresh loop; disabled when the interval is 0.
    scheduler::start_refresh_scheduler(state.clone(), config.refresh_interval_secs);

    let router = app_router(state);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
