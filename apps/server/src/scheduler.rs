//! Background scheduler for periodic refresh cycles.
//!
//! Optional: enabled by setting `ATLAS_REFRESH_INTERVAL_SECS` to a
//! non-zero value. Failures are logged and swallowed; the next tick tries
//! again.

use std::sync::Arc;

use tokio::time::{interval, Duration};
use tracing::{debug, info, warn};

use crate::api::refresh::run_refresh_cycle;
use crate::main_lib::AppState;

/// Initial delay before the first scheduled cycle, so the server is fully
/// up before it starts talking to upstreams.
const INITIAL_DELAY_SECS: u64 = 30;

pub fn start_refresh_scheduler(state: Arc<AppState>, interval_secs: u64) {
    if interval_secs == 0 {
        debug!("refresh scheduler disabled");
        return;
    }

    tokio::spawn(async move {
        info!("refresh scheduler started ({}s interval)", interval_secs);

        tokio::time::sleep(Duration::from_secs(INITIAL_DELAY_SECS)).await;

        let mut ticks = interval(Duration::from_secs(interval_secs));
        loop {
            ticks.tick().await;
            match run_refresh_cycle(&state).await {
                Ok(outcome) => info!("scheduled refresh: {}", outcome.summary()),
                Err(e) => warn!("scheduled refresh failed: {}", e),
            }
        }
    });
}
