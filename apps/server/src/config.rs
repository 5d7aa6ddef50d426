//! Server configuration, read once from the environment at startup.

use std::time::Duration;

/// Per-source timeout applied when the variable is unset or unparsable.
const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the server binds to.
    pub listen_addr: String,
    /// Path of the SQLite database file.
    pub db_path: String,
    /// Directory for generated artifacts (the refresh summary).
    pub data_dir: String,
    /// Country directory endpoint.
    pub countries_url: String,
    /// Exchange-rate endpoint.
    pub rates_url: String,
    /// Timeout budget for each upstream call.
    pub source_timeout: Duration,
    /// Background refresh interval in seconds; 0 disables the scheduler.
    pub refresh_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            listen_addr: env_or("ATLAS_LISTEN_ADDR", "0.0.0.0:8080"),
            db_path: env_or("ATLAS_DB_PATH", "data/atlas.db"),
            data_dir: env_or("ATLAS_DATA_DIR", "data"),
            countries_url: env_or(
                "ATLAS_COUNTRIES_URL",
                "https://restcountries.com/v2/all?fields=name,capital,region,population,flag,currencies",
            ),
            rates_url: env_or("ATLAS_RATES_URL", "https://open.er-api.com/v6/latest/USD"),
            source_timeout: Duration::from_secs(parse_secs(
                std::env::var("ATLAS_SOURCE_TIMEOUT_SECS").ok(),
                DEFAULT_SOURCE_TIMEOUT_SECS,
            )),
            refresh_interval_secs: parse_secs(
                std::env::var("ATLAS_REFRESH_INTERVAL_SECS").ok(),
                0,
            ),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_secs(value: Option<String>, default: u64) -> u64 {
    value
        .as_deref()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
