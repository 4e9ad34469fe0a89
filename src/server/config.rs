use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LEADERBOARD_MAX_SLICE: u64 = 100;
const DEFAULT_LEADERBOARD_REBUILD_CRON: &str = "0 0 * * * *";
const DEFAULT_TEAM_SIZE: u32 = 4;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_address: String,

    /// Upper bound applied to every leaderboard slice request.
    pub leaderboard_max_slice: u64,
    /// JSON file replacing the built-in leaderboard definitions.
    pub leaderboards_path: Option<PathBuf>,
    pub leaderboard_rebuild_cron: String,

    /// Team capacity for events created without an explicit size.
    pub default_team_size: u32,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: required("APP_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            leaderboard_max_slice: parsed("LEADERBOARD_MAX_SLICE", DEFAULT_LEADERBOARD_MAX_SLICE)?,
            leaderboards_path: std::env::var("LEADERBOARDS_PATH").ok().map(PathBuf::from),
            leaderboard_rebuild_cron: std::env::var("LEADERBOARD_REBUILD_CRON")
                .unwrap_or_else(|_| DEFAULT_LEADERBOARD_REBUILD_CRON.to_string()),
            default_team_size: parsed("DEFAULT_TEAM_SIZE", DEFAULT_TEAM_SIZE)?,
            request_timeout_secs: parsed("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional variable, falling back to `default` when unset.
fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
