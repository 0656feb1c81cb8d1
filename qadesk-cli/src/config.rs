//! Startup configuration: `.env` loading and database connect options

use std::path::Path;

use anyhow::{Context, Result};
use qadesk_server::DbConfig;
use sqlx::postgres::PgConnectOptions;
use tracing::{debug, info};

/// Default env file, relative to the working directory
pub const ENV_FILE: &str = ".env";

/// Load variables from `path` into the process environment.
///
/// Variables already set are not overwritten. A missing or unreadable
/// file is logged and otherwise ignored. Returns whether anything loaded.
pub fn load_env_file(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!("Loaded environment from {}", path.display());
            true
        }
        Err(e) => {
            info!(
                "Failed to load {} ({}); using process environment only",
                path.display(),
                e
            );
            false
        }
    }
}

/// Resolve connect options.
///
/// An explicit database URL takes precedence over the `POSTGRES_*` set.
/// `DATABASE_URL` is re-read here because the env file loads after
/// argument parsing.
pub fn connect_options(database_url: Option<&str>) -> Result<PgConnectOptions> {
    let from_env = std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty());
    match database_url.or(from_env.as_deref()) {
        Some(url) => url
            .parse::<PgConnectOptions>()
            .context("Invalid database URL"),
        None => Ok(DbConfig::from_env()
            .context("Invalid POSTGRES_* configuration")?
            .connect_options()),
    }
}
