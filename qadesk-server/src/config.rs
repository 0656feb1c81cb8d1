//! Database configuration from the process environment
//!
//! Environment variables:
//!   POSTGRES_HOST       # server host
//!   POSTGRES_PORT       # server port (default: 5432)
//!   POSTGRES_USER       # role
//!   POSTGRES_PASSWORD   # password
//!   POSTGRES_DB         # database name
//!
//! Unset variables fall back to sqlx's libpq-style defaults. TLS is
//! disabled, matching a local sidecar database.

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("POSTGRES_PORT must be a port number, got '{0}'")]
    InvalidPort(String),
}

/// Connection settings assembled from `POSTGRES_*` variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

impl DbConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match get("POSTGRES_PORT") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            ),
            None => None,
        };

        Ok(Self {
            host: get("POSTGRES_HOST"),
            port,
            user: get("POSTGRES_USER"),
            password: get("POSTGRES_PASSWORD"),
            database: get("POSTGRES_DB"),
        })
    }

    /// Build sqlx connect options, leaving unset fields at their defaults.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new().ssl_mode(PgSslMode::Disable);
        if let Some(host) = &self.host {
            options = options.host(host);
        }
        if let Some(port) = self.port {
            options = options.port(port);
        }
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }
        options
    }
}
