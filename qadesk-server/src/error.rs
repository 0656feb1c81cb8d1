//! Error types for starting and running the server

use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

/// Failures on the startup and serve path. All of them are fatal.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
