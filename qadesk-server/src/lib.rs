//! qadesk-server: users and question/answer items over HTTP
//!
//! Three endpoints create users, create items and list a user's items.
//! Persistence sits behind the [`db::QaStore`] port, backed by PostgreSQL
//! in production and by [`db::MemoryStore`] in tests.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;

pub use config::{ConfigError, DbConfig};
pub use error::{Result, ServerError};
pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;

use sqlx::postgres::PgConnectOptions;

use db::{create_pool_with_options, migrations, PgStore};

/// Connect to PostgreSQL and bring the schema up to date.
///
/// Fails fast: an unreachable database or a failed migration is returned
/// to the caller, which is expected to exit.
pub async fn connect_postgres(options: PgConnectOptions, max_connections: u32) -> Result<PgStore> {
    let pool = create_pool_with_options(options, max_connections).await?;
    tracing::info!(max_connections, "Connected to PostgreSQL");

    migrations::run(&pool).await?;
    Ok(PgStore::new(pool))
}
