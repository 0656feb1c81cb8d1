//! HTTP server command
//!
//! Connects to PostgreSQL (or an in-memory store), migrates the schema and
//! serves the API until Ctrl+C/SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use qadesk_server::db::{pool::DEFAULT_MAX_CONNECTIONS, MemoryStore, QaStore};
use qadesk_server::{connect_postgres, run_server, AppState, ServerConfig};

use crate::config::connect_options;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Database URL (overrides POSTGRES_* variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Serve from an in-memory store instead of PostgreSQL (data is lost on exit; ignores the database URL)
    #[arg(long)]
    pub memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn QaStore> = if args.memory {
        tracing::warn!("Using in-memory store; data will not persist");
        Arc::new(MemoryStore::new())
    } else {
        let options = connect_options(args.database_url.as_deref())?;
        let store = connect_postgres(options, args.max_connections)
            .await
            .context("Failed to connect to database")?;
        Arc::new(store)
    };

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    run_server(AppState::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}
