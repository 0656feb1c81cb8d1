//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use qadesk_server::db::{create_pool, migrations};

use crate::config::connect_options;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides POSTGRES_* variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create or update the schema, then exit.
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let options = connect_options(args.database_url.as_deref())?;
    let pool = create_pool(options)
        .await
        .context("Failed to connect to database")?;

    migrations::run(&pool).await.context("Migration failed")?;
    pool.close().await;
    Ok(())
}
