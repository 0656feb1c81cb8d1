//! qadesk CLI - question/answer HTTP backend
//!
//! Entry point for:
//! - Serving the HTTP API (`serve`)
//! - Creating the database schema (`migrate`)
//! - User administration outside the API (`user`)

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "qadesk",
    author,
    version,
    about = "HTTP backend for users and their question/answer items"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Environment file loaded before reading configuration
    #[arg(long, global = true, value_name = "PATH", default_value = config::ENV_FILE)]
    env_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create or update the database schema and exit
    Migrate(commands::migrate::MigrateArgs),
    /// Inspect or delete users (deleting cascades to their items)
    User(commands::user::UserArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_config = tracing_setup::TracingConfig { debug: cli.debug };
    if let Err(e) = tracing_setup::init(&tracing_config) {
        eprintln!("Failed to initialize tracing: {e}");
    }

    config::load_env_file(&cli.env_file);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::User(args) => commands::run_user(args).await?,
    }
    Ok(())
}
