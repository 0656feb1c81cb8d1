//! User administration
//!
//! Deletion is deliberately absent from the HTTP API; operators remove
//! users here and the store cascades to their items.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use qadesk_server::db::{create_pool, PgStore, QaStore};

use crate::config::connect_options;

#[derive(Parser, Debug)]
pub struct UserArgs {
    /// Database URL (overrides POSTGRES_* variables)
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Show a user by email
    Show {
        /// Email of the user
        email: String,
    },
    /// Delete a user and all of their items
    Delete {
        /// Email of the user to delete
        email: String,
    },
}

pub async fn run_user(args: UserArgs) -> Result<()> {
    let options = connect_options(args.database_url.as_deref())?;
    let pool = create_pool(options)
        .await
        .context("Failed to connect to database")?;
    let store = PgStore::new(pool);

    match args.command {
        UserCommand::Show { email } => {
            match store.find_user(&email).await.context("Lookup failed")? {
                Some(user) => {
                    let provider = match user.provider.as_str() {
                        "" => "-",
                        p => p,
                    };
                    println!("{}\t{}\t{}", user.id, user.email, provider);
                }
                None => println!("No user with email {}", email),
            }
        }
        UserCommand::Delete { email } => {
            if store.delete_user(&email).await.context("Delete failed")? {
                tracing::info!(%email, "deleted user and cascaded items");
                println!("Deleted user {} and their items", email);
            } else {
                println!("No user with email {}", email);
            }
        }
    }

    store.pool().close().await;
    Ok(())
}
