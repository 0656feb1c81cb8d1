//! Database layer - store port, adapters and schema
//!
//! # Design Principles
//!
//! - Handlers depend on [`QaStore`] only; the adapter is injected at startup
//! - Rely on DB constraints, surface violations as errors - no check-then-insert
//! - Item lists resolve their user with a JOIN - no N+1
//! - One round-trip per operation, no application-level transactions

pub mod pool;
pub mod migrations;
pub mod repos;
pub mod postgres;
pub mod memory;

use async_trait::async_trait;

use crate::models::{EmailAddress, Item, NewItem, NewUser, User};

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgStore;
pub use repos::{ItemRepo, UserRepo};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("conflict: {0}")]
    Conflict(String),

    /// A NOT NULL or CHECK constraint rejected the write
    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        if let Some(db) = e.as_database_error() {
            match db.kind() {
                ErrorKind::UniqueViolation => return Self::Conflict(db.message().to_owned()),
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    return Self::Constraint(db.message().to_owned())
                }
                _ => {}
            }
        }
        Self::Database(e)
    }
}

/// Persistence port used by the HTTP handlers.
///
/// Implementations must enforce the same constraints as the PostgreSQL
/// schema: unique non-empty user emails, non-null item owners, and
/// cascade of a user's items on delete.
#[async_trait]
pub trait QaStore: Send + Sync {
    /// Insert a user; the store assigns `id`.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Insert an item as given. No check that `user_email` names a user.
    async fn create_item(&self, item: NewItem) -> Result<Item, StoreError>;

    /// All items owned by `email`, each with its user resolved.
    async fn list_items_by_email(&self, email: &EmailAddress) -> Result<Vec<Item>, StoreError>;

    async fn find_user(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Delete a user and, by cascade, its items. Returns false if no user matched.
    async fn delete_user(&self, email: &str) -> Result<bool, StoreError>;

    /// Round-trip to the store without touching any rows.
    async fn ping(&self) -> Result<(), StoreError>;
}
