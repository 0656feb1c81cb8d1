//! PostgreSQL-backed [`QaStore`]

use async_trait::async_trait;
use sqlx::PgPool;

use super::{ItemRepo, QaStore, StoreError, UserRepo};
use crate::models::{EmailAddress, Item, NewItem, NewUser, User};

/// Store adapter over a shared connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QaStore for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        UserRepo::new(&self.pool).create(user).await
    }

    async fn create_item(&self, item: NewItem) -> Result<Item, StoreError> {
        ItemRepo::new(&self.pool).create(item).await
    }

    async fn list_items_by_email(&self, email: &EmailAddress) -> Result<Vec<Item>, StoreError> {
        ItemRepo::new(&self.pool).list_by_email(email).await
    }

    async fn find_user(&self, email: &str) -> Result<Option<User>, StoreError> {
        UserRepo::new(&self.pool).get(email).await
    }

    async fn delete_user(&self, email: &str) -> Result<bool, StoreError> {
        UserRepo::new(&self.pool).delete(email).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
