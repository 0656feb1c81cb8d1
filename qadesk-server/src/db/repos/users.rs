//! User repository
//!
//! - create: plain INSERT, uniqueness left to the `users.email` constraint
//! - delete: items go with the user via the cascade trigger

use sqlx::PgPool;

use crate::db::StoreError;
use crate::models::{NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user, returning the stored row with its generated id.
    pub async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (email, provider)
            VALUES ($1, $2)
            RETURNING id, email, provider
            "#,
        )
        .bind(user.email.as_deref())
        .bind(&user.provider)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Get a single user by email.
    pub async fn get(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user: Option<User> =
            sqlx::query_as("SELECT id, email, provider FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(self.pool)
                .await?;

        Ok(user)
    }

    /// Delete a user by email. Returns whether a row was removed.
    pub async fn delete(&self, email: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(email)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
