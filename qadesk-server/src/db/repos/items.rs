//! Item repository
//!
//! - create: INSERT as given, no lookup of the owning user
//! - list_by_email: LEFT JOIN users so each item carries its owner (no N+1)

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::db::StoreError;
use crate::models::{EmailAddress, Item, NewItem, User};

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an item. A missing `user_email` fails on the NOT NULL constraint.
    pub async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO qas (question, answer, user_email)
            VALUES ($1, $2, $3)
            RETURNING id, question, answer, user_email
            "#,
        )
        .bind(&item.question)
        .bind(&item.answer)
        .bind(item.user_email.as_deref())
        .fetch_one(self.pool)
        .await?;

        Ok(Item {
            id: row.try_get("id")?,
            question: row.try_get("question")?,
            answer: row.try_get("answer")?,
            user_email: row.try_get("user_email")?,
            user: None,
        })
    }

    /// List every item owned by `email`, resolving the owner in the same query.
    ///
    /// No ORDER BY: callers get rows in whatever order PostgreSQL returns.
    pub async fn list_by_email(&self, email: &EmailAddress) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT
                q.id,
                q.question,
                q.answer,
                q.user_email,
                u.id AS owner_id,
                u.email AS owner_email,
                u.provider AS owner_provider
            FROM qas q
            LEFT JOIN users u ON u.email = q.user_email
            WHERE q.user_email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_all(self.pool)
        .await?;

        rows.iter().map(item_with_owner).collect()
    }
}

fn item_with_owner(row: &PgRow) -> Result<Item, StoreError> {
    let owner_id: Option<i64> = row.try_get("owner_id")?;
    let user = match owner_id {
        Some(id) => Some(User {
            id,
            email: row.try_get("owner_email")?,
            provider: row.try_get("owner_provider")?,
        }),
        None => None,
    };

    Ok(Item {
        id: row.try_get("id")?,
        question: row.try_get("question")?,
        answer: row.try_get("answer")?,
        user_email: row.try_get("user_email")?,
        user,
    })
}
