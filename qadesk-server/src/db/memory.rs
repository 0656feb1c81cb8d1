//! In-process [`QaStore`]
//!
//! Mirrors the PostgreSQL schema's constraints so handlers behave the same
//! against either adapter. Items keep insertion order.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{QaStore, StoreError};
use crate::models::{EmailAddress, Item, NewItem, NewUser, User};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    items: Vec<Item>,
    next_user_id: i64,
    next_item_id: i64,
}

/// Store adapter holding all rows in memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    /// Number of stored items.
    pub async fn item_count(&self) -> usize {
        self.tables.read().await.items.len()
    }
}

#[async_trait]
impl QaStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let email = match user.email {
            Some(email) if !email.is_empty() => email,
            Some(_) => return Err(StoreError::Constraint("users.email must not be empty".into())),
            None => return Err(StoreError::Constraint("users.email must not be null".into())),
        };

        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == email) {
            return Err(StoreError::Conflict(format!("users.email '{}' already exists", email)));
        }

        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            email,
            provider: user.provider,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn create_item(&self, item: NewItem) -> Result<Item, StoreError> {
        let user_email = item
            .user_email
            .ok_or_else(|| StoreError::Constraint("qas.user_email must not be null".into()))?;

        let mut tables = self.tables.write().await;
        tables.next_item_id += 1;
        let item = Item {
            id: tables.next_item_id,
            question: item.question,
            answer: item.answer,
            user_email,
            user: None,
        };
        tables.items.push(item.clone());
        Ok(item)
    }

    async fn list_items_by_email(&self, email: &EmailAddress) -> Result<Vec<Item>, StoreError> {
        let tables = self.tables.read().await;
        let owner = tables.users.iter().find(|u| u.email == email.as_str());

        Ok(tables
            .items
            .iter()
            .filter(|i| i.user_email == email.as_str())
            .map(|i| Item {
                user: owner.cloned(),
                ..i.clone()
            })
            .collect())
    }

    async fn find_user(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn delete_user(&self, email: &str) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.users.len();
        tables.users.retain(|u| u.email != email);
        if tables.users.len() == before {
            return Ok(false);
        }

        tables.items.retain(|i| i.user_email != email);
        Ok(true)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
