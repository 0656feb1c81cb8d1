//! User records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record from the store
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub provider: String,
}

/// Input for creating a user.
///
/// `email` stays optional here: absent and empty emails are rejected by
/// the store's constraints, not by the caller. An absent provider is
/// stored as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub email: Option<String>,
    pub provider: String,
}

impl NewUser {
    /// Build a user input with a known email.
    pub fn new(email: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            provider: provider.into(),
        }
    }
}
