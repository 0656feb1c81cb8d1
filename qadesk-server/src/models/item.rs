//! Question/answer items

use serde::{Deserialize, Serialize};

use super::User;

/// Item record from the store.
///
/// `user` is only populated by queries that join `users`; a freshly
/// inserted item carries `None`, as does an item whose `user_email`
/// names no existing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub user_email: String,
    pub user: Option<User>,
}

/// Input for creating an item. Absent text fields are stored as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItem {
    pub question: String,
    pub answer: String,
    pub user_email: Option<String>,
}

impl NewItem {
    /// Build an item input owned by `user_email`.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        user_email: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            user_email: Some(user_email.into()),
        }
    }
}
