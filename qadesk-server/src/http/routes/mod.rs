//! Route handlers organized by resource

pub mod health;
pub mod users;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Routes mounted under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(items::router())
}
