//! User endpoints

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;

use crate::http::error::{ApiError, ErrorKey};
use crate::http::extractors::{BodyRejection, JsonOrDefault};
use crate::models::{NewUser, User};
use crate::state::AppState;

const KEY: ErrorKey = ErrorKey::Message;

/// Create user request. An empty body binds every field as absent.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub provider: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            email: req.email,
            provider: req.provider.unwrap_or_default(),
        }
    }
}

/// POST /api/users - create a user
///
/// Email presence and uniqueness are enforced by the store; any store
/// failure is reported as a generic 500.
async fn create_user(
    State(state): State<AppState>,
    payload: Result<JsonOrDefault<CreateUserRequest>, BodyRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let JsonOrDefault(req) =
        payload.map_err(|e| ApiError::invalid_input(KEY, "Invalid request", e))?;

    let user = state
        .store()
        .create_user(req.into())
        .await
        .map_err(|e| ApiError::store(KEY, "Failed to create user", e))?;

    tracing::debug!(user_id = user.id, "created user");
    Ok((StatusCode::CREATED, Json(user)))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new().route("/users", post(create_user))
}
