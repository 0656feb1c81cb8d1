//! Question/answer item endpoints
//!
//! ```text
//! POST /api/items {"question":"...","answer":"...","user_email":"a@x.com"}
//! GET  /api/items {"email":"a@x.com"}
//! ```

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;

use crate::http::error::{ApiError, ErrorKey};
use crate::http::extractors::{BodyRejection, JsonOrDefault, ListItemsInput};
use crate::models::{EmailAddress, Item, NewItem};
use crate::state::AppState;

const KEY: ErrorKey = ErrorKey::Error;

/// Create item request. Extra fields such as `id` or `user` are ignored,
/// and an empty body binds every field as absent.
#[derive(Debug, Default, Deserialize)]
pub struct CreateItemRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub user_email: Option<String>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            question: req.question.unwrap_or_default(),
            answer: req.answer.unwrap_or_default(),
            user_email: req.user_email,
        }
    }
}

/// POST /api/items - create an item
///
/// Responds 200, not 201. The owner is neither looked up nor resolved.
async fn create_item(
    State(state): State<AppState>,
    payload: Result<JsonOrDefault<CreateItemRequest>, BodyRejection>,
) -> Result<Json<Item>, ApiError> {
    let JsonOrDefault(req) =
        payload.map_err(|e| ApiError::invalid_input(KEY, "Invalid input", e))?;

    let item = state
        .store()
        .create_item(req.into())
        .await
        .map_err(|e| ApiError::store(KEY, "Failed to create item", e))?;

    tracing::debug!(item_id = item.id, "created item");
    Ok(Json(item))
}

/// GET /api/items - list a user's items with the user resolved
async fn list_items(
    State(state): State<AppState>,
    ListItemsInput(req): ListItemsInput,
) -> Result<Json<Vec<Item>>, ApiError> {
    let email = EmailAddress::new(req.email.unwrap_or_default())
        .map_err(|e| ApiError::validation(KEY, "Email is required", e))?;

    let items = state
        .store()
        .list_items_by_email(&email)
        .await
        .map_err(|e| ApiError::store(KEY, "Failed to fetch items for the specified user", e))?;

    tracing::debug!(count = items.len(), "listed items");
    Ok(Json(items))
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new().route("/items", get(list_items).post(create_item))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    use crate::db::MemoryStore;
    use crate::http::routes::test_support::{app, send, BrokenStore, CountingStore};

    #[tokio::test]
    async fn create_item_returns_200_with_id_and_null_user() {
        let app = app(Arc::new(MemoryStore::new()));
        send(&app, Method::POST, "/api/users", r#"{"email":"a@x.com"}"#).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/items",
            r#"{"question":"why?","answer":"because","user_email":"a@x.com"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["id"].as_i64().unwrap() > 0);
        assert_eq!(body["question"], "why?");
        assert_eq!(body["answer"], "because");
        assert_eq!(body["user_email"], "a@x.com");
        assert_eq!(body["user"], Value::Null);
    }

    #[tokio::test]
    async fn create_item_ignores_client_id_and_user() {
        let app = app(Arc::new(MemoryStore::new()));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/items",
            r#"{"id":999,"user":{"id":5},"question":"q","answer":"a","user_email":"a@x.com"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        assert_eq!(body["user"], Value::Null);
    }

    #[tokio::test]
    async fn create_item_does_not_require_existing_user() {
        let app = app(Arc::new(MemoryStore::new()));

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/items",
            r#"{"question":"q","answer":"a","user_email":"ghost@x.com"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn create_item_without_owner_is_500() {
        let app = app(Arc::new(MemoryStore::new()));

        let (status, json) =
            send(&app, Method::POST, "/api/items", r#"{"question":"q","answer":"a"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({ "error": "Failed to create item" }));
    }

    #[tokio::test]
    async fn create_item_malformed_body_is_400() {
        let app = app(Arc::new(MemoryStore::new()));

        let (status, json) = send(&app, Method::POST, "/api/items", "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "error": "Invalid input" }));
    }

    #[tokio::test]
    async fn create_item_empty_body_fails_in_store() {
        let store = Arc::new(MemoryStore::new());
        let app = app(store.clone());

        let (status, json) = send(&app, Method::POST, "/api/items", "").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({ "error": "Failed to create item" }));
        assert_eq!(store.item_count().await, 0);
    }

    #[tokio::test]
    async fn create_item_absent_text_is_empty_string() {
        let app = app(Arc::new(MemoryStore::new()));

        let (status, body) =
            send(&app, Method::POST, "/api/items", r#"{"user_email":"a@x.com"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"], "");
        assert_eq!(body["answer"], "");
    }

    #[tokio::test]
    async fn list_returns_only_matching_items_with_user() {
        let app = app(Arc::new(MemoryStore::new()));
        let (_, user) = send(
            &app,
            Method::POST,
            "/api/users",
            r#"{"email":"a@x.com","provider":"google"}"#,
        )
        .await;
        for body in [
            r#"{"question":"q1","answer":"a1","user_email":"a@x.com"}"#,
            r#"{"question":"q2","answer":"a2","user_email":"b@x.com"}"#,
            r#"{"question":"q3","answer":"a3","user_email":"a@x.com"}"#,
        ] {
            send(&app, Method::POST, "/api/items", body).await;
        }

        let (status, body) =
            send(&app, Method::GET, "/api/items", r#"{"email":"a@x.com"}"#).await;

        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            assert_eq!(item["user_email"], "a@x.com");
            assert_eq!(item["user"], user);
        }
    }

    #[tokio::test]
    async fn list_round_trips_submitted_fields() {
        let app = app(Arc::new(MemoryStore::new()));
        send(&app, Method::POST, "/api/users", r#"{"email":"a@x.com"}"#).await;
        let (_, created) = send(
            &app,
            Method::POST,
            "/api/items",
            r#"{"question":"2+2?","answer":"4","user_email":"a@x.com"}"#,
        )
        .await;

        let (_, body) = send(&app, Method::GET, "/api/items", r#"{"email":"a@x.com"}"#).await;

        let listed = &body[0];
        assert_eq!(listed["id"], created["id"]);
        assert_eq!(listed["question"], "2+2?");
        assert_eq!(listed["answer"], "4");
        assert_eq!(listed["user_email"], "a@x.com");
    }

    #[tokio::test]
    async fn list_unknown_email_is_empty_200() {
        let app = app(Arc::new(MemoryStore::new()));

        let (status, body) =
            send(&app, Method::GET, "/api/items", r#"{"email":"none@x.com"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn list_empty_email_is_400_without_store_access() {
        let store = Arc::new(CountingStore::default());
        let app = app(store.clone());

        let (status, json) = send(&app, Method::GET, "/api/items", r#"{"email":""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "error": "Email is required" }));

        let (status, _) = send(&app, Method::GET, "/api/items", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn list_malformed_body_is_400() {
        let app = app(Arc::new(MemoryStore::new()));

        let (status, json) = send(&app, Method::GET, "/api/items", r#"["a@x.com"]"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "error": "Invalid request" }));
    }

    #[tokio::test]
    async fn list_accepts_query_string() {
        let app = app(Arc::new(MemoryStore::new()));
        send(
            &app,
            Method::POST,
            "/api/items",
            r#"{"question":"q","answer":"a","user_email":"a@x.com"}"#,
        )
        .await;

        let (status, body) = send(&app, Method::GET, "/api/items?email=a%40x.com", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["user"], Value::Null);
    }

    #[tokio::test]
    async fn store_failure_is_generic_500() {
        let app = app(Arc::new(BrokenStore));

        let (status, json) = send(&app, Method::GET, "/api/items", r#"{"email":"a@x.com"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json,
            json!({ "error": "Failed to fetch items for the specified user" })
        );
    }
}
