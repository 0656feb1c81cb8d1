//! Liveness endpoint reporting whether the store answers

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub version: &'static str,
}

/// GET /health - 200 when the store round-trips, 503 otherwise
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, store) = match state.store().ping().await {
        Ok(()) => (StatusCode::OK, "ok", "reachable"),
        Err(e) => {
            tracing::warn!(error = %e, "store ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable", "unreachable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            store,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::db::MemoryStore;
    use crate::http::routes::test_support::{app, send, BrokenStore, CountingStore};

    #[tokio::test]
    async fn reachable_store_is_ok() {
        let app = app(Arc::new(MemoryStore::new()));

        let (status, body) = send(&app, Method::GET, "/health", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "status": "ok", "store": "reachable", "version": env!("CARGO_PKG_VERSION") })
        );
    }

    #[tokio::test]
    async fn unreachable_store_is_503() {
        let app = app(Arc::new(BrokenStore));

        let (status, body) = send(&app, Method::GET, "/health", "").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
        assert_eq!(body["store"], "unreachable");
    }

    #[tokio::test]
    async fn each_check_pings_once() {
        let store = Arc::new(CountingStore::default());
        let app = app(store.clone());

        send(&app, Method::GET, "/health", "").await;
        send(&app, Method::GET, "/health", "").await;

        assert_eq!(store.calls(), 2);
    }
}
