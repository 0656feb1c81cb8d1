//! API error types with IntoResponse
//!
//! Every failure renders as a one-field JSON object. The field name varies
//! per endpoint (`message` for users, `error` for items), so each error
//! carries its [`ErrorKey`].

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};

use crate::db::StoreError;
use crate::models::ValidationError;

/// JSON field name holding the error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKey {
    Message,
    Error,
}

impl ErrorKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Error => "error",
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body or query could not be decoded (400)
    InvalidInput {
        key: ErrorKey,
        message: &'static str,
        detail: String,
    },

    /// Decoded input failed validation (400)
    Validation {
        key: ErrorKey,
        message: &'static str,
        source: ValidationError,
    },

    /// Store rejected or failed the operation (500, logged)
    Store {
        key: ErrorKey,
        message: &'static str,
        source: StoreError,
    },
}

impl ApiError {
    pub fn invalid_input(key: ErrorKey, message: &'static str, detail: impl fmt::Display) -> Self {
        Self::InvalidInput {
            key,
            message,
            detail: detail.to_string(),
        }
    }

    pub fn validation(key: ErrorKey, message: &'static str, source: ValidationError) -> Self {
        Self::Validation { key, message, source }
    }

    pub fn store(key: ErrorKey, message: &'static str, source: StoreError) -> Self {
        Self::Store { key, message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (key, message) = match &self {
            Self::InvalidInput { key, message, detail } => {
                tracing::debug!(%detail, "rejected request input");
                (*key, *message)
            }
            Self::Validation { key, message, source } => {
                tracing::debug!(error = %source, "request failed validation");
                (*key, *message)
            }
            Self::Store { key, message, source } => {
                // Log the actual error, return generic message
                tracing::error!(error = %source, "store operation failed");
                (*key, *message)
            }
        };

        let mut body = Map::new();
        body.insert(key.as_str().to_owned(), Value::from(message));
        (status, Json(Value::Object(body))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_input_is_400() {
        let err = ApiError::invalid_input(ErrorKey::Message, "Invalid request", "expected a string");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "message": "Invalid request" }));
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::validation(
            ErrorKey::Error,
            "Email is required",
            ValidationError::Empty { field: "email" },
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Email is required" }));
    }

    #[tokio::test]
    async fn store_error_is_500_and_hides_cause() {
        let err = ApiError::store(
            ErrorKey::Error,
            "Failed to create item",
            StoreError::Constraint("qas.user_email must not be null".into()),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "Failed to create item" }));
    }
}
