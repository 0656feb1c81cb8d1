//! Custom Axum extractors

use std::fmt;

use axum::body::{Body, Bytes};
use axum::extract::rejection::{BytesRejection, JsonRejection};
use axum::extract::{FromRequest, Query, Request};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::{ApiError, ErrorKey};

/// Lookup parameters for `GET /api/items`
#[derive(Debug, Default, Deserialize)]
pub struct ListItemsRequest {
    pub email: Option<String>,
}

/// Extract list parameters from the query string and the JSON body.
///
/// The body is the primary source. `?email=` is read first and kept unless
/// a non-empty body supplies its own `email`. The body is parsed as JSON
/// whatever its content type, since clients sending a GET body rarely set
/// one.
pub struct ListItemsInput(pub ListItemsRequest);

const INVALID_REQUEST: &str = "Invalid request";

impl<S> FromRequest<S> for ListItemsInput
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(mut input) = Query::<ListItemsRequest>::try_from_uri(req.uri())
            .map_err(|e| ApiError::invalid_input(ErrorKey::Error, INVALID_REQUEST, e))?;

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_input(ErrorKey::Error, INVALID_REQUEST, e))?;

        if !body.is_empty() {
            let from_body: ListItemsRequest = serde_json::from_slice(&body)
                .map_err(|e| ApiError::invalid_input(ErrorKey::Error, INVALID_REQUEST, e))?;
            if from_body.email.is_some() {
                input.email = from_body.email;
            }
        }

        Ok(Self(input))
    }
}

/// JSON body that binds to `T::default()` when the body is empty.
///
/// A non-empty body goes through [`Json`], so the content type and syntax
/// are still checked.
pub struct JsonOrDefault<T>(pub T);

/// Rejection for [`JsonOrDefault`]
#[derive(Debug)]
pub enum BodyRejection {
    Bytes(BytesRejection),
    Json(JsonRejection),
}

impl fmt::Display for BodyRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(e) => write!(f, "{}", e.body_text()),
            Self::Json(e) => write!(f, "{}", e.body_text()),
        }
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Bytes(e) => e.into_response(),
            Self::Json(e) => e.into_response(),
        }
    }
}

impl<S, T> FromRequest<S> for JsonOrDefault<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let body = Bytes::from_request(req, state)
            .await
            .map_err(BodyRejection::Bytes)?;

        if body.is_empty() {
            return Ok(Self(T::default()));
        }

        let mut rebuilt = Request::new(Body::from(body));
        *rebuilt.headers_mut() = headers;
        let Json(value) = Json::<T>::from_request(rebuilt, state)
            .await
            .map_err(BodyRejection::Json)?;
        Ok(Self(value))
    }
}
