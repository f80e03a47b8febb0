//! Request extractors shared by both services.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{
    AppError, INVALID_PATH_MESSAGE, INVALID_PAYLOAD_MESSAGE, INVALID_QUERY_MESSAGE,
};

/// JSON request body.
///
/// Unlike [`axum::Json`], the `Content-Type` header is not required and every
/// failure (unreadable body, malformed JSON, wrong shape) is rejected with a
/// plain `400 Invalid request payload`.
#[derive(Debug)]
pub struct JsonPayload<T>(pub T);

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to buffer request body");
            AppError::bad_request(INVALID_PAYLOAD_MESSAGE)
        })?;

        serde_json::from_slice(&body).map(Self).map_err(|e| {
            tracing::debug!(error = %e, "Failed to decode request body");
            AppError::bad_request(INVALID_PAYLOAD_MESSAGE)
        })
    }
}

/// Query string parameters.
///
/// A repeated key keeps its first value instead of failing the request, and
/// any rejection becomes a plain `400 Invalid query parameters`.
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Failed to parse query string");
                AppError::bad_request(INVALID_QUERY_MESSAGE)
            })?;

        let mut params = Map::new();
        for (key, value) in pairs {
            params.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(params))
            .map(Self)
            .map_err(|e| {
                tracing::debug!(error = %e, "Failed to decode query parameters");
                AppError::bad_request(INVALID_QUERY_MESSAGE)
            })
    }
}

/// Path parameters; rejections become a plain `400 Invalid path parameter`.
#[derive(Debug)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|e| {
                tracing::debug!(error = %e, "Failed to decode path parameter");
                AppError::bad_request(INVALID_PATH_MESSAGE)
            })
    }
}
