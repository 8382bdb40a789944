// src/presentation/http/extractors.rs
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use bytes::Bytes;
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// JSON request body. Unlike `axum::Json` it ignores the `Content-Type`
/// header and rejects every malformed body with a plain 400, so the handler
/// never runs on a failed decode. Failures to read the body keep their own
/// status (413 for an oversized body).
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::warn!(error = %err, status = %err.status(), "failed to read request body");
            HttpError::with_status(err.status(), err.body_text())
        })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|err| {
            tracing::warn!(error = %err, "failed to decode request body");
            HttpError::bad_request(format!("bad request: {err}"))
        })
    }
}

/// The `{id}` path segment, rejected with the JSON error body when it
/// cannot be decoded.
#[derive(Debug, Clone)]
pub struct PathId(pub String);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| Self(id))
            .map_err(|err| {
                tracing::warn!(error = %err, "failed to decode path id");
                HttpError::bad_request(format!("bad request: {err}"))
            })
    }
}
