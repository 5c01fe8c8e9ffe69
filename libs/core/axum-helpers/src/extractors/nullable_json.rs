//! JSON body extractor where an absent body counts as `null`.

use crate::errors::AppError;
use axum::{
    body::{Body, to_bytes},
    extract::{FromRequest, Json, Request},
};
use serde::de::DeserializeOwned;

/// Same ceiling as axum's `DefaultBodyLimit`.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Deserializes an optional JSON body.
///
/// A missing body, a whitespace-only body and a literal `null` all yield
/// `None`, so handlers see one "no value" case regardless of how the client
/// sent it. Non-empty bodies go through axum's [`Json`] extractor, which
/// still enforces the JSON content type.
///
/// ```ignore
/// async fn create(NullableJson(input): NullableJson<NewCategory>) -> Response {
///     match input {
///         Some(input) => { /* ... */ }
///         None => { /* reject */ }
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NullableJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for NullableJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, BODY_LIMIT)
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(None));
        }

        let Json(value) =
            Json::<Option<T>>::from_request(Request::from_parts(parts, Body::from(bytes)), state)
                .await?;
        Ok(Self(value))
    }
}
