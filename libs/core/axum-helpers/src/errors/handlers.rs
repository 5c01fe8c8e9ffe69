use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// Router fallback: JSON 404 instead of an empty body.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorCode::NotFound,
        "The requested resource was not found",
    )
}
