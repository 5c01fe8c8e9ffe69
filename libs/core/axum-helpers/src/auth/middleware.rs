use super::jwt::{JwtAuth, JwtClaims};
use crate::audit::{AuditEvent, AuditOutcome, extract_ip_from_headers, extract_user_agent};
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

/// Token from `Authorization: Bearer <token>`, falling back to the
/// `access_token` cookie.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    bearer.or_else(|| {
        headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|cookies| {
                cookies.split(';').find_map(|pair| {
                    let (name, value) = pair.trim().split_once('=')?;
                    (name == "access_token" && !value.is_empty()).then_some(value)
                })
            })
    })
}

fn authenticate(auth: &JwtAuth, headers: &HeaderMap) -> Result<JwtClaims, AppError> {
    let token = extract_token(headers).ok_or_else(|| {
        tracing::debug!("No JWT in Authorization header or cookie");
        AppError::Unauthorized("Missing authentication token".to_string())
    })?;

    auth.verify_token(token).map_err(|e| {
        tracing::debug!(error = %e, "JWT verification failed");
        AppError::Unauthorized("Invalid or expired token".to_string())
    })
}

/// Rejects requests without a valid token (401) or without the admin role
/// (403), and exposes [`JwtClaims`] to handlers through request extensions.
///
/// Runs before the handler, so a rejected request never reaches a store.
/// Non-admin callers get 403 and an `admin.access` audit event with
/// outcome `denied`.
pub async fn require_admin(
    State(auth): State<JwtAuth>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let headers = request.headers();
    let claims = authenticate(&auth, headers)?;

    if !claims.is_admin() {
        AuditEvent::new(
            Some(claims.sub.clone()),
            "admin.access",
            Some(format!("{} {}", request.method(), request.uri().path())),
            AuditOutcome::Denied,
        )
        .with_ip(extract_ip_from_headers(headers))
        .with_user_agent(extract_user_agent(headers))
        .with_details(serde_json::json!({ "roles": claims.roles }))
        .log();

        return Err(AppError::Forbidden("Admin role required".to_string()));
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
