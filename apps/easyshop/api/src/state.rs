//! Application state management.
//!
//! Holds what route construction and the readiness probe need:
//! configuration, the PostgreSQL pool and the JWT verifier.

use axum_helpers::JwtAuth;

/// Shared application state.
///
/// Cloned into routers and the `/ready` handler; every field is a cheap
/// handle clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
    /// Verifies bearer tokens for admin-only routes
    pub jwt_auth: JwtAuth,
}
