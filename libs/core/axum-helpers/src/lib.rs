//! # Axum Helpers
//!
//! Shared building blocks for EasyShop HTTP services.
//!
//! ## Modules
//!
//! - **[`auth`]**: JWT verification and the admin guard middleware
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//! - **[`http`]**: CORS policy and security headers
//! - **[`errors`]**: `AppError` and the uniform JSON error body
//! - **[`extractors`]**: integer path id and nullable JSON body extractors
//! - **[`audit`]**: audit trail on the `audit` tracing target

pub mod audit;
pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{ACCESS_TOKEN_TTL, ADMIN_ROLE, JwtAuth, JwtClaims, JwtConfig, require_admin};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{CorsConfig, create_cors_layer, create_permissive_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, NullableJson};

pub use audit::{AuditEvent, AuditOutcome, extract_ip_from_headers, extract_user_agent};
