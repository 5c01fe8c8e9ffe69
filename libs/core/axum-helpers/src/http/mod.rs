//! HTTP-level middleware: CORS policy and security headers.

pub mod cors;
pub mod security;

pub use cors::{CorsConfig, create_cors_layer, create_permissive_cors_layer};
pub use security::security_headers;
