//! Custom extractors for Axum handlers.

pub mod id_path;
pub mod nullable_json;

pub use id_path::IdPath;
pub use nullable_json::NullableJson;
