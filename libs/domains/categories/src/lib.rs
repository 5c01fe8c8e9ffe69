//! Categories Domain
//!
//! The `/categories` resource of the EasyShop catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, admin guard, audit events
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← id/body consistency, existence and dependency checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← CategoryRepository + ProductRepository
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::{JwtAuth, JwtConfig};
//! use domain_categories::{handlers, CategoryService, InMemoryCategoryRepository};
//! use domain_products::InMemoryProductRepository;
//!
//! let service = CategoryService::new(
//!     InMemoryCategoryRepository::new(),
//!     InMemoryProductRepository::new(),
//! );
//! let auth = JwtAuth::new(&JwtConfig::new("a-secret-of-at-least-thirty-two-chars").unwrap());
//!
//! let app = axum::Router::new().nest("/categories", handlers::router(service, auth));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CategoryError, CategoryResult};
pub use handlers::ApiDoc;
pub use models::{Category, NewCategory};
pub use postgres::PgCategoryRepository;
pub use repository::{CategoryRepository, InMemoryCategoryRepository};
pub use service::CategoryService;
