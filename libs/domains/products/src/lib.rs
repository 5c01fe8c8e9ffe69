//! Products Domain
//!
//! Product storage used by the catalog. Products are read through their
//! owning category; there is no standalone product HTTP surface here.
//!
//! ```rust,no_run
//! use domain_products::{InMemoryProductRepository, NewProduct, ProductRepository};
//!
//! # async fn demo() -> domain_products::ProductResult<()> {
//! let repo = InMemoryProductRepository::new();
//! repo.create(NewProduct::new(1, "Headphones", 7900)).await?;
//! let products = repo.list_by_category_id(1).await?;
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;

pub use error::{ProductError, ProductResult};
pub use models::{NewProduct, Product};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};

#[cfg(any(test, feature = "mock"))]
pub use repository::MockProductRepository;
