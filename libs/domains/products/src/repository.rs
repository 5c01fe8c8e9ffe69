use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};

/// Repository trait for Product persistence
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products of a category, ordered by product id. Empty when none.
    async fn list_by_category_id(&self, category_id: i32) -> ProductResult<Vec<Product>>;

    /// Insert a product and return it with its assigned id
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    inner: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i32, Product>,
    last_id: i32,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_by_category_id(&self, category_id: i32) -> ProductResult<Vec<Product>> {
        let store = self.inner.read().await;
        Ok(store
            .products
            .values()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let mut store = self.inner.write().await;
        store.last_id += 1;
        let product = input.into_product(store.last_id);
        store.products.insert(product.product_id, product.clone());

        tracing::info!(product_id = product.product_id, "Created product");
        Ok(product)
    }
}
