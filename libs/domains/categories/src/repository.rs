use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, NewCategory};

/// Repository trait for Category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id
    async fn get_all(&self) -> CategoryResult<Vec<Category>>;

    async fn get_by_id(&self, id: i32) -> CategoryResult<Option<Category>>;

    /// Insert a category; the store assigns the id
    async fn create(&self, input: NewCategory) -> CategoryResult<Category>;

    /// Overwrite name and description of an existing category
    async fn update(&self, id: i32, category: Category) -> CategoryResult<()>;

    async fn delete(&self, id: i32) -> CategoryResult<()>;
}

/// In-memory implementation of CategoryRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCategoryRepository {
    inner: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    categories: BTreeMap<i32, Category>,
    last_id: i32,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_all(&self) -> CategoryResult<Vec<Category>> {
        let store = self.inner.read().await;
        Ok(store.categories.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> CategoryResult<Option<Category>> {
        let store = self.inner.read().await;
        Ok(store.categories.get(&id).cloned())
    }

    async fn create(&self, input: NewCategory) -> CategoryResult<Category> {
        let mut store = self.inner.write().await;
        store.last_id += 1;
        let category = input.into_category(store.last_id);
        store.categories.insert(category.category_id, category.clone());

        tracing::info!(category_id = category.category_id, "Created category");
        Ok(category)
    }

    async fn update(&self, id: i32, category: Category) -> CategoryResult<()> {
        let mut store = self.inner.write().await;
        let existing = store
            .categories
            .get_mut(&id)
            .ok_or(CategoryError::NotFound(id))?;

        existing.name = category.name;
        existing.description = category.description;

        tracing::info!(category_id = id, "Updated category");
        Ok(())
    }

    async fn delete(&self, id: i32) -> CategoryResult<()> {
        let mut store = self.inner.write().await;
        if store.categories.remove(&id).is_some() {
            tracing::info!(category_id = id, "Deleted category");
        }
        Ok(())
    }
}
