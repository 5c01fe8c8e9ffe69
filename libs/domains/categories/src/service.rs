use domain_products::{Product, ProductRepository};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, NewCategory};
use crate::repository::CategoryRepository;

pub const NULL_CATEGORY: &str = "Category can't be null";
pub const ID_MISMATCH: &str = "Category ID in path must match the Id in the body";
pub const HAS_PRODUCTS: &str = "Can't delete a category that still has products";

/// Guard checks around the category and product stores.
///
/// Holds no state of its own; every rule is re-evaluated against the stores
/// on each call.
pub struct CategoryService<C: CategoryRepository, P: ProductRepository> {
    categories: Arc<C>,
    products: Arc<P>,
}

impl<C: CategoryRepository, P: ProductRepository> Clone for CategoryService<C, P> {
    fn clone(&self) -> Self {
        Self {
            categories: Arc::clone(&self.categories),
            products: Arc::clone(&self.products),
        }
    }
}

impl<C: CategoryRepository, P: ProductRepository> CategoryService<C, P> {
    pub fn new(categories: C, products: P) -> Self {
        Self {
            categories: Arc::new(categories),
            products: Arc::new(products),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> CategoryResult<Vec<Category>> {
        self.categories.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_category(&self, id: i32) -> CategoryResult<Category> {
        self.categories
            .get_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Products of a category. The category itself need not exist.
    #[instrument(skip(self))]
    pub async fn list_products(&self, category_id: i32) -> CategoryResult<Vec<Product>> {
        Ok(self.products.list_by_category_id(category_id).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create_category(&self, input: Option<NewCategory>) -> CategoryResult<Category> {
        let input = input.ok_or_else(|| CategoryError::InvalidArgument(NULL_CATEGORY.to_string()))?;
        input
            .validate()
            .map_err(|e| CategoryError::InvalidArgument(e.to_string()))?;

        self.categories.create(input).await
    }

    /// Replaces name and description. The store is only called once the
    /// body id matches `id` and the category exists.
    #[instrument(skip(self, category))]
    pub async fn update_category(&self, id: i32, category: Option<Category>) -> CategoryResult<()> {
        let category =
            category.ok_or_else(|| CategoryError::InvalidArgument(NULL_CATEGORY.to_string()))?;

        if category.category_id != id {
            return Err(CategoryError::InvalidArgument(ID_MISMATCH.to_string()));
        }

        category
            .validate()
            .map_err(|e| CategoryError::InvalidArgument(e.to_string()))?;

        self.ensure_exists(id).await?;
        self.categories
            .update(id, category)
            .await
            .map_err(|e| missing_as_invalid(id, e))
    }

    /// Deletes a category that no product references.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: i32) -> CategoryResult<()> {
        self.ensure_exists(id).await?;

        let products = self.products.list_by_category_id(id).await?;
        if !products.is_empty() {
            tracing::info!(category_id = id, products = products.len(), "Delete blocked");
            return Err(CategoryError::InvalidArgument(HAS_PRODUCTS.to_string()));
        }

        self.categories
            .delete(id)
            .await
            .map_err(|e| missing_as_invalid(id, e))
    }

    async fn ensure_exists(&self, id: i32) -> CategoryResult<()> {
        match self.categories.get_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(does_not_exist(id)),
        }
    }
}

fn does_not_exist(id: i32) -> CategoryError {
    CategoryError::InvalidArgument(format!("Category {} does not exist", id))
}

/// A row removed between the existence check and the write is reported the
/// same way as one that was never there.
fn missing_as_invalid(id: i32, err: CategoryError) -> CategoryError {
    match err {
        CategoryError::NotFound(_) => does_not_exist(id),
        other => other,
    }
}
