use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{CategoryError, CategoryResult},
    models::{Category, NewCategory},
    repository::CategoryRepository,
};

pub struct PgCategoryRepository {
    db: DatabaseConnection,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> CategoryError {
    CategoryError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn get_all(&self) -> CategoryResult<Vec<Category>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CategoryId)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> CategoryResult<Option<Category>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, input: NewCategory) -> CategoryResult<Category> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await.map_err(db_error)?;

        tracing::info!(category_id = model.category_id, "Created category");
        Ok(model.into())
    }

    async fn update(&self, id: i32, category: Category) -> CategoryResult<()> {
        let active_model: entity::ActiveModel = Category {
            category_id: id,
            ..category
        }
        .into();

        active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => CategoryError::NotFound(id),
            other => db_error(other),
        })?;

        tracing::info!(category_id = id, "Updated category");
        Ok(())
    }

    async fn delete(&self, id: i32) -> CategoryResult<()> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected > 0 {
            tracing::info!(category_id = id, "Deleted category");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(category_id: i32, name: &str) -> entity::Model {
        entity::Model {
            category_id,
            name: name.to_string(),
            description: format!("{name} description"),
        }
    }

    #[tokio::test]
    async fn test_get_all_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Electronics"), model(2, "Fashion")]])
            .into_connection();
        let repo = PgCategoryRepository::new(db);

        let categories = repo.get_all().await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].category_id, 1);
        assert_eq!(categories[1].name, "Fashion");
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgCategoryRepository::new(db);

        assert!(repo.get_by_id(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(7, "Shoes")]])
            .into_connection();
        let repo = PgCategoryRepository::new(db);

        let created = repo.create(NewCategory::new("Shoes", "Footwear")).await.unwrap();
        assert_eq!(created.category_id, 7);
    }

    #[tokio::test]
    async fn test_delete_executes_statement() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = PgCategoryRepository::new(db);

        repo.delete(3).await.unwrap();
    }

    #[tokio::test]
    async fn test_database_failure_is_internal_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgCategoryRepository::new(db);

        let err = repo.get_all().await.unwrap_err();
        assert!(matches!(err, CategoryError::Internal(msg) if msg.contains("connection reset")));
    }
}
