use axum::Router;
use domain_categories::{CategoryService, PgCategoryRepository, handlers};
use domain_products::PgProductRepository;

pub fn router(state: &crate::state::AppState) -> Router {
    let service = CategoryService::new(
        PgCategoryRepository::new(state.db.clone()),
        PgProductRepository::new(state.db.clone()),
    );
    handlers::router(service, state.jwt_auth.clone())
}
