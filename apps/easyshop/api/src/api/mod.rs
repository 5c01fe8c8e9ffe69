use axum::Router;

pub mod categories;
pub mod health;

/// Resource routes, mounted at the root (`/categories`).
///
/// Every sub-router already has its state applied, so the result is a plain
/// `Router` ready for `create_router`.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/categories", categories::router(state))
}

/// `/ready` with the database check. Merged next to the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
