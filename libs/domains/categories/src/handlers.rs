use axum::{
    Extension, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_helpers::{
    AppError, AuditEvent, AuditOutcome, IdPath, JwtAuth, JwtClaims, NullableJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestInvalidArgumentResponse, ForbiddenResponse,
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    extract_ip_from_headers, extract_user_agent, require_admin,
};
use domain_products::{Product, ProductRepository};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::CategoryResult;
use crate::models::{Category, NewCategory};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

/// OpenAPI documentation for Categories API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories,
        get_category,
        list_category_products,
        create_category,
        update_category,
        delete_category,
    ),
    components(
        schemas(Category, NewCategory, Product),
        responses(
            NotFoundResponse,
            BadRequestIdResponse,
            BadRequestInvalidArgumentResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Product category endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<C, P> = Arc<CategoryService<C, P>>;

/// Category routes, meant to be nested under `/categories`.
///
/// Reads are public. Create, update and delete sit behind [`require_admin`],
/// which rejects the request before any handler or store runs.
pub fn router<C, P>(service: CategoryService<C, P>, auth: JwtAuth) -> Router
where
    C: CategoryRepository + 'static,
    P: ProductRepository + 'static,
{
    let shared_service = Arc::new(service);

    let admin = Router::new()
        .route("/", post(create_category::<C, P>))
        .route(
            "/{id}",
            put(update_category::<C, P>).delete(delete_category::<C, P>),
        )
        .route_layer(from_fn_with_state(auth, require_admin));

    Router::new()
        .route("/", get(list_categories::<C, P>))
        .route("/{id}", get(get_category::<C, P>))
        .route("/{id}/products", get(list_category_products::<C, P>))
        .merge(admin)
        .with_state(shared_service)
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All categories ordered by id", body = Vec<Category>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<C: CategoryRepository, P: ProductRepository>(
    State(service): State<SharedService<C, P>>,
) -> CategoryResult<Json<Vec<Category>>> {
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_category<C: CategoryRepository, P: ProductRepository>(
    State(service): State<SharedService<C, P>>,
    IdPath(id): IdPath,
) -> CategoryResult<Json<Category>> {
    let category = service.get_category(id).await?;
    Ok(Json(category))
}

/// List the products of a category
#[utoipa::path(
    get,
    path = "/{id}/products",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Products in the category, possibly empty", body = Vec<Product>),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_category_products<C: CategoryRepository, P: ProductRepository>(
    State(service): State<SharedService<C, P>>,
    IdPath(id): IdPath,
) -> CategoryResult<Json<Vec<Product>>> {
    let products = service.list_products(id).await?;
    Ok(Json(products))
}

/// Create a category (admin only)
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = NewCategory,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, response = BadRequestInvalidArgumentResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_category<C: CategoryRepository, P: ProductRepository>(
    State(service): State<SharedService<C, P>>,
    Extension(claims): Extension<JwtClaims>,
    headers: HeaderMap,
    NullableJson(input): NullableJson<NewCategory>,
) -> Result<impl IntoResponse, AppError> {
    let category = service.create_category(input).await?;

    AuditEvent::new(
        Some(claims.sub),
        "category.create",
        Some(format!("category:{}", category.category_id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .with_details(json!({ "name": category.name }))
    .log();

    Ok((StatusCode::CREATED, Json(category)))
}

/// Replace a category's name and description (admin only)
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Category ID, must equal `categoryId` in the body")
    ),
    request_body = Category,
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Category updated"),
        (status = 400, response = BadRequestInvalidArgumentResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_category<C: CategoryRepository, P: ProductRepository>(
    State(service): State<SharedService<C, P>>,
    Extension(claims): Extension<JwtClaims>,
    headers: HeaderMap,
    IdPath(id): IdPath,
    NullableJson(category): NullableJson<Category>,
) -> Result<StatusCode, AppError> {
    service.update_category(id, category).await?;

    AuditEvent::new(
        Some(claims.sub),
        "category.update",
        Some(format!("category:{}", id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .log();

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a category without products (admin only)
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, response = BadRequestInvalidArgumentResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_category<C: CategoryRepository, P: ProductRepository>(
    State(service): State<SharedService<C, P>>,
    Extension(claims): Extension<JwtClaims>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> CategoryResult<StatusCode> {
    service.delete_category(id).await?;

    AuditEvent::new(
        Some(claims.sub),
        "category.delete",
        Some(format!("category:{}", id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .log();

    Ok(StatusCode::NO_CONTENT)
}
