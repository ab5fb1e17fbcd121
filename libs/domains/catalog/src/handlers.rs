use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{CreateItem, Item, ListParams, ListQuery, PageResult, SortOrder};
use crate::repository::CatalogRepository;
use crate::service::CatalogService;

/// OpenAPI documentation for the catalog endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item),
    components(
        schemas(Item, CreateItem, PageResult, SortOrder),
        responses(NotFoundResponse, BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Items", description = "Catalog search, paging and creation")
    )
)]
pub struct ApiDoc;

/// Create the catalog router (`/items`, `/items/{id}`)
pub fn router<R: CatalogRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item))
        .with_state(shared_service)
}

/// Search and page through the catalog
#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    params(ListParams),
    responses(
        (status = 200, description = "One page of matching items", body = PageResult),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(params): Query<ListParams>,
) -> CatalogResult<Json<PageResult>> {
    let page = service.list_items(ListQuery::from(params)).await?;
    Ok(Json(page))
}

/// Create an item; it is prepended to the catalog
#[utoipa::path(
    post,
    path = "/items",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> CatalogResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Item>> {
    let item = service.get_item(&id).await?;
    Ok(Json(item))
}
