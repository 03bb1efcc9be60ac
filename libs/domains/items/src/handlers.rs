use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    JsonBody, LenientPath, LenientQuery,
    errors::responses::{
        BadRequestJsonResponse, InternalServerErrorResponse, NotFoundResponse,
        UnprocessableJsonResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemPage, ListQuery, StatsSnapshot};
use crate::pagination::PaginationMeta;
use crate::repository::ItemStore;
use crate::service::ItemService;
use crate::stats::StatsAggregator;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item),
    components(
        schemas(Item, CreateItem, ItemPage, PaginationMeta),
        responses(
            NotFoundResponse,
            BadRequestJsonResponse,
            UnprocessableJsonResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Item catalog backed by a JSON file")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for Stats API
#[derive(OpenApi)]
#[openapi(
    paths(get_stats),
    components(
        schemas(StatsSnapshot),
        responses(InternalServerErrorResponse)
    ),
    tags(
        (name = "Stats", description = "Aggregate figures over the item catalog")
    )
)]
pub struct StatsApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<S: ItemStore + 'static>(service: ItemService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item))
        .with_state(shared_service)
}

/// Create the stats router
pub fn stats_router<S: ItemStore + 'static>(aggregator: Arc<StatsAggregator<S>>) -> Router {
    Router::new()
        .route("/", get(get_stats))
        .with_state(aggregator)
}

/// List items, optionally filtered by name, one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of matching items", body = ItemPage),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<S: ItemStore>(
    State(service): State<Arc<ItemService<S>>>,
    LenientQuery(query): LenientQuery<ListQuery>,
) -> ItemResult<Json<ItemPage>> {
    let page = service.list_items(query).await?;
    Ok(Json(page))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 400, response = BadRequestJsonResponse),
        (status = 422, response = UnprocessableJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<S: ItemStore>(
    State(service): State<Arc<ItemService<S>>>,
    JsonBody(input): JsonBody<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<S: ItemStore>(
    State(service): State<Arc<ItemService<S>>>,
    LenientPath(id): LenientPath<u64>,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Total item count and mean price
#[utoipa::path(
    get,
    path = "",
    tag = "Stats",
    responses(
        (status = 200, description = "Collection statistics", body = StatsSnapshot),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_stats<S: ItemStore>(
    State(aggregator): State<Arc<StatsAggregator<S>>>,
) -> ItemResult<Json<StatsSnapshot>> {
    let stats = aggregator.get_stats().await?;
    Ok(Json(stats))
}
