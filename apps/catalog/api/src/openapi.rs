use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Browse, search and add catalog items, and read collection statistics"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/items", api = domain_items::ApiDoc),
        (path = "/stats", api = domain_items::StatsApiDoc)
    )
)]
pub struct ApiDoc;
