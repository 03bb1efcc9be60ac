use axum::Router;
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// API routes under `/api`, docs and middleware, plus /health and /ready.
fn build_app(state: &AppState) -> eyre::Result<Router> {
    let api_routes = api::routes(state);

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?;

    // - /health: liveness check with app name/version
    // - /ready: readiness check that the data file can be read
    Ok(router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone())))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    info!(
        path = %config.storage.data_path.display(),
        "Using items data file"
    );
    let state = AppState::new(config)?;
    let app = build_app(&state)?;

    let server = state.config.server.clone();
    let shutdown_timeout = state.config.shutdown_timeout;
    info!(
        "Starting catalog API with graceful shutdown ({:?} timeout)",
        shutdown_timeout
    );

    // State moves here for cleanup
    create_production_app(app, &server, shutdown_timeout, async move {
        info!("Shutting down: stopping data file watcher");
        state.stats.shutdown();
        drop(state);
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{Environment, app_info, server::ServerConfig, storage::StorageConfig};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::time::Duration;
    use test_utils::{TestDataBuilder, TestDataFile};
    use tower::ServiceExt;

    fn test_app(file: &TestDataFile) -> Router {
        let config = Config {
            app: app_info!(),
            server: ServerConfig::default(),
            storage: StorageConfig::new(file.path()),
            environment: Environment::Development,
            shutdown_timeout: Duration::from_secs(1),
        };
        let state = AppState::new(config).unwrap();
        build_app(&state).unwrap()
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_routes_are_mounted_under_api() {
        let file = TestDataFile::with_items(&TestDataBuilder::sample_items());
        let app = test_app(&file);

        let (status, body) = get(&app, "/api/items").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["totalItems"], 3);

        let (status, body) = get(&app, "/api/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["averagePrice"], 200.0);

        let (status, body) = get(&app, "/items").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");
    }

    #[tokio::test]
    async fn test_health_reports_app_identity() {
        let file = TestDataFile::new();
        let (status, body) = get(&test_app(&file), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "catalog_api");
    }

    #[tokio::test]
    async fn test_ready_tracks_data_file() {
        let file = TestDataFile::with_items(&TestDataBuilder::sample_items());
        let app = test_app(&file);

        let (status, body) = get(&app, "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["storage"], "ok");

        std::fs::remove_file(file.path()).unwrap();
        let (status, body) = get(&app, "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not ready");
    }
}
