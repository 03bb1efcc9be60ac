use axum::Router;
use domain_items::{ItemService, handlers};
use std::sync::Arc;

pub fn router(state: &crate::state::AppState) -> Router {
    let service = ItemService::new(Arc::clone(&state.store));
    handlers::router(service)
}
