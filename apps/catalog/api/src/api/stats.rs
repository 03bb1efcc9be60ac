use axum::Router;
use domain_items::handlers;
use std::sync::Arc;

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::stats_router(Arc::clone(&state.stats))
}
