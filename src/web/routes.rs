use super::handlers;
use super::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/gallery", get(handlers::api::gallery))
        .route("/health", get(health))
        .fallback(handlers::api::not_found)
}

pub fn view_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::gallery::index))
        .route("/pictures", get(handlers::gallery::pictures))
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "ok"
}
