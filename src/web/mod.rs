mod error;
mod handlers;
mod routes;
pub mod security;
mod state;
pub mod view;

pub use state::AppState;

use crate::Config;
use anyhow::Result;
use axum::middleware;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Router for the read-only catalog service. Any origin may call it.
pub fn api_app(state: Arc<AppState>) -> Router {
    routes::api_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Router for the HTML gallery view.
pub fn view_app(state: Arc<AppState>) -> Router {
    routes::view_routes()
        .layer(middleware::from_fn(security::apply_security_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_api(config: Config, addr: &str) -> Result<()> {
    let state = Arc::new(AppState::new(config)?);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Catalog service listening on http://{}", listener.local_addr()?);
    axum::serve(listener, api_app(state)).await?;
    Ok(())
}

pub async fn serve_view(config: Config, addr: &str) -> Result<()> {
    let state = Arc::new(AppState::new(config)?);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        api_url = %state.client.endpoint(),
        "Gallery view listening on http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, view_app(state)).await?;
    Ok(())
}

/// Runs both routers in one process, each on its own listener.
pub async fn serve_all(config: Config) -> Result<()> {
    let api_addr = config.server.api_addr();
    let web_addr = config.server.web_addr();
    tokio::try_join!(
        serve_api(config.clone(), &api_addr),
        serve_view(config, &web_addr),
    )?;
    Ok(())
}
