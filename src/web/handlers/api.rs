use crate::services::catalog::{self, CatalogError};
use crate::web::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::sync::Arc;

fn error_body(status: StatusCode, error: &str) -> Response {
    (status, Json(serde_json::json!({ "error": error }))).into_response()
}

fn internal_error() -> Response {
    error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

/// GET /api/gallery
pub async fn gallery(State(state): State<Arc<AppState>>) -> Response {
    match catalog::load_catalog(&state.config.catalog.path).await {
        Ok(catalog) => Json(catalog).into_response(),
        Err(CatalogError::Read { path, source }) => {
            tracing::error!(path = %path.display(), error = %source, "Error reading catalog file");
            internal_error()
        }
        Err(CatalogError::Parse { path, source }) => {
            tracing::error!(
                path = %path.display(),
                line = source.line(),
                column = source.column(),
                error = %source,
                "Error parsing catalog file"
            );
            internal_error()
        }
    }
}

pub async fn not_found() -> Response {
    error_body(StatusCode::NOT_FOUND, "Not Found")
}
