use crate::web::error::AppResult;
use crate::web::state::AppState;
use crate::web::view::GalleryState;
use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};
use bytes::Bytes;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

pub async fn index() -> Redirect {
    Redirect::to("/pictures")
}

/// GET /pictures
///
/// Streams the page in two chunks. The first carries the shell and the pending skeleton
/// grid and goes out immediately; the second is sent once the catalog fetch resolves and
/// replaces the skeleton with either the card grid or the empty state.
pub async fn pictures(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    let shell = state.view.render_shell(state.config.view.skeleton_count)?;

    let resolved = async move {
        if let Some(delay) = state.config.view.simulated_delay() {
            tokio::time::sleep(delay).await;
        }
        let images = state.client.fetch_images().await;
        let gallery = GalleryState::resolve(images);
        state
            .view
            .render_resolved(&gallery)
            .map(Bytes::from)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to render resolved gallery");
                e
            })
    };

    let body = stream::once(async move { Ok::<_, tera::Error>(Bytes::from(shell)) })
        .chain(stream::once(resolved));

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        Body::from_stream(body),
    )
        .into_response())
}
