//! Static file serving handlers.

use std::path::Component;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::super::assets;
use super::super::AppState;

/// Serve a file from the media directory.
pub async fn serve_media(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let canonical_media_dir = match state.media_dir.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(
                "Media directory {} unavailable: {}",
                state.media_dir.display(),
                e
            );
            return (StatusCode::NOT_FOUND, "File not found").into_response();
        }
    };

    // Only plain names below the media directory; no `..`, root or prefix.
    if !std::path::Path::new(&path)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    }

    let file_path = canonical_media_dir.join(&path);

    let canonical_file = match file_path.canonicalize() {
        Ok(p) => p,
        Err(_) => {
            return (StatusCode::NOT_FOUND, "File not found").into_response();
        }
    };

    if !canonical_file.starts_with(&canonical_media_dir) || !canonical_file.is_file() {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    }

    let content = match tokio::fs::read(&canonical_file).await {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to read {}: {}", canonical_file.display(), e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response();
        }
    };

    let mime = mime_guess::from_path(&canonical_file)
        .first_or_octet_stream()
        .to_string();

    (
        [
            (header::CONTENT_TYPE, mime),
            (header::CACHE_CONTROL, "public, max-age=86400".to_string()),
        ],
        content,
    )
        .into_response()
}

/// Serve CSS.
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::CSS)
}

/// Serve JavaScript.
pub async fn serve_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        assets::JS,
    )
}
