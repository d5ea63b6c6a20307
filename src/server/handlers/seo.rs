//! Crawler files.

use askama::Template;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::super::template_structs::{robots_txt, SitemapTemplate};
use super::super::AppState;

pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&state.settings),
    )
}

/// One `<url>` per page: the home page and every service.
pub async fn sitemap(State(state): State<AppState>) -> Response {
    match SitemapTemplate::new(&state.settings, &state.catalog).render() {
        Ok(xml) => ([(header::CONTENT_TYPE, "application/xml")], xml).into_response(),
        Err(e) => {
            tracing::error!("Sitemap rendering failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render sitemap").into_response()
        }
    }
}
