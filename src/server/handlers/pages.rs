//! Page handlers: home, service pages and the not-found page.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::super::template_structs::{HomeTemplate, NotFoundTemplate, ServiceTemplate};
use super::super::AppState;
use crate::page;

fn render_error(e: askama::Error) -> Response {
    tracing::error!("Template rendering failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(format!("Template error: {}", e)),
    )
        .into_response()
}

fn not_found_response(state: &AppState) -> Response {
    let template = NotFoundTemplate::new(&state.settings, &state.catalog);
    match template.render() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => render_error(e),
    }
}

/// Home page with the video hero and the service list.
pub async fn home(State(state): State<AppState>) -> Response {
    match HomeTemplate::new(&state.settings, &state.catalog).and_then(|t| t.render()) {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_error(e),
    }
}

/// Page for a single service. Unknown keys get the not-found page.
pub async fn service_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let composed = match page::compose(&state.catalog, &slug) {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!("{}", e);
            return not_found_response(&state);
        }
    };

    match ServiceTemplate::new(&state.settings, &state.catalog, &composed).and_then(|t| t.render())
    {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_error(e),
    }
}

/// Fallback for routes that match nothing.
pub async fn not_found(State(state): State<AppState>) -> Response {
    not_found_response(&state)
}
