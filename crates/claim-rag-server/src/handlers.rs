//! HTTP Handlers

use axum::{
    extract::State,
    http::{header, HeaderName},
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Landing page with the pre-rendered banner
pub async fn index_page(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

/// Banner markup without the document shell
pub async fn banner_fragment(State(state): State<AppState>) -> Html<String> {
    Html(state.fragment.to_string())
}

/// Banner template as JSON
pub async fn banner_json(State(state): State<AppState>) -> impl IntoResponse {
    json_body(&state.banner_json)
}

/// Display-node tree as JSON
pub async fn banner_tree(State(state): State<AppState>) -> impl IntoResponse {
    json_body(&state.tree_json)
}

fn json_body(body: &str) -> ([(HeaderName, &'static str); 1], String) {
    (
        [(header::CONTENT_TYPE, "application/json")],
        body.to_string(),
    )
}
