//! Router

use std::path::Path;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    handlers::{banner_fragment, banner_json, banner_tree, health_check, index_page},
    state::AppState,
};

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(health_check))
        // Banner
        .route("/", get(index_page))
        .route("/api/banner", get(banner_json))
        .route("/api/banner/tree", get(banner_tree))
        .route("/api/banner/html", get(banner_fragment))
        // WASM frontend shell and its assets
        .route_service("/app", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
