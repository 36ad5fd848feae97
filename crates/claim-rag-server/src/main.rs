//! Claim-Micro-RAG HTTP Server
//!
//! Axum-based host that pre-renders the landing banner and serves it as a
//! page, as JSON, and alongside the WASM frontend.

mod config;
mod error;
mod handlers;
mod page;
mod routes;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{ServerConfig, DEFAULT_LOG_FILTER},
    error::ServerError,
    routes::build_router,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment first so RUST_LOG from .env reaches the filter
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    // Initialize tracing
    let log_filter = config
        .as_ref()
        .map_or(DEFAULT_LOG_FILTER, |c| c.log_filter.as_str());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = match config {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        if let Some(hint) = e.hint() {
            tracing::error!("  {}", hint);
        }
        return Err(e.into());
    }

    Ok(())
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState::prerender(&config)?;
    tracing::info!("✓ Banner pre-rendered ({} bytes)", state.page.len());

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "⚠ Static dir {} not found - WASM frontend disabled",
            config.static_dir.display()
        );
        tracing::warn!("  Build it with: trunk build --dist static crates/claim-rag-web/index.html");
    }

    let app = build_router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr,
            source,
        })?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 claim-rag server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /                 - Landing page");
    tracing::info!("  GET  /api/banner       - Banner template (JSON)");
    tracing::info!("  GET  /api/banner/tree  - Display-node tree (JSON)");
    tracing::info!("  GET  /api/banner/html  - Banner markup");
    tracing::info!("  GET  /health           - Health check");
    tracing::info!("  GET  /app              - WASM frontend ({}/index.html)", config.static_dir.display());
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
