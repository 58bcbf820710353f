//! SKV Global Studio Host
//!
//! Axum server that serves the compiled Leptos frontend. The page itself
//! has no API; this binary only hosts static files and a health check.

mod config;
mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::health_check;

/// Build the router for a given config
fn app(config: Arc<ServerConfig>) -> Router {
    let index = config.static_dir.join("index.html");
    let assets = ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment before reading RUST_LOG
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(ServerConfig::from_env()?);

    if !config.static_dir.join("index.html").exists() {
        tracing::warn!("⚠ No frontend bundle in {}", config.static_dir.display());
        tracing::warn!("  Build it with: cd crates/studio-web && trunk build --release");
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🎬 SKV studio running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("  GET  /health  - Health check");
    tracing::info!("  GET  /*       - Frontend ({})", config.static_dir.display());

    axum::serve(listener, app(config)).await?;

    Ok(())
}
