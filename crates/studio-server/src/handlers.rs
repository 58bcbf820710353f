//! HTTP Handlers

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub bundle_present: bool,
}

/// Liveness check; also reports whether the frontend bundle has been built
pub async fn health_check(State(config): State<Arc<ServerConfig>>) -> Json<HealthResponse> {
    let bundle_present = tokio::fs::try_exists(config.static_dir.join("index.html"))
        .await
        .unwrap_or(false);

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        bundle_present,
    })
}
