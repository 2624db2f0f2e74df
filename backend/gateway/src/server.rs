//! Main HTTP Gateway Server.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use docscan_providers::DocumentService;

use crate::document_analyzers;

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    pub service: Arc<DocumentService>,
}

impl GatewayState {
    pub fn new(service: DocumentService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Build the Axum router with all API routes.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/document_analyzers/extract", post(document_analyzers::extract))
        .route("/document_analyzers/check", post(document_analyzers::check))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "docscan",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Starts the main Axum HTTP server for the gateway.
#[instrument(skip(state))]
pub async fn start_server(addr: String, state: GatewayState) -> Result<()> {
    let provider = state.service.provider_name().to_string();
    let app = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!(provider = %provider, "Gateway HTTP server listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
