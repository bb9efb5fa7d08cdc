use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::{self, AppState};
use crate::config::TuniCampConfig;

/// Full application router with middleware
pub fn app(state: AppState, config: &TuniCampConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(state))
        .layer(RequestBodyLimitLayer::new(config.server.max_body_kb as usize * 1024))
        .layer(cors)
}

pub async fn run(state: AppState, config: &TuniCampConfig) -> Result<()> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);

    axum::serve(listener, app(state, config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
