//! HTTP server lifecycle — binds the configured address, mounts the API
//! router, and serves until a shutdown signal arrives.

use std::sync::Arc;

use crate::api::router::api_router;
use crate::api::types::ApiContext;
use crate::config::Settings;
use crate::planner::CompletionClient;

/// Run the API server until shutdown.
pub async fn run(
    settings: Settings,
    client: Arc<dyn CompletionClient>,
) -> std::io::Result<()> {
    let addr = settings.bind_addr;
    let ctx = ApiContext::new(settings, client);
    let app = api_router(ctx);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
