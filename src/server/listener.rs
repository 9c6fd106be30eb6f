//! TCP listener for the HTTP API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use super::handlers::create_router;
use super::state::AppState;
use crate::error::{Result, UtcError};

/// Bind `addr` and serve the API until Ctrl-C.
pub async fn serve(state: Arc<AppState>) -> Result<()> {
    let addr = state.config.addr;
    let router = create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| UtcError::Server(format!("Failed to bind TCP to {addr}: {e}")))?;

    serve_on(listener, router).await
}

/// Serve `router` on an already-bound listener until Ctrl-C.
pub async fn serve_on(listener: TcpListener, router: Router) -> Result<()> {
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("UTC API listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| UtcError::Server(format!("TCP server error: {e}")))?;

    tracing::info!("UTC API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
