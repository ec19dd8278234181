//! Server bootstrap

use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::api::{create_router, AppState};
use crate::config::ServerConfig;
use crate::error::Result;
use crate::processor::ReceiptProcessor;
use crate::store::ScoreStore;

/// Builds the store and processor, binds the listener and serves until Ctrl-C.
pub async fn run_server(config: &ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    let local_addr: SocketAddr = listener.local_addr()?;

    let store = Arc::new(ScoreStore::new());
    let router = create_router(AppState::new(ReceiptProcessor::new(store)));

    info!("Receipt processor listening on {}", local_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Receipt processor stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
