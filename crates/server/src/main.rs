//! scrapegate server entry point.
//!
//! Loads configuration, builds the provider adapter once and serves the HTTP
//! API until Ctrl-C.

use std::sync::Arc;

use anyhow::Result;
use scrapegate_core::AppConfig;
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod routes;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    let config = Arc::new(AppConfig::load()?);
    let state = handler::AppState::from_config(Arc::clone(&config));
    let app = handler::router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Starting scrapegate on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("scrapegate stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
