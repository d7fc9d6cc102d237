//! HTTP router and shared state.
//!
//! The adapter is built once at startup and handed to every handler through
//! axum state; there is no global instance.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use scrapegate_client::FirecrawlClient;
use scrapegate_core::{Adapter, AppConfig};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::routes::{batch_scrape, extract, health, scrape, search};

/// State shared read-only by all handlers.
#[derive(Clone, Default)]
pub struct AppState {
    adapter: Option<Arc<Adapter>>,
}

impl AppState {
    pub fn new(adapter: Option<Adapter>) -> Self {
        Self { adapter: adapter.map(Arc::new) }
    }

    /// Build the provider client and adapter from config.
    ///
    /// A client that cannot be built (e.g. no API key) leaves the state
    /// uninitialized; scraping routes then answer 500.
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        match FirecrawlClient::from_app_config(&config) {
            Ok(client) => {
                tracing::info!(api_url = %config.api_url, "scraper initialized");
                Self::new(Some(Adapter::new(Arc::new(client), config)))
            }
            Err(e) => {
                tracing::error!("scraper not initialized: {}", e);
                Self::new(None)
            }
        }
    }

    pub fn adapter(&self) -> Result<&Adapter, ApiError> {
        self.adapter.as_deref().ok_or(ApiError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.adapter.is_some()
    }
}

/// Build the axum Router with all endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/scrape", post(scrape::scrape))
        .route("/batch-scrape", post(batch_scrape::batch_scrape))
        .route("/search", post(search::search))
        .route("/extract", post(extract::extract))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
