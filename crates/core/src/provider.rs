//! The seam between the adapter and the external scraping provider.

use async_trait::async_trait;
use serde_json::Value;

use crate::{Error, ScrapeParams, SearchParams};

/// Capability exposed by an external scraping provider.
///
/// Payloads are returned as raw JSON; the adapter decides which part of them
/// becomes the envelope's `data`.
#[async_trait]
pub trait ScrapeProvider: Send + Sync {
    /// Scrape a single page.
    async fn scrape_url(&self, url: &str, params: &ScrapeParams) -> Result<Value, Error>;

    /// Scrape several pages as one batch job.
    async fn batch_scrape(&self, urls: &[String], params: &ScrapeParams) -> Result<Value, Error>;

    /// Search the web and scrape the hits.
    async fn search(&self, query: &str, params: &SearchParams) -> Result<Value, Error>;
}
