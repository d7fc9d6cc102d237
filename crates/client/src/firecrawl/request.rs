//! Firecrawl API request bodies and validation.

use scrapegate_core::{ScrapeParams, SearchParams};
use serde::Serialize;

use crate::firecrawl::FirecrawlError;

/// Body of `POST /scrape`.
#[derive(Debug, Serialize)]
pub struct ScrapeRequest<'a> {
    pub url: &'a str,
    #[serde(flatten)]
    pub params: &'a ScrapeParams,
}

/// Body of `POST /batch/scrape`.
#[derive(Debug, Serialize)]
pub struct BatchScrapeRequest<'a> {
    pub urls: &'a [String],
    #[serde(flatten)]
    pub params: &'a ScrapeParams,
}

/// Body of `POST /search`.
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    #[serde(flatten)]
    pub params: &'a SearchParams,
}

impl ScrapeRequest<'_> {
    pub fn validate(&self) -> Result<(), FirecrawlError> {
        if self.url.trim().is_empty() {
            return Err(FirecrawlError::InvalidInput("url cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl BatchScrapeRequest<'_> {
    pub fn validate(&self) -> Result<(), FirecrawlError> {
        if self.urls.is_empty() {
            return Err(FirecrawlError::InvalidInput("urls cannot be empty".to_string()));
        }
        if let Some(pos) = self.urls.iter().position(|u| u.trim().is_empty()) {
            return Err(FirecrawlError::InvalidInput(format!("urls[{pos}] cannot be empty")));
        }
        Ok(())
    }
}

impl SearchRequest<'_> {
    pub fn validate(&self) -> Result<(), FirecrawlError> {
        if self.query.trim().is_empty() {
            return Err(FirecrawlError::InvalidInput("query cannot be empty".to_string()));
        }
        if self.params.limit == 0 {
            return Err(FirecrawlError::InvalidInput("limit must be at least 1".to_string()));
        }
        Ok(())
    }
}
