//! `POST /batch-scrape`.
//!
//! Scrapes several URLs as a single provider batch job.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use scrapegate_core::{Envelope, Format, ScrapeParams};
use serde::Deserialize;

use crate::error::{ApiError, respond};
use crate::handler::AppState;
use crate::routes::{apply_formats, require_non_empty};

/// Request body for `POST /batch-scrape`.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchScrapeBody {
    /// URLs to scrape, in order.
    pub urls: Vec<String>,

    #[serde(default)]
    pub formats: Option<Vec<Format>>,

    #[serde(default)]
    pub params: Option<ScrapeParams>,
}

pub async fn batch_scrape(
    State(state): State<AppState>, payload: Result<Json<BatchScrapeBody>, JsonRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let adapter = state.adapter()?;
    let Json(body) = payload?;

    if body.urls.is_empty() {
        return Err(ApiError::InvalidInput("urls cannot be empty".into()));
    }
    for url in &body.urls {
        require_non_empty("url", url)?;
    }

    let params = apply_formats(body.params, body.formats);
    respond(adapter.scrape_many(&body.urls, params).await)
}
