//! `POST /scrape`.
//!
//! Scrapes a single URL through the provider.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use scrapegate_core::{Envelope, Format, ScrapeParams};
use serde::Deserialize;

use crate::error::{ApiError, respond};
use crate::handler::AppState;
use crate::routes::{apply_formats, require_non_empty};

/// Request body for `POST /scrape`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeBody {
    /// The URL to scrape.
    pub url: String,

    /// Output formats; overrides `params.formats` when non-empty.
    #[serde(default)]
    pub formats: Option<Vec<Format>>,

    /// Provider scrape options.
    #[serde(default)]
    pub params: Option<ScrapeParams>,
}

pub async fn scrape(
    State(state): State<AppState>, payload: Result<Json<ScrapeBody>, JsonRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let adapter = state.adapter()?;
    let Json(body) = payload?;
    require_non_empty("url", &body.url)?;

    let params = apply_formats(body.params, body.formats);
    respond(adapter.scrape_one(&body.url, params).await)
}
