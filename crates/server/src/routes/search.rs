//! `POST /search`.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use scrapegate_core::Envelope;
use serde::Deserialize;

use crate::error::{ApiError, respond};
use crate::handler::AppState;
use crate::routes::require_non_empty;

/// Request body for `POST /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchBody {
    /// Search query (required).
    pub query: String,

    /// Number of results to scrape (default 5).
    #[serde(default)]
    pub max_results: Option<u32>,
}

pub async fn search(
    State(state): State<AppState>, payload: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let adapter = state.adapter()?;
    let Json(body) = payload?;
    require_non_empty("query", &body.query)?;

    if body.max_results == Some(0) {
        return Err(ApiError::InvalidInput("max_results must be at least 1".into()));
    }

    respond(adapter.search_and_scrape(&body.query, body.max_results).await)
}
