//! `POST /extract`.
//!
//! Schema-constrained extraction: the caller lists the fields it wants and
//! the provider returns them as JSON.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use scrapegate_core::{Envelope, FieldSpec, StructuredSchema};
use serde::Deserialize;

use crate::error::{ApiError, respond};
use crate::handler::AppState;
use crate::routes::require_non_empty;

/// Request body for `POST /extract`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractBody {
    pub url: String,

    /// Fields to extract, e.g. `[{"name": "title", "type": "string"}]`.
    pub fields: Vec<FieldSpec>,
}

pub async fn extract(
    State(state): State<AppState>, payload: Result<Json<ExtractBody>, JsonRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let adapter = state.adapter()?;
    let Json(body) = payload?;
    require_non_empty("url", &body.url)?;

    if body.fields.is_empty() {
        return Err(ApiError::InvalidInput("fields cannot be empty".into()));
    }
    for field in &body.fields {
        require_non_empty("field name", &field.name)?;
    }

    let schema = StructuredSchema::from_fields(&body.fields);
    respond(adapter.extract_structured(&body.url, &schema).await)
}
