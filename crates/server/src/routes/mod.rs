//! HTTP route implementations.
//!
//! Each route validates its body, calls one adapter operation and maps the
//! resulting envelope to a status code.

pub mod batch_scrape;
pub mod extract;
pub mod health;
pub mod scrape;
pub mod search;

use scrapegate_core::{Format, ScrapeParams};

use crate::error::ApiError;

/// Top-level `formats` wins over `params.formats` when it is non-empty.
pub(crate) fn apply_formats(params: Option<ScrapeParams>, formats: Option<Vec<Format>>) -> Option<ScrapeParams> {
    match formats.filter(|f| !f.is_empty()) {
        Some(formats) => Some(ScrapeParams { formats: Some(formats), ..params.unwrap_or_default() }),
        None => params,
    }
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput(format!("{field} cannot be empty")));
    }
    Ok(())
}
