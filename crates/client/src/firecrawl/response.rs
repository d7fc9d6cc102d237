//! Firecrawl API response types.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::firecrawl::FirecrawlError;

/// Error body returned alongside 4xx/5xx statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Longest provider message carried into an error.
const MAX_MESSAGE_CHARS: usize = 200;

impl ApiErrorBody {
    /// Message from a JSON error body, else the status reason phrase.
    ///
    /// Non-JSON bodies (proxy error pages and the like) are never echoed.
    pub fn message_from(status: StatusCode, bytes: &[u8]) -> String {
        let body: ApiErrorBody = serde_json::from_slice(bytes).unwrap_or_default();
        match body.error.or(body.message).filter(|m| !m.trim().is_empty()) {
            Some(message) => truncate(message.trim()),
            None => status.canonical_reason().unwrap_or("upstream error").to_string(),
        }
    }
}

fn truncate(message: &str) -> String {
    match message.char_indices().nth(MAX_MESSAGE_CHARS) {
        Some((idx, _)) => format!("{}...", &message[..idx]),
        None => message.to_string(),
    }
}

/// Response of `POST /batch/scrape`.
#[derive(Debug, Deserialize)]
pub struct BatchStartResponse {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Lifecycle state of a batch job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchJobStatus {
    Scraping,
    Completed,
    Failed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BatchJobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BatchJobStatus::Scraping => "scraping",
            BatchJobStatus::Completed => "completed",
            BatchJobStatus::Failed => "failed",
            BatchJobStatus::Cancelled => "cancelled",
            BatchJobStatus::Unknown => "unknown",
        }
    }
}

/// Response of `GET /batch/scrape/{id}`.
///
/// Fields not modelled here are kept in `extra` and passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStatusResponse {
    pub status: BatchJobStatus,

    #[serde(default)]
    pub data: Vec<Value>,

    /// Absolute URL of the next result page.
    #[serde(default, skip_serializing)]
    pub next: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reject bodies where Firecrawl reports `success: false` with a 2xx status.
pub fn ensure_success(body: &Value) -> Result<(), FirecrawlError> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("provider reported failure")
            .to_string();
        return Err(FirecrawlError::Failed(message));
    }
    Ok(())
}
