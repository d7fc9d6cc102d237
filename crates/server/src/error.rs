//! Structured errors for the scrapegate HTTP surface.
//!
//! Every variant renders as a JSON body with `success: false`; this is the
//! only place envelopes and faults are translated into status codes.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scrapegate_core::Envelope;
use serde_json::json;

/// Structured errors for the scrapegate server.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No provider client could be built at startup.
    #[error("scraper not initialized")]
    NotInitialized,

    /// Request body failed validation before reaching the adapter.
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// The adapter returned a failure envelope.
    #[error("{}", .0.error().unwrap_or_default())]
    Failed(Box<Envelope>),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotInitialized => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidInput(_) | ApiError::Failed(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Failed(envelope) => (status, Json(*envelope)).into_response(),
            other => (status, Json(json!({ "success": false, "error": other.to_string() }))).into_response(),
        }
    }
}

/// Map an adapter envelope onto the HTTP response.
pub fn respond(envelope: Envelope) -> Result<Json<Envelope>, ApiError> {
    if envelope.is_success() { Ok(Json(envelope)) } else { Err(ApiError::Failed(Box::new(envelope))) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrapegate_core::Echo;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::NotInitialized.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::InvalidInput("url cannot be empty".into()).status(), StatusCode::BAD_REQUEST);

        let envelope = Envelope::failure("PROVIDER_AUTH: denied", Echo::Url("https://example.com".into()));
        assert_eq!(ApiError::Failed(Box::new(envelope)).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_failed_display_uses_envelope_error() {
        let envelope = Envelope::failure("PROVIDER_TIMEOUT: request timeout", Echo::Query("q".into()));
        assert_eq!(ApiError::Failed(Box::new(envelope)).to_string(), "PROVIDER_TIMEOUT: request timeout");
    }

    #[test]
    fn test_respond() {
        let ok = Envelope::success(json!({"markdown": "x"}), Echo::Url("https://example.com".into()));
        assert!(respond(ok).is_ok());

        let failed = Envelope::failure("boom", Echo::Url("https://example.com".into()));
        assert!(matches!(respond(failed), Err(ApiError::Failed(_))));
    }
}
