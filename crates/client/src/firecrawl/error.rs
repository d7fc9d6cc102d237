//! Firecrawl API client error types.

use std::sync::Arc;

use scrapegate_core::Error;

/// Errors from the Firecrawl API client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FirecrawlError {
    /// No API key configured.
    #[error("missing API key: FIRECRAWL_API_KEY not set")]
    MissingApiKey,

    /// Request rejected before it was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Authentication failed (invalid API key).
    #[error("authentication failed: invalid API key")]
    AuthError,

    /// Account is out of credits.
    #[error("payment required: {0}")]
    PaymentRequired(String),

    /// Rate limited by Firecrawl.
    #[error("rate limited: too many requests")]
    RateLimited,

    /// HTTP error response.
    #[error("HTTP error {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),

    /// Firecrawl answered with `success: false`.
    #[error("request failed: {0}")]
    Failed(String),

    /// A batch job ended without completing.
    #[error("batch job {id} ended with status {status}")]
    JobFailed { id: String, status: String },

    /// A batch job did not finish in time.
    #[error("batch job {id} did not finish in time")]
    BatchTimeout { id: String },
}

impl From<reqwest::Error> for FirecrawlError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { FirecrawlError::Timeout } else { FirecrawlError::Network(Arc::new(err)) }
    }
}

impl From<FirecrawlError> for Error {
    fn from(err: FirecrawlError) -> Self {
        let message = err.to_string();
        match err {
            FirecrawlError::MissingApiKey => Error::NotInitialized(message),
            FirecrawlError::InvalidInput(msg) => Error::InvalidInput(msg),
            FirecrawlError::AuthError => Error::ProviderAuth(message),
            FirecrawlError::PaymentRequired(_) => Error::ProviderPayment(message),
            FirecrawlError::RateLimited => Error::ProviderRateLimited(message),
            FirecrawlError::Timeout | FirecrawlError::BatchTimeout { .. } => Error::ProviderTimeout(message),
            FirecrawlError::HttpError { .. } | FirecrawlError::Network(_) => Error::ProviderHttp(message),
            FirecrawlError::Parse(_) => Error::ProviderParse(message),
            FirecrawlError::Failed(_) | FirecrawlError::JobFailed { .. } => Error::ProviderFailed(message),
        }
    }
}
