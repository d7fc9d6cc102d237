//! Unified error types for scrapegate.
//!
//! Every variant renders with a stable code prefix so callers can match on
//! the message without a stack trace or internal detail leaking through.

/// Unified error types shared by the adapter, the provider client and the router.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., empty URL).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Provider rejected the API key.
    #[error("PROVIDER_AUTH: {0}")]
    ProviderAuth(String),

    /// Provider account has run out of credits.
    #[error("PROVIDER_PAYMENT: {0}")]
    ProviderPayment(String),

    /// Provider rate limited the request.
    #[error("PROVIDER_RATE_LIMITED: {0}")]
    ProviderRateLimited(String),

    /// Provider call timed out.
    #[error("PROVIDER_TIMEOUT: {0}")]
    ProviderTimeout(String),

    /// Provider answered with an HTTP error status, or the transport failed.
    #[error("PROVIDER_HTTP: {0}")]
    ProviderHttp(String),

    /// Provider answered but reported the operation as unsuccessful.
    #[error("PROVIDER_FAILED: {0}")]
    ProviderFailed(String),

    /// Provider response could not be parsed.
    #[error("PROVIDER_PARSE: {0}")]
    ProviderParse(String),

    /// No provider client is available.
    #[error("NOT_INITIALIZED: {0}")]
    NotInitialized(String),
}

impl Error {
    /// Stable machine-readable code, identical to the display prefix.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::ProviderAuth(_) => "PROVIDER_AUTH",
            Error::ProviderPayment(_) => "PROVIDER_PAYMENT",
            Error::ProviderRateLimited(_) => "PROVIDER_RATE_LIMITED",
            Error::ProviderTimeout(_) => "PROVIDER_TIMEOUT",
            Error::ProviderHttp(_) => "PROVIDER_HTTP",
            Error::ProviderFailed(_) => "PROVIDER_FAILED",
            Error::ProviderParse(_) => "PROVIDER_PARSE",
            Error::NotInitialized(_) => "NOT_INITIALIZED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ProviderRateLimited("too many requests".to_string());
        assert!(err.to_string().contains("PROVIDER_RATE_LIMITED"));
        assert!(err.to_string().contains("too many requests"));
    }

    #[test]
    fn test_code_matches_display_prefix() {
        let errors = [
            Error::InvalidInput("x".into()),
            Error::ProviderAuth("x".into()),
            Error::ProviderPayment("x".into()),
            Error::ProviderRateLimited("x".into()),
            Error::ProviderTimeout("x".into()),
            Error::ProviderHttp("x".into()),
            Error::ProviderFailed("x".into()),
            Error::ProviderParse("x".into()),
            Error::NotInitialized("x".into()),
        ];

        for err in errors {
            assert!(err.to_string().starts_with(&format!("{}: ", err.code())), "{err}");
        }
    }
}
