//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `default_formats` is empty
    /// - `max_pages` is 0
    /// - `timeout_secs` is 0 or exceeds 5 minutes
    /// - `poll_interval_ms` is less than 100ms
    /// - `batch_max_wait_secs` is 0
    /// - `user_agent` is empty
    /// - `port` is 0
    /// - `api_url` is not an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_formats.is_empty() {
            return Err(ConfigError::Invalid {
                field: "default_formats".into(),
                reason: "must name at least one format".into(),
            });
        }

        if self.max_pages == 0 {
            return Err(ConfigError::Invalid { field: "max_pages".into(), reason: "must be greater than 0".into() });
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid { field: "timeout_secs".into(), reason: "must be at least 1s".into() });
        }
        if self.timeout_secs > 300 {
            return Err(ConfigError::Invalid {
                field: "timeout_secs".into(),
                reason: "must not exceed 5 minutes (300s)".into(),
            });
        }

        if self.poll_interval_ms < 100 {
            return Err(ConfigError::Invalid {
                field: "poll_interval_ms".into(),
                reason: "must be at least 100ms".into(),
            });
        }

        if self.batch_max_wait_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "batch_max_wait_secs".into(),
                reason: "must be greater than 0".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.port == 0 {
            return Err(ConfigError::Invalid { field: "port".into(), reason: "must not be 0".into() });
        }

        match url::Url::parse(&self.api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(ConfigError::Invalid {
                    field: "api_url".into(),
                    reason: format!("not an absolute http(s) URL: {}", self.api_url),
                });
            }
        }

        if self.api_key.is_none() {
            tracing::warn!("no provider API key configured; scraping endpoints will be unavailable");
        }

        Ok(())
    }
}
