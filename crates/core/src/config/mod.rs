//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (SCRAPEGATE_*)
//! 2. Bare `FIRECRAWL_API_KEY`, `HOST` and `PORT` variables
//! 3. TOML config file (if SCRAPEGATE_CONFIG_FILE set)
//! 4. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::params::{Format, ScrapeParams};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (SCRAPEGATE_*)
/// 2. `FIRECRAWL_API_KEY`, `HOST`, `PORT`
/// 3. TOML config file (if SCRAPEGATE_CONFIG_FILE set)
/// 4. Built-in defaults
///
/// Immutable once loaded; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider API key.
    ///
    /// Set via SCRAPEGATE_API_KEY or FIRECRAWL_API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Provider API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Formats requested when the caller does not name any.
    #[serde(default = "default_formats")]
    pub default_formats: Vec<Format>,

    /// Maximum number of result pages followed for a paginated batch job.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// HTTP timeout for a single provider request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Interval between batch job status polls, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Upper bound on waiting for a batch job, in seconds.
    #[serde(default = "default_batch_max_wait_secs")]
    pub batch_max_wait_secs: u64,

    /// User-Agent string for provider requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Bind host for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_api_url() -> String {
    "https://api.firecrawl.dev/v1".into()
}

fn default_formats() -> Vec<Format> {
    vec![Format::Markdown, Format::Html]
}

fn default_max_pages() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_poll_interval_ms() -> u64 {
    2_000
}

fn default_batch_max_wait_secs() -> u64 {
    300
}

fn default_user_agent() -> String {
    "scrapegate/0.1".into()
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            default_formats: default_formats(),
            max_pages: default_max_pages(),
            timeout_secs: default_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
            batch_max_wait_secs: default_batch_max_wait_secs(),
            user_agent: default_user_agent(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn batch_max_wait(&self) -> Duration {
        Duration::from_secs(self.batch_max_wait_secs)
    }

    /// Scrape parameters applied underneath every caller's overrides.
    pub fn default_scrape_params(&self) -> ScrapeParams {
        ScrapeParams::with_formats(self.default_formats.clone())
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment()
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("SCRAPEGATE_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment
            .merge(api_key_from_env("FIRECRAWL_API_KEY").map_or_else(Figment::new, Figment::from))
            .merge(
                Env::raw()
                    .only(&["HOST", "PORT"])
                    .map(|key| key.as_str().to_lowercase().into()),
            )
            .merge(
                Env::prefixed("SCRAPEGATE_")
                    .ignore(&["CONFIG_FILE", "API_KEY"])
                    .map(|key| key.as_str().to_lowercase().into())
                    .split("__"),
            )
            .merge(api_key_from_env("SCRAPEGATE_API_KEY").map_or_else(Figment::new, Figment::from))
    }

    /// Return the provider API key, or a hint on how to set it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if no key is set or it is blank.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "api_key".into(),
                hint: "Set FIRECRAWL_API_KEY or SCRAPEGATE_API_KEY environment variable".into(),
            })
    }
}

/// API key layer read verbatim; `Env` would coerce an all-digit key to an integer.
fn api_key_from_env(var: &str) -> Option<Serialized<String>> {
    std::env::var(var).ok().map(|key| Serialized::default("api_key", key))
}
