//! Explicit provider parameters.
//!
//! Every override a caller can send is a named optional field. Unknown keys are
//! rejected at deserialization time so the merge contract stays auditable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Output formats the provider can return for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    #[serde(rename = "markdown")]
    Markdown,
    #[serde(rename = "html")]
    Html,
    #[serde(rename = "rawHtml")]
    RawHtml,
    #[serde(rename = "links")]
    Links,
    #[serde(rename = "screenshot")]
    Screenshot,
    #[serde(rename = "screenshot@fullPage")]
    ScreenshotFullPage,
    #[serde(rename = "json")]
    Json,
}

/// Options for schema-constrained JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JsonOptions {
    /// JSON Schema the provider must satisfy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,

    /// Free-form extraction prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// System prompt override for the extraction model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

/// Per-call scrape parameters.
///
/// Serialized with the provider's camelCase wire names and flattened into the
/// request body, so absent fields are never sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScrapeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<Format>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_main_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_tags: Option<Vec<String>>,

    /// Extra request headers the provider sends to the target page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,

    /// Delay in milliseconds before the provider captures the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for: Option<u64>,

    /// Provider-side timeout in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_tls_verification: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_base64_images: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_ads: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_options: Option<JsonOptions>,
}

impl ScrapeParams {
    /// Shallow merge: every field set on `self` wins, the rest come from `defaults`.
    ///
    /// Nested values (`headers`, `json_options`, tag lists) are taken whole from
    /// whichever side provides them; they are never combined.
    pub fn merged_over(self, defaults: &ScrapeParams) -> ScrapeParams {
        ScrapeParams {
            formats: self.formats.or_else(|| defaults.formats.clone()),
            only_main_content: self.only_main_content.or(defaults.only_main_content),
            include_tags: self.include_tags.or_else(|| defaults.include_tags.clone()),
            exclude_tags: self.exclude_tags.or_else(|| defaults.exclude_tags.clone()),
            headers: self.headers.or_else(|| defaults.headers.clone()),
            wait_for: self.wait_for.or(defaults.wait_for),
            timeout: self.timeout.or(defaults.timeout),
            mobile: self.mobile.or(defaults.mobile),
            skip_tls_verification: self.skip_tls_verification.or(defaults.skip_tls_verification),
            remove_base64_images: self.remove_base64_images.or(defaults.remove_base64_images),
            block_ads: self.block_ads.or(defaults.block_ads),
            json_options: self.json_options.or_else(|| defaults.json_options.clone()),
        }
    }

    /// Parameters carrying only a format list.
    pub fn with_formats(formats: Vec<Format>) -> Self {
        Self { formats: Some(formats), ..Default::default() }
    }
}

/// Parameters for a provider search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Maximum number of results.
    pub limit: u32,

    /// Scrape options applied to every result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrape_options: Option<ScrapeParams>,
}
