//! Request/response adapter over a scraping provider.
//!
//! Owns the default-parameter policy and error normalization. Each operation
//! makes exactly one provider call and always returns an [`Envelope`]; provider
//! errors never escape this boundary.

use std::sync::Arc;

use serde_json::Value;

use crate::envelope::{Echo, Envelope};
use crate::params::{Format, JsonOptions, ScrapeParams, SearchParams};
use crate::provider::ScrapeProvider;
use crate::schema::StructuredSchema;
use crate::{AppConfig, Error};

/// Result count used by [`Adapter::search_and_scrape`] when none is given.
pub const DEFAULT_MAX_RESULTS: u32 = 5;

/// Stateless adapter shared across all requests.
#[derive(Clone)]
pub struct Adapter {
    provider: Arc<dyn ScrapeProvider>,
    config: Arc<AppConfig>,
}

impl Adapter {
    pub fn new(provider: Arc<dyn ScrapeProvider>, config: Arc<AppConfig>) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Caller parameters merged over the configured defaults.
    pub fn effective_params(&self, params: Option<ScrapeParams>) -> ScrapeParams {
        params
            .unwrap_or_default()
            .merged_over(&self.config.default_scrape_params())
    }

    /// Scrape a single URL.
    ///
    /// `data` is the payload's `data` field when the provider nests its content,
    /// otherwise the whole payload.
    pub async fn scrape_one(&self, url: &str, params: Option<ScrapeParams>) -> Envelope {
        let params = self.effective_params(params);
        tracing::debug!(url, formats = ?params.formats, "scrape");

        let echo = Echo::Url(url.to_string());
        match self.provider.scrape_url(url, &params).await {
            Ok(payload) => Envelope::success(take_field(payload, "data"), echo),
            Err(e) => failure("scrape", e, echo),
        }
    }

    /// Scrape several URLs as one batch.
    ///
    /// The batch either succeeds as a whole or fails as a whole; per-item
    /// outcomes stay inside the provider payload.
    pub async fn scrape_many(&self, urls: &[String], params: Option<ScrapeParams>) -> Envelope {
        let params = self.effective_params(params);
        tracing::debug!(count = urls.len(), formats = ?params.formats, "batch scrape");

        let echo = Echo::Urls(urls.to_vec());
        match self.provider.batch_scrape(urls, &params).await {
            Ok(payload) => Envelope::success(payload, echo),
            Err(e) => failure("batch scrape", e, echo),
        }
    }

    /// Ask the provider for JSON output constrained by `schema`.
    pub async fn extract_structured(&self, url: &str, schema: &StructuredSchema) -> Envelope {
        let params = ScrapeParams {
            formats: Some(vec![Format::Json]),
            json_options: Some(JsonOptions { schema: Some(schema.as_value().clone()), ..Default::default() }),
            ..Default::default()
        };
        tracing::debug!(url, "structured extract");

        let echo = Echo::Url(url.to_string());
        match self.provider.scrape_url(url, &params).await {
            Ok(payload) => Envelope::success(take_field(take_field(payload, "data"), "json"), echo),
            Err(e) => failure("structured extract", e, echo),
        }
    }

    /// Search, scraping every hit with the default formats.
    pub async fn search_and_scrape(&self, query: &str, max_results: Option<u32>) -> Envelope {
        let params = SearchParams {
            limit: max_results.unwrap_or(DEFAULT_MAX_RESULTS),
            scrape_options: Some(self.config.default_scrape_params()),
        };
        tracing::debug!(query, limit = params.limit, "search");

        let echo = Echo::Query(query.to_string());
        match self.provider.search(query, &params).await {
            Ok(payload) => Envelope::success(payload, echo),
            Err(e) => failure("search", e, echo),
        }
    }
}

/// Nested `field` of an object payload, or the payload itself.
fn take_field(payload: Value, field: &str) -> Value {
    match payload {
        Value::Object(mut map) if map.contains_key(field) => map.remove(field).unwrap_or(Value::Null),
        other => other,
    }
}

fn failure(operation: &str, err: Error, echo: Echo) -> Envelope {
    tracing::warn!(operation, code = err.code(), "provider call failed: {}", err);
    Envelope::failure(err.to_string(), echo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Scrape(String, ScrapeParams),
        Batch(Vec<String>, ScrapeParams),
        Search(String, SearchParams),
    }

    /// Deterministic provider that records every call.
    struct StubProvider {
        response: Result<Value, Error>,
        calls: Mutex<Vec<Call>>,
    }

    impl StubProvider {
        fn ok(payload: Value) -> Arc<Self> {
            Arc::new(Self { response: Ok(payload), calls: Mutex::new(Vec::new()) })
        }

        fn failing(err: Error) -> Arc<Self> {
            Arc::new(Self { response: Err(err), calls: Mutex::new(Vec::new()) })
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ScrapeProvider for StubProvider {
        async fn scrape_url(&self, url: &str, params: &ScrapeParams) -> Result<Value, Error> {
            self.calls.lock().unwrap().push(Call::Scrape(url.into(), params.clone()));
            self.response.clone()
        }

        async fn batch_scrape(&self, urls: &[String], params: &ScrapeParams) -> Result<Value, Error> {
            self.calls.lock().unwrap().push(Call::Batch(urls.to_vec(), params.clone()));
            self.response.clone()
        }

        async fn search(&self, query: &str, params: &SearchParams) -> Result<Value, Error> {
            self.calls.lock().unwrap().push(Call::Search(query.into(), params.clone()));
            self.response.clone()
        }
    }

    fn adapter(provider: Arc<StubProvider>) -> Adapter {
        Adapter::new(provider, Arc::new(AppConfig { api_key: Some("test_key".into()), ..Default::default() }))
    }

    #[tokio::test]
    async fn test_scrape_one_success_unwraps_data() {
        let provider = StubProvider::ok(json!({"success": true, "data": {"markdown": "# Example"}}));
        let envelope = adapter(provider.clone()).scrape_one("https://example.com", None).await;

        assert!(envelope.is_success());
        assert_eq!(envelope.echo, Echo::Url("https://example.com".into()));
        assert_eq!(envelope.data(), Some(&json!({"markdown": "# Example"})));
        assert_eq!(
            provider.calls(),
            vec![Call::Scrape(
                "https://example.com".into(),
                ScrapeParams::with_formats(vec![Format::Markdown, Format::Html])
            )]
        );
    }

    #[tokio::test]
    async fn test_scrape_one_raw_payload_without_data_field() {
        let provider = StubProvider::ok(json!({"markdown": "plain"}));
        let envelope = adapter(provider).scrape_one("https://example.com", None).await;

        assert_eq!(envelope.data(), Some(&json!({"markdown": "plain"})));
    }

    #[tokio::test]
    async fn test_scrape_one_failure() {
        let provider = StubProvider::failing(Error::ProviderAuth("authentication failed".into()));
        let envelope = adapter(provider).scrape_one("https://example.com", None).await;

        assert!(!envelope.is_success());
        assert_eq!(envelope.echo, Echo::Url("https://example.com".into()));
        assert!(envelope.error().unwrap().contains("PROVIDER_AUTH"));
    }

    #[tokio::test]
    async fn test_caller_formats_override_exactly() {
        let provider = StubProvider::ok(json!({"data": {}}));
        let params = ScrapeParams { formats: Some(vec![Format::Links]), mobile: Some(true), ..Default::default() };
        adapter(provider.clone()).scrape_one("https://example.com", Some(params.clone())).await;

        assert_eq!(provider.calls(), vec![Call::Scrape("https://example.com".into(), params)]);
    }

    #[tokio::test]
    async fn test_scrape_one_is_idempotent() {
        let provider = StubProvider::ok(json!({"data": {"markdown": "same"}}));
        let adapter = adapter(provider);

        let first = adapter.scrape_one("https://example.com", None).await;
        let second = adapter.scrape_one("https://example.com", None).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_scrape_many_echoes_urls() {
        let payload = json!({"status": "completed", "data": [{"markdown": "a"}, {"markdown": "b"}]});
        let provider = StubProvider::ok(payload.clone());
        let urls = vec!["https://example.com".to_string(), "https://example.org".to_string()];

        let envelope = adapter(provider.clone()).scrape_many(&urls, None).await;

        assert!(envelope.is_success());
        assert_eq!(envelope.echo, Echo::Urls(urls.clone()));
        assert_eq!(envelope.data(), Some(&payload));
        assert_eq!(
            provider.calls(),
            vec![Call::Batch(urls, ScrapeParams::with_formats(vec![Format::Markdown, Format::Html]))]
        );
    }

    #[tokio::test]
    async fn test_scrape_many_failure_is_all_or_nothing() {
        let provider = StubProvider::failing(Error::ProviderFailed("batch job failed".into()));
        let urls = vec!["https://example.com".to_string()];

        let envelope = adapter(provider).scrape_many(&urls, None).await;
        assert!(!envelope.is_success());
        assert!(envelope.data().is_none());
        assert_eq!(envelope.echo, Echo::Urls(urls));
    }

    #[tokio::test]
    async fn test_extract_structured_returns_json_field() {
        let provider = StubProvider::ok(json!({
            "success": true,
            "data": {"json": {"title": "Hello", "content": "World"}, "metadata": {}}
        }));
        let schema = StructuredSchema::from_fields(&[
            crate::FieldSpec::new("title", crate::FieldKind::String),
            crate::FieldSpec::new("content", crate::FieldKind::String),
        ]);

        let envelope = adapter(provider.clone()).extract_structured("https://example.com", &schema).await;

        assert!(envelope.is_success());
        assert_eq!(envelope.data(), Some(&json!({"title": "Hello", "content": "World"})));

        let calls = provider.calls();
        let Call::Scrape(url, params) = &calls[0] else { panic!("expected a scrape call") };
        assert_eq!(url, "https://example.com");
        assert_eq!(params.formats, Some(vec![Format::Json]));
        assert_eq!(params.json_options.as_ref().and_then(|o| o.schema.as_ref()), Some(schema.as_value()));
    }

    #[tokio::test]
    async fn test_extract_structured_falls_back_to_raw_payload() {
        let provider = StubProvider::ok(json!({"data": {"markdown": "no json here"}}));
        let schema = StructuredSchema::from_fields(&[crate::FieldSpec::new("title", crate::FieldKind::String)]);

        let envelope = adapter(provider).extract_structured("https://example.com", &schema).await;
        assert_eq!(envelope.data(), Some(&json!({"markdown": "no json here"})));
    }

    #[tokio::test]
    async fn test_extract_structured_without_data_field() {
        let schema = StructuredSchema::from_fields(&[crate::FieldSpec::new("title", crate::FieldKind::String)]);

        let provider = StubProvider::ok(json!({"title": "Example Domain"}));
        let envelope = adapter(provider).extract_structured("https://example.com", &schema).await;
        assert!(envelope.is_success());
        assert_eq!(envelope.data(), Some(&json!({"title": "Example Domain"})));

        let provider = StubProvider::ok(json!({"json": {"title": "Example Domain"}}));
        let envelope = adapter(provider).extract_structured("https://example.com", &schema).await;
        assert_eq!(envelope.data(), Some(&json!({"title": "Example Domain"})));
    }

    #[tokio::test]
    async fn test_search_defaults_to_five_results() {
        let provider = StubProvider::ok(json!({"success": true, "data": []}));
        let envelope = adapter(provider.clone()).search_and_scrape("test query", None).await;

        assert!(envelope.is_success());
        assert_eq!(envelope.echo, Echo::Query("test query".into()));
        assert_eq!(
            provider.calls(),
            vec![Call::Search(
                "test query".into(),
                SearchParams {
                    limit: 5,
                    scrape_options: Some(ScrapeParams::with_formats(vec![Format::Markdown, Format::Html]))
                }
            )]
        );
    }

    #[tokio::test]
    async fn test_search_failure() {
        let provider = StubProvider::failing(Error::ProviderTimeout("request timeout".into()));
        let envelope = adapter(provider).search_and_scrape("test query", Some(2)).await;

        assert!(!envelope.is_success());
        assert!(!envelope.error().unwrap().is_empty());
        assert_eq!(envelope.echo, Echo::Query("test query".into()));
    }
}
