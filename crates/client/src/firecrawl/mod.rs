//! Firecrawl API client.
//!
//! Thin REST client for the Firecrawl v1 API. It performs no scraping of its
//! own; every call is forwarded to the provider and the JSON body is returned.
//!
//! ### API
//!
//! - **Endpoint**: `https://api.firecrawl.dev/v1`
//! - **Authentication**: `Authorization: Bearer <key>` header.
//! - **Batch jobs**: started with `POST /batch/scrape`, polled with
//!   `GET /batch/scrape/{id}` until completed, then paginated through `next`
//!   links up to a page limit.
//! - **Errors**: 401/403, 402, 429 and timeouts map to dedicated variants;
//!   bodies carrying `success: false` are failures even on a 2xx status.

pub mod error;
pub mod request;
pub mod response;

pub use error::FirecrawlError;
pub use request::{BatchScrapeRequest, ScrapeRequest, SearchRequest};
pub use response::{BatchJobStatus, BatchStatusResponse};

use async_trait::async_trait;
use reqwest::{RequestBuilder, header};
use scrapegate_core::{AppConfig, Error, ScrapeParams, ScrapeProvider, SearchParams};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use url::Url;

use response::{ApiErrorBody, BatchStartResponse, ensure_success};

/// Default base URL for the Firecrawl API.
const DEFAULT_BASE_URL: &str = "https://api.firecrawl.dev/v1";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "scrapegate/0.1";

/// Firecrawl client configuration.
#[derive(Debug, Clone)]
pub struct FirecrawlConfig {
    /// API key from FIRECRAWL_API_KEY.
    pub api_key: String,
    /// Base URL (default: https://api.firecrawl.dev/v1).
    pub base_url: String,
    /// Per-request timeout (default: 30s).
    pub timeout: Duration,
    /// User-agent string.
    pub user_agent: String,
    /// Delay between batch status polls (default: 2s).
    pub poll_interval: Duration,
    /// How long to wait for a batch job (default: 5 minutes).
    pub batch_max_wait: Duration,
    /// Maximum number of batch result pages to follow (default: 10).
    pub max_pages: u32,
}

impl Default for FirecrawlConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            poll_interval: Duration::from_secs(2),
            batch_max_wait: Duration::from_secs(300),
            max_pages: 10,
        }
    }
}

impl FirecrawlConfig {
    /// Build the client configuration from the loaded application config.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FirecrawlError> {
        let api_key = config
            .require_api_key()
            .map_err(|_| FirecrawlError::MissingApiKey)?;

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: config.api_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
            poll_interval: config.poll_interval(),
            batch_max_wait: config.batch_max_wait(),
            max_pages: config.max_pages,
        })
    }
}

/// Firecrawl API client.
#[derive(Debug, Clone)]
pub struct FirecrawlClient {
    http: reqwest::Client,
    config: FirecrawlConfig,
}

impl FirecrawlClient {
    /// Create a new Firecrawl client with the given configuration.
    pub fn new(config: FirecrawlConfig) -> Result<Self, FirecrawlError> {
        if config.api_key.trim().is_empty() {
            return Err(FirecrawlError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FirecrawlError::Network(Arc::new(e)))?;

        Ok(Self { http, config })
    }

    /// Create a new Firecrawl client from the application config.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FirecrawlError> {
        Self::new(FirecrawlConfig::from_app_config(config)?)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Scrape a single URL and return the raw response body.
    pub async fn scrape(&self, url: &str, params: &ScrapeParams) -> Result<Value, FirecrawlError> {
        let req = ScrapeRequest { url, params };
        req.validate()?;

        tracing::debug!("scraping via Firecrawl: url={}", url);

        let body: Value = self.execute(self.http.post(self.endpoint("scrape")).json(&req)).await?;
        ensure_success(&body)?;
        Ok(body)
    }

    /// Run a batch scrape job to completion.
    ///
    /// Starts the job, polls until it completes, then follows `next` links
    /// (up to `max_pages` pages in total) and concatenates their `data`.
    pub async fn batch_scrape(
        &self, urls: &[String], params: &ScrapeParams,
    ) -> Result<BatchStatusResponse, FirecrawlError> {
        let req = BatchScrapeRequest { urls, params };
        req.validate()?;

        let body: Value = self
            .execute(self.http.post(self.endpoint("batch/scrape")).json(&req))
            .await?;
        ensure_success(&body)?;
        let job: BatchStartResponse =
            serde_json::from_value(body).map_err(|e| FirecrawlError::Parse(e.to_string()))?;

        tracing::debug!("batch job {} started for {} urls", job.id, urls.len());

        let status = self.wait_for_batch(&job.id).await?;
        self.collect_pages(status).await
    }

    async fn wait_for_batch(&self, id: &str) -> Result<BatchStatusResponse, FirecrawlError> {
        let status_url = self.endpoint(&format!("batch/scrape/{id}"));
        let deadline = Instant::now() + self.config.batch_max_wait;

        loop {
            let status: BatchStatusResponse = self.execute(self.http.get(&status_url)).await?;

            match status.status {
                BatchJobStatus::Completed => return Ok(status),
                BatchJobStatus::Failed | BatchJobStatus::Cancelled => {
                    return Err(FirecrawlError::JobFailed {
                        id: id.to_string(),
                        status: status.status.as_str().to_string(),
                    });
                }
                BatchJobStatus::Scraping | BatchJobStatus::Unknown => {}
            }

            if Instant::now() + self.config.poll_interval > deadline {
                return Err(FirecrawlError::BatchTimeout { id: id.to_string() });
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    async fn collect_pages(&self, mut first: BatchStatusResponse) -> Result<BatchStatusResponse, FirecrawlError> {
        let mut pages = 1;
        let mut next = first.next.take();

        while let Some(next_url) = next {
            if pages >= self.config.max_pages {
                tracing::warn!("batch result truncated after {} pages", pages);
                break;
            }
            if !self.same_origin(&next_url) {
                tracing::warn!("not following batch page on foreign origin: {}", next_url);
                break;
            }

            let page: BatchStatusResponse = self.execute(self.http.get(&next_url)).await?;
            first.data.extend(page.data);
            next = page.next;
            pages += 1;
        }

        Ok(first)
    }

    /// The API key is only ever sent back to the configured API origin.
    fn same_origin(&self, url: &str) -> bool {
        match (Url::parse(url), Url::parse(&self.config.base_url)) {
            (Ok(a), Ok(b)) => a.origin() == b.origin(),
            _ => false,
        }
    }

    /// Search the web and scrape each hit.
    pub async fn search(&self, query: &str, params: &SearchParams) -> Result<Value, FirecrawlError> {
        let req = SearchRequest { query, params };
        req.validate()?;

        tracing::debug!("searching via Firecrawl: query={} limit={}", query, params.limit);

        let body: Value = self.execute(self.http.post(self.endpoint("search")).json(&req)).await?;
        ensure_success(&body)?;
        Ok(body)
    }

    /// Send an authenticated request and decode the JSON body.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, FirecrawlError> {
        let start = std::time::Instant::now();

        let http_response = request
            .bearer_auth(&self.config.api_key)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("Firecrawl API response status: {} in {:?}", status, start.elapsed());

        if status == 401 || status == 403 {
            return Err(FirecrawlError::AuthError);
        }

        if status == 429 {
            return Err(FirecrawlError::RateLimited);
        }

        if status == 408 {
            return Err(FirecrawlError::Timeout);
        }

        let bytes = http_response.bytes().await?;

        if status == 402 {
            return Err(FirecrawlError::PaymentRequired(ApiErrorBody::message_from(status, &bytes)));
        }

        if status.is_client_error() || status.is_server_error() {
            return Err(FirecrawlError::HttpError {
                status: status.as_u16(),
                message: ApiErrorBody::message_from(status, &bytes),
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| FirecrawlError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ScrapeProvider for FirecrawlClient {
    async fn scrape_url(&self, url: &str, params: &ScrapeParams) -> Result<Value, Error> {
        Ok(self.scrape(url, params).await?)
    }

    async fn batch_scrape(&self, urls: &[String], params: &ScrapeParams) -> Result<Value, Error> {
        let status = FirecrawlClient::batch_scrape(self, urls, params).await?;
        serde_json::to_value(status).map_err(|e| Error::ProviderParse(e.to_string()))
    }

    async fn search(&self, query: &str, params: &SearchParams) -> Result<Value, Error> {
        Ok(FirecrawlClient::search(self, query, params).await?)
    }
}
