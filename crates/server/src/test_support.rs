//! Shared helpers for route tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use scrapegate_core::{Adapter, AppConfig, Error, ScrapeParams, ScrapeProvider, SearchParams};
use serde_json::Value;
use tower::ServiceExt;

use crate::handler::AppState;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Scrape(String, ScrapeParams),
    Batch(Vec<String>, ScrapeParams),
    Search(String, SearchParams),
}

/// Provider returning a fixed response and recording every call.
pub struct StubProvider {
    response: Result<Value, Error>,
    calls: Mutex<Vec<Call>>,
}

impl StubProvider {
    pub fn ok(payload: Value) -> Arc<Self> {
        Arc::new(Self { response: Ok(payload), calls: Mutex::new(Vec::new()) })
    }

    pub fn failing(err: Error) -> Arc<Self> {
        Arc::new(Self { response: Err(err), calls: Mutex::new(Vec::new()) })
    }

    pub fn calls(&self) -> Vec<Call> {
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

pub fn state_with(provider: Arc<StubProvider>) -> AppState {
    let config = Arc::new(AppConfig { api_key: Some("test_key".into()), ..Default::default() });
    AppState::new(Some(Adapter::new(provider, config)))
}

/// Send a request with an optional JSON body and decode the JSON response.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    };

    send_request(app, request.unwrap()).await
}

pub async fn send_request(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
