//! `GET /health`.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::handler::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub scraper_initialized: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy", scraper_initialized: state.is_initialized() })
}
