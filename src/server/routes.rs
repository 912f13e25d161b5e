//! Request handlers
//!
//! Handlers return `Result<_, Error>`; the error's `IntoResponse` impl is
//! the single boundary that turns any failure into `500 {"error": ...}`.

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use super::AppState;
use crate::error::Result;

/// Query parameters for the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search text, forwarded to upstream as-is. A missing `q` is
    /// forwarded as an empty value; upstream decides validity.
    #[serde(default)]
    pub q: String,
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// `GET /search?q=<text>` - relay a track/playlist search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Response> {
    let body = state.spotify.search(&params.q).await?;
    Ok(relay(body))
}

/// `GET /audio-features/:id` - relay a per-track audio-feature lookup
pub async fn audio_features(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response> {
    let body = state.spotify.audio_features(&id).await?;
    Ok(relay(body))
}

/// Wrap an upstream JSON body without re-serializing it
fn relay(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
