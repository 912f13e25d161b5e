//! Catalog client implementation

use crate::auth::TokenProvider;
use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::Client;
use std::sync::Arc;
use tracing::warn;

/// Search is always restricted to these result types
const SEARCH_TYPES: &str = "track,playlist";

/// Search results are capped at this many entries per type
const SEARCH_LIMIT: u32 = 10;

/// Bearer-authorized client for the upstream catalog API.
///
/// Each operation acquires a token from the shared [`TokenProvider`]
/// (usually a cache hit) and performs one catalog request. Query text and
/// track identifiers pass through unmodified and unvalidated; upstream
/// decides validity.
pub struct SpotifyClient {
    /// Catalog API base URL (no trailing slash)
    api_url: String,
    /// Shared token provider
    auth: Arc<TokenProvider>,
    /// HTTP client for catalog requests
    http_client: Client,
}

impl SpotifyClient {
    /// Create a new client from the service configuration
    pub fn new(config: &Config, auth: Arc<TokenProvider>) -> Self {
        Self::with_client(config, auth, Client::new())
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(config: &Config, auth: Arc<TokenProvider>, http_client: Client) -> Self {
        Self {
            api_url: config.api_url.clone(),
            auth,
            http_client,
        }
    }

    /// Search the catalog for tracks and playlists matching `query`.
    ///
    /// Returns the raw JSON body from upstream on success.
    pub async fn search(&self, query: &str) -> Result<String> {
        let token = self.auth.token().await?;
        let limit = SEARCH_LIMIT.to_string();

        let response = self
            .http_client
            .get(format!("{}/search", self.api_url))
            .query(&[
                ("q", query),
                ("type", SEARCH_TYPES),
                ("limit", limit.as_str()),
            ])
            .bearer_auth(token)
            .send()
            .await?;

        Self::relay_body(response).await
    }

    /// Fetch audio features for a single track.
    ///
    /// Returns the raw JSON body from upstream on success.
    pub async fn audio_features(&self, track_id: &str) -> Result<String> {
        let token = self.auth.token().await?;

        let response = self
            .http_client
            .get(format!("{}/audio-features/{track_id}", self.api_url))
            .bearer_auth(token)
            .send()
            .await?;

        Self::relay_body(response).await
    }

    /// Relay a success body verbatim, or map a non-2xx status to a typed
    /// upstream error carrying the status and body.
    async fn relay_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "upstream catalog request failed");
            return Err(Error::upstream(status.as_u16(), body));
        }

        Ok(response.text().await?)
    }
}
