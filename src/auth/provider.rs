//! Token provider implementation
//!
//! Performs the client-credentials exchange and manages the shared token
//! cache.

use super::types::{CachedToken, TokenResponse};
use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Acquires and caches bearer tokens for the upstream catalog API.
///
/// The exchange is a form-encoded POST to the token endpoint with
/// `grant_type=client_credentials`, authenticated via HTTP Basic auth
/// with the configured client id/secret.
pub struct TokenProvider {
    /// Token endpoint URL
    token_url: String,
    /// OAuth client identifier
    client_id: String,
    /// OAuth client secret
    client_secret: String,
    /// Cached token, refreshed when expired or absent
    cached_token: Arc<RwLock<Option<CachedToken>>>,
    /// HTTP client for token requests
    http_client: Client,
}

impl TokenProvider {
    /// Create a new provider from the service configuration
    pub fn new(config: &Config) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create a provider with a custom HTTP client
    pub fn with_client(config: &Config, http_client: Client) -> Self {
        Self {
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Get a valid bearer token, refreshing if necessary
    pub async fn token(&self) -> Result<String> {
        // Check if we have a valid cached token
        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired() {
                    return Ok(token.token.clone());
                }
            }
        }

        // Need to refresh - acquire write lock
        let mut cached = self.cached_token.write().await;

        // Double-check after acquiring write lock (another task might have refreshed)
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
        }

        debug!("token cache empty or expired, fetching a new token");
        let new_token = self.fetch_token().await?;
        let token_str = new_token.token.clone();
        *cached = Some(new_token);

        Ok(token_str)
    }

    /// Perform the client-credentials exchange
    async fn fetch_token(&self) -> Result<CachedToken> {
        let form = [("grant_type", "client_credentials")];

        let response = self
            .http_client
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::auth(format!("token endpoint unreachable: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::auth(format!(
                "token request failed with status {status}: {body}"
            )));
        }

        let token_response: TokenResponse = response.json().await.map_err(Error::Http)?;
        Ok(token_response.into_cached_token())
    }
}
