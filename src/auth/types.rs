//! Token types for the client-credentials flow

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Cached bearer token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = Utc::now() + chrono::Duration::seconds(seconds);
        Self {
            token,
            expires_at: Some(expires_at),
        }
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false, // No expiration = never expires
        }
    }
}

/// JSON body returned by the token endpoint
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// The bearer token string
    pub access_token: String,
    /// Lifetime in seconds, as declared by the authorization server
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl TokenResponse {
    /// Convert into a cached token, stamping the expiry from `expires_in`
    pub fn into_cached_token(self) -> CachedToken {
        match self.expires_in {
            Some(seconds) => CachedToken::expires_in(self.access_token, seconds),
            None => CachedToken::new(self.access_token, None),
        }
    }
}
