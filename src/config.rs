//! Service configuration
//!
//! Configuration is environment-only: a [`Config`] is built once at process
//! start with [`Config::from_env`] and passed explicitly into the token
//! provider and catalog client. There is no ambient/global access and no
//! mutation after startup.
//!
//! A `.env` file in the working directory is honored when present (loaded
//! by `main` before `from_env` runs).

use crate::error::{Error, Result};
use std::env;
use url::Url;

/// Default Spotify token endpoint (client-credentials grant)
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Default Spotify Web API base URL
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Immutable service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth client identifier for the upstream catalog
    pub client_id: String,
    /// OAuth client secret for the upstream catalog
    pub client_secret: String,
    /// Token endpoint URL
    pub token_url: String,
    /// Catalog API base URL (no trailing slash)
    pub api_url: String,
    /// Port the HTTP listener binds to
    pub port: u16,
}

impl Config {
    /// Build the configuration from environment variables.
    ///
    /// `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` are required.
    /// `SPOTIFY_TOKEN_URL`, `SPOTIFY_API_URL` and `PORT` are optional
    /// overrides with production defaults.
    pub fn from_env() -> Result<Self> {
        let client_id = require("SPOTIFY_CLIENT_ID")?;
        let client_secret = require("SPOTIFY_CLIENT_SECRET")?;

        let token_url = optional("SPOTIFY_TOKEN_URL", DEFAULT_TOKEN_URL);
        let api_url = optional("SPOTIFY_API_URL", DEFAULT_API_URL);

        // Fail at startup on unusable URLs rather than on the first request.
        Url::parse(&token_url)?;
        Url::parse(&api_url)?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| Error::config(format!("PORT is not a valid port number: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            client_id,
            client_secret,
            token_url,
            api_url: api_url.trim_end_matches('/').to_string(),
            port,
        })
    }
}

fn require(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::missing_field(name)),
    }
}

fn optional(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
