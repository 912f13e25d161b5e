//! Error types for tunerelay
//!
//! This module defines the error hierarchy for the whole service.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Outward policy: every failure that reaches a request handler collapses
//! into a `500 {"error": <message>}` response via the [`IntoResponse`]
//! impl at the bottom of this file. Upstream status codes survive only
//! inside the message string.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// The main error type for tunerelay
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required environment variable: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // Upstream Errors
    // ============================================================================
    #[error("Upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an upstream error
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }
}

/// Boundary translator: the one place that decides the outward status/body.
///
/// Auth, upstream and network failures all flatten to a 500 with a
/// message-only JSON body. Handlers return `Result<_, Error>` and never
/// build error responses themselves.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Result type alias for tunerelay
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("SPOTIFY_CLIENT_ID");
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: SPOTIFY_CLIENT_ID"
        );

        let err = Error::auth("bad credentials");
        assert_eq!(err.to_string(), "Authentication failed: bad credentials");
    }

    #[test_case(404, "not found" ; "not found")]
    #[test_case(429, "rate limited" ; "rate limited")]
    #[test_case(500, "server error" ; "server error")]
    fn test_upstream_error_keeps_status_context(status: u16, body: &str) {
        let err = Error::upstream(status, body);
        let msg = err.to_string();
        assert!(msg.contains(&status.to_string()));
        assert!(msg.contains(body));
    }

    #[tokio::test]
    async fn test_into_response_collapses_to_500() {
        let response = Error::upstream(404, "no such track").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().contains("404"));
    }
}
