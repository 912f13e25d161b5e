//! Tests for the catalog client

use super::*;
use crate::auth::TokenProvider;
use crate::config::Config;
use crate::error::Error;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Stub token endpoint returning `abc123`, plus a client pointed at it
async fn stubbed_client(api_server: &MockServer) -> (SpotifyClient, MockServer) {
    let token_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "abc123",
            "expires_in": 3600
        })))
        .mount(&token_server)
        .await;

    let config = Config {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        token_url: format!("{}/api/token", token_server.uri()),
        api_url: api_server.uri(),
        port: 0,
    };

    let auth = Arc::new(TokenProvider::new(&config));
    (SpotifyClient::new(&config, auth), token_server)
}

#[tokio::test]
async fn test_search_request_shape() {
    let api_server = MockServer::start().await;
    let (client, _token_server) = stubbed_client(&api_server).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Daft Punk"))
        .and(query_param("type", "track,playlist"))
        .and(query_param("limit", "10"))
        .and(header("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": { "items": [] },
            "playlists": { "items": [] }
        })))
        .expect(1)
        .mount(&api_server)
        .await;

    let body = client.search("Daft Punk").await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(parsed["tracks"]["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_body_is_relayed_verbatim() {
    let api_server = MockServer::start().await;
    let (client, _token_server) = stubbed_client(&api_server).await;

    // Key order that serde_json's default map would re-sort
    let raw = r#"{"tracks":{"items":[{"name":"Zulu","id":"1"}]},"playlists":{"items":[]}}"#;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(raw, "application/json"))
        .mount(&api_server)
        .await;

    let body = client.search("zulu").await.unwrap();
    assert_eq!(body, raw);
}

#[tokio::test]
async fn test_search_passes_query_through_unmodified() {
    let api_server = MockServer::start().await;
    let (client, _token_server) = stubbed_client(&api_server).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "  spaces & symbols?  "))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&api_server)
        .await;

    client.search("  spaces & symbols?  ").await.unwrap();
}

#[tokio::test]
async fn test_audio_features_request_shape() {
    let api_server = MockServer::start().await;
    let (client, _token_server) = stubbed_client(&api_server).await;

    Mock::given(method("GET"))
        .and(path("/audio-features/11dFghVXANMlKmJXsNCbNl"))
        .and(header("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "danceability": 0.735,
            "energy": 0.578
        })))
        .expect(1)
        .mount(&api_server)
        .await;

    let body = client.audio_features("11dFghVXANMlKmJXsNCbNl").await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["danceability"], 0.735);
}

#[tokio::test]
async fn test_upstream_error_carries_status_and_body() {
    let api_server = MockServer::start().await;
    let (client, _token_server) = stubbed_client(&api_server).await;

    Mock::given(method("GET"))
        .and(path("/audio-features/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "status": 404, "message": "analysis not found" }
        })))
        .mount(&api_server)
        .await;

    let err = client.audio_features("nope").await.unwrap_err();
    match err {
        Error::Upstream { status, ref body } => {
            assert_eq!(status, 404);
            assert!(body.contains("analysis not found"));
        }
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_token_failure_short_circuits_catalog_call() {
    let api_server = MockServer::start().await;

    // Catalog must never be hit when the token exchange fails
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&api_server)
        .await;

    let token_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&token_server)
        .await;

    let config = Config {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        token_url: format!("{}/api/token", token_server.uri()),
        api_url: api_server.uri(),
        port: 0,
    };
    let auth = Arc::new(TokenProvider::new(&config));
    let client = SpotifyClient::new(&config, auth);

    let err = client.search("anything").await.unwrap_err();
    assert!(matches!(err, Error::Auth { .. }));
}
