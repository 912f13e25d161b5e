//! HTTP server for the relay endpoints
//!
//! Wires the router, permissive CORS, request tracing and the shared app
//! state, then serves until the process is stopped.

use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::spotify::SpotifyClient;

mod routes;


/// App state shared across handlers
pub struct AppState {
    /// Upstream catalog client (owns the token provider)
    pub spotify: SpotifyClient,
}

/// Build the application router
pub fn app(state: Arc<AppState>) -> Router {
    // Allow all origins - the relay exists so browser clients can call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route("/search", get(routes::search))
        .route("/audio-features/:id", get(routes::audio_features))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve until shutdown
pub async fn serve(state: Arc<AppState>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app(state))
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}
