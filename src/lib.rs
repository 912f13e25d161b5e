//! # tunerelay
//!
//! A minimal backend relay for the Spotify Web API. Browser clients call
//! the two relay endpoints; the service injects a server-side bearer
//! token obtained via the OAuth client-credentials flow and passes the
//! catalog's JSON response through verbatim.
//!
//! ## Endpoints
//!
//! - `GET /search?q=<text>` - track/playlist search, capped at 10 results
//! - `GET /audio-features/:id` - per-track audio-feature lookup
//! - `GET /health` - liveness check
//!
//! Any failure (auth, upstream, network) collapses to a
//! `500 {"error": <message>}` response; see [`error`] for the policy.
//!
//! ## Architecture
//!
//! ```text
//! inbound request → TokenProvider (cached exchange) → SpotifyClient → relay
//! ```
//!
//! Credentials are read once at startup into an immutable [`config::Config`];
//! the token cache in [`auth`] is the only shared state between requests.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types and the outward error policy
pub mod error;

/// Environment-sourced configuration
pub mod config;

/// OAuth2 client-credentials token provider
pub mod auth;

/// Upstream catalog client
pub mod spotify;

/// HTTP surface
pub mod server;

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
