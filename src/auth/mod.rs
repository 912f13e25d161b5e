//! Authentication module
//!
//! Implements the OAuth2 client-credentials flow against the upstream
//! authorization server. The [`TokenProvider`] caches the bearer token and
//! refreshes it only when expired or absent, so concurrent requests share
//! one token instead of each performing its own exchange.

mod provider;
mod types;

pub use provider::TokenProvider;
pub use types::{CachedToken, TokenResponse};
