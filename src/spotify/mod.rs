//! Spotify Web API client
//!
//! A thin bearer-authorized client for the two catalog operations the
//! service relays: track/playlist search and per-track audio features.
//! Response bodies are passed through verbatim; this module never parses
//! or reshapes catalog JSON.

mod client;

pub use client::SpotifyClient;

#[cfg(test)]
mod tests;
