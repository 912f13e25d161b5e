//! tunerelay binary
//!
//! Single long-running process: load config from the environment, wire
//! the token provider and catalog client, serve on the configured port.

use std::sync::Arc;

use tunerelay::auth::TokenProvider;
use tunerelay::config::Config;
use tunerelay::server::{self, AppState};
use tunerelay::spotify::SpotifyClient;

#[tokio::main]
async fn main() {
    // Credentials may live in a local .env during development
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> tunerelay::Result<()> {
    let config = Config::from_env()?;

    let auth = Arc::new(TokenProvider::new(&config));
    let state = Arc::new(AppState {
        spotify: SpotifyClient::new(&config, auth),
    });

    server::serve(state, config.port).await
}
