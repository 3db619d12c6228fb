//! Sentiment HTTP Server Binary
//!
//! This is the main entry point for the sentiment analysis server.
//! It loads the configuration, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin sentiment-server
//!
//! # With an explicit configuration file
//! CONFIG_PATH=./sentiment.toml cargo run --bin sentiment-server
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG_PATH`: Configuration file (default: `sentiment.toml` if present)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `STATIC_DIR`: Directory for generated charts (default: static)
//! - `MAX_UPLOAD_BYTES`: Request body limit (default: 50 MiB)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use csv_sentiment::config::AppConfig;
use csv_sentiment::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting sentiment HTTP server");

    let config = AppConfig::load()?;
    let addr = config.bind_address()?;
    info!(
        "Charts are written to {}",
        config.storage.static_dir.display()
    );

    let state = AppState::new(config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
