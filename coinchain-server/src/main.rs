//! Coin type lookup HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Run with default config (config.toml in current directory)
//! cargo run -p coinchain-server --release
//!
//! # Run with custom config path and port
//! cargo run -p coinchain-server -- --config /path/to/config.toml --port 9000
//!
//! # Configure logging level
//! RUST_LOG=debug cargo run -p coinchain-server
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG` — Path to TOML configuration file (default: `config.toml`)
//! - `HOST` — Override bind address (default: `0.0.0.0`)
//! - `PORT` — Override port (default: `8787`)
//! - `RUST_LOG` — Log level filter (default: `info`)
//!
//! Variables may also be set in a `.env` file.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use coinchain::Resolver;
use tracing_subscriber::EnvFilter;

use coinchain_server::config::{Cli, ServerConfig};
use coinchain_server::handlers::lookup_router;
use coinchain_server::util::SigDown;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!("Server failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load(&cli)?;
    let registry = config.registry();
    tracing::info!(
        host = %config.host,
        port = config.port,
        chains = registry.len(),
        custom_chains = config.chains.len(),
        "Loaded configuration"
    );

    if registry.is_empty() {
        tracing::warn!("No chains configured — every lookup will report chain not found");
    }

    let app = lookup_router(Arc::new(Resolver::new(registry)));

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let sig_down = SigDown::try_new()?;
    let token = sig_down.cancellation_token();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { token.cancelled().await })
        .await?;
    sig_down.recv().await;

    tracing::info!("Server shut down gracefully");
    Ok(())
}
