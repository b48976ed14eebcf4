//! Kalah game server.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use kalah::{GameService, InMemoryGameStorage, ServerConfig, http};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?.with_overrides(
        cli.host,
        cli.port,
        cli.public_url,
    );

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    let service = Arc::new(GameService::new(InMemoryGameStorage::new()));
    let app = http::router(service, config.base_url());

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(address = %config.bind_address(), public_url = %config.base_url(), "Kalah server ready");

    axum::serve(listener, app).await?;

    Ok(())
}
