//! Command-line interface for the kalah server.

use clap::Parser;
use std::path::PathBuf;

/// Kalah - six-pit mancala game server with a REST API
#[derive(Parser, Debug)]
#[command(name = "kalah")]
#[command(about = "Kalah game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Base URL used in response links (overrides config)
    #[arg(long)]
    pub public_url: Option<String>,
}
