//! Verdict CLI
//!
//! Command-line interface for judging programs against test suites.

mod commands;
mod config;
mod suite;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "verdict")]
#[command(about = "Run programs against test suites on a remote execution backend", long_about = None)]
struct Cli {
    /// Execution backend URL
    #[arg(long, env = "VERDICT_BACKEND_URL", default_value = "http://localhost:2358")]
    backend_url: String,

    /// Execution backend auth token
    #[arg(long, env = "VERDICT_BACKEND_TOKEN", hide_env_values = true)]
    backend_token: Option<String>,

    /// Relay URL (submission store)
    #[arg(long, env = "VERDICT_RELAY_URL", default_value = "http://localhost:3000")]
    relay_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config {
        backend_url: cli.backend_url,
        backend_token: cli.backend_token.filter(|token| !token.is_empty()),
        relay_url: cli.relay_url,
    };

    handle_command(cli.command, &config).await
}
