//! Caro - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use caro::{CaroConfig, run_tui};
use clap::Parser;
use cli::Cli;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(&cli.log_file)?;

    let config = load_config(&cli.config)?;
    run_tui(&config).await
}

/// Logs go to a file so they don't interfere with the TUI.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    info!("Tracing initialized");
    Ok(())
}

#[instrument(skip(path), fields(path = %path.display()))]
fn load_config(path: &Path) -> Result<CaroConfig> {
    let config = CaroConfig::load_or_default(path)?;
    info!(
        computer_delay_ms = config.game().computer_delay_ms(),
        sound = config.sound().enabled(),
        "Configuration ready"
    );
    Ok(config)
}
