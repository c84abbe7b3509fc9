//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `location_api` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use location_api::initialization::{init_logger_with, load_dotenv};
use location_api::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Variables from .env apply to clap's `env` fallbacks, so load them first
    load_dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        log::error!("Server failed: {e:#}");
        eprintln!("location_api error: {e:#}");
        process::exit(1);
    }

    Ok(())
}
