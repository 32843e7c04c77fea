//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_response` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Ctrl-C handling in monitor mode
//!
//! All probing is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use url_response::{build_renderers, init_logger_with, run_monitor, run_once, Mode, Opt};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("url_response error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Optional .env, e.g. RUST_LOG
    let _ = dotenvy::dotenv();

    let config = Opt::parse()
        .into_config()
        .context("Invalid configuration")?;

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let mut renderers = build_renderers(&config)?;

    match config.mode {
        Mode::Once => {
            run_once(&config, &mut renderers).await?;
        }
        Mode::Monitor => {
            let ctrl_c = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    log::error!("Failed to listen for Ctrl-C: {e}");
                    std::future::pending::<()>().await;
                }
            };
            run_monitor(&config, renderers, ctrl_c).await?;
        }
    }

    Ok(())
}
