mod cli;
mod commands;
mod config;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::CliConfig;

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    // Load config; its diagnostics wait for the subscriber below
    let loaded = CliConfig::load(args.config.as_deref())
        .context("failed to load configuration")?;
    let config = &loaded.config;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    loaded.log();

    let format = config.resolve_format(args.format);
    debug!(?format, command = ?args.command, "running command");

    commands::execute(args.command, format)
}
