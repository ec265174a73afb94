#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod command;
mod config;
mod telemetry;

use std::process;

use anyhow::Context;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "prepmate_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "prepmate_cli::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "prepmate_cli::config";
pub const TRACING_TARGET_COMMAND: &str = "prepmate_cli::command";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %format!("{error:#}"),
            "command failed"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    telemetry::init_tracing().context("failed to initialize telemetry")?;
    cli.log();
    cli.validate()?;

    cli.command.execute(&cli).await
}
