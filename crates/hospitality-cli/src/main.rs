//! Hospitality Ops CLI - a terminal front end for the operations core.
//!
//! This application prints sector views, payroll runs, procurement
//! suggestions and kitchen queues from the locally stored collections, and
//! asks the AI service for agendas, social insights and shift plans.

mod args;
mod commands;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hospitality_core::Config;

use args::Cli;

/// Log file name prefix inside the configured log directory
const LOG_FILE_PREFIX: &str = "hospitality.log";

/// Initialize the tracing subscriber for logging.
/// The returned guard must live until exit so buffered file logs flush.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // clap prints usage and exits with status 2 on bad arguments
    let cli = Cli::parse();

    let config = Config::load()?;
    let _guard = init_tracing(config.log_dir.as_deref());
    info!(command = ?cli.command, "hospitality starting");

    commands::run(cli.command, config).await
}
