//! Entry point for the console game.

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tictactoe_console::cli::Cli;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    info!(delay_ms = cli.delay_ms, "starting tictactoe_console");
    tictactoe_console::app::run(Duration::from_millis(cli.delay_ms))
}

/// Sends tracing to the given file, or to stderr with a quiet default
/// filter so log lines stay out of the board rendering.
fn init_tracing(log_file: Option<&std::path::Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
