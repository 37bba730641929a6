//! Command-line interface.
//!
//! Gameplay needs no flags; everything here is presentation or
//! diagnostics.

use clap::Parser;
use std::path::PathBuf;

/// Console tic-tac-toe against a heuristic computer opponent.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_console")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Pacing delay around computer moves, in milliseconds. Zero disables
    /// pacing without changing any outcome.
    #[arg(long, default_value_t = 800)]
    pub delay_ms: u64,

    /// Write tracing output to this file instead of stderr, keeping log
    /// lines out of the board rendering.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
