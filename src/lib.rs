//! Console tic-tac-toe against a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **game**: the 3x3 board, marks, positions, and win/block detection
//! - **players**: interchangeable move strategies (interactive, heuristic)
//! - **orchestrator**: the match controller alternating turns to an outcome
//! - **session**: players, cumulative scores, and the repeat-match loop
//! - **console**: the display/input collaborator behind a trait seam
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_console::{HeuristicStrategy, Mark, Player, Session, Terminal};
//! use std::time::Duration;
//!
//! # fn example() -> anyhow::Result<()> {
//! let x = Player::new("Ada", Mark::X, Box::new(HeuristicStrategy::new(Duration::ZERO)));
//! let o = Player::new("Computer", Mark::O, Box::new(HeuristicStrategy::new(Duration::ZERO)));
//! Session::new(x, o).play(&mut Terminal::new())?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod console;
pub mod game;
pub mod orchestrator;
pub mod players;
pub mod session;

// Crate-level exports - board model
pub use game::{Board, BoardError, Mark, Position, SelectionError, Square, WIN_GROUPS};

// Crate-level exports - strategies
pub use players::{HeuristicStrategy, HumanStrategy, MoveStrategy};

// Crate-level exports - match control and session state
pub use orchestrator::{run_match, MatchOutcome};
pub use session::{Player, Session};

// Crate-level exports - terminal collaborator
pub use console::{render_board, Console, Terminal};
