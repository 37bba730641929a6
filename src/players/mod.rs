//! Move strategies: interchangeable policies for deciding the next square.

mod heuristic;
mod human;

pub use heuristic::HeuristicStrategy;
pub use human::{parse_selection, HumanStrategy};

use crate::console::Console;
use crate::game::{Board, Mark, Position};
use anyhow::Result;

/// A policy that decides and places the next move for one side.
///
/// Implementations place the mark on the chosen square before returning,
/// so the board the match controller evaluates already reflects the move.
/// Strategies are selected at session setup and injected into the
/// controller.
pub trait MoveStrategy {
    /// Chooses a square for `mark`, places the mark there, and returns the
    /// position played.
    fn choose(
        &mut self,
        board: &mut Board,
        mark: Mark,
        console: &mut dyn Console,
    ) -> Result<Position>;
}
