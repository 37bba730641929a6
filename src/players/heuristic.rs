//! Heuristic computer strategy: win, block, or pick at random.

use super::MoveStrategy;
use crate::console::Console;
use crate::game::{Board, Mark, Position};
use anyhow::Result;
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer player using a two-in-a-row heuristic.
///
/// Decision ladder, first applicable rule wins:
/// 1. take a square that completes its own three-in-a-row,
/// 2. take a square that blocks the opponent's imminent three-in-a-row,
/// 3. take a uniformly random empty square.
///
/// The first two rules are deterministic for a given board; randomness only
/// enters as the last resort.
pub struct HeuristicStrategy {
    pause: Duration,
}

impl HeuristicStrategy {
    /// Creates a computer strategy with the given pacing pause.
    ///
    /// The pause is applied around each move for perceived turn pacing
    /// only; `Duration::ZERO` disables it without changing outcomes.
    pub fn new(pause: Duration) -> Self {
        Self { pause }
    }
}

impl MoveStrategy for HeuristicStrategy {
    #[instrument(skip_all, fields(mark = %mark))]
    fn choose(
        &mut self,
        board: &mut Board,
        mark: Mark,
        console: &mut dyn Console,
    ) -> Result<Position> {
        console.pause(self.pause);

        let pos = if let Some(win) = board.winning_position(mark) {
            debug!(position = %win, "taking the winning square");
            win
        } else if let Some(block) = board.blocking_position(mark) {
            debug!(position = %block, "blocking the opponent");
            block
        } else {
            let open = board.random_empty_position()?;
            debug!(position = %open, "no threats, playing at random");
            open
        };

        board.set(pos, mark);
        console.pause(self.pause);
        Ok(pos)
    }
}
