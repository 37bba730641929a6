//! Interactive strategy driven by console input.

use super::MoveStrategy;
use crate::console::Console;
use crate::game::{Board, Mark, Position, SelectionError};
use anyhow::Result;
use tracing::{debug, instrument};

/// Parses and validates one line of input as a square selection.
///
/// Accepts a number from 1 to 9 addressing a currently empty square.
/// Rejections carry the reason shown to the player; re-prompting is the
/// caller's control flow, not an exception path.
pub fn parse_selection(line: &str, board: &Board) -> Result<Position, SelectionError> {
    let number = line
        .trim()
        .parse::<u64>()
        .map_err(|_| SelectionError::InvalidInput)?;
    let pos = Position::from_number(number).ok_or(SelectionError::InvalidInput)?;
    if board.is_empty(pos) {
        Ok(pos)
    } else {
        Err(SelectionError::Occupied)
    }
}

/// Human player: prompts through the console until a valid selection
/// arrives.
pub struct HumanStrategy {
    name: String,
}

impl HumanStrategy {
    /// Creates a human strategy prompting under the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MoveStrategy for HumanStrategy {
    /// Blocks on input. Invalid attempts re-prompt with their reason and
    /// never abort the loop.
    #[instrument(skip_all, fields(player = %self.name, mark = %mark))]
    fn choose(
        &mut self,
        board: &mut Board,
        mark: Mark,
        console: &mut dyn Console,
    ) -> Result<Position> {
        let prompt = format!("Your move, {}. Select a square (1-9):", self.name);
        loop {
            let input = console.read_line(&prompt)?;
            match parse_selection(&input, board) {
                Ok(pos) => {
                    debug!(position = %pos, "selection accepted");
                    board.set(pos, mark);
                    return Ok(pos);
                }
                Err(reason) => {
                    debug!(input = %input, %reason, "selection rejected");
                    console.line(&reason.to_string())?;
                }
            }
        }
    }
}
