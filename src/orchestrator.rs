//! Match controller: one playthrough from an empty board to an outcome.

use crate::console::Console;
use crate::game::{Board, Mark};
use crate::session::Player;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Terminal result of one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// The given mark completed three in a row.
    Won(Mark),
    /// The board filled with no line for either side.
    Draw,
}

/// Which seat the controller is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Player,
    Opponent,
}

impl Turn {
    fn other(self) -> Self {
        match self {
            Turn::Player => Turn::Opponent,
            Turn::Opponent => Turn::Player,
        }
    }
}

/// Runs one match on `board`, alternating seats until a side wins or the
/// board fills. The player seat moves first.
///
/// Each move fully completes (including mutating the board) before control
/// returns here, and every transition redraws the board through the
/// console. A move that wins ends the match immediately, so a double win
/// is impossible by construction.
#[instrument(skip_all, fields(player = %player.name(), opponent = %opponent.name()))]
pub fn run_match(
    board: &mut Board,
    player: &mut Player,
    opponent: &mut Player,
    console: &mut dyn Console,
) -> Result<MatchOutcome> {
    board.reset();
    console.frame(board)?;
    info!("match started");

    let mut turn = Turn::Player;
    loop {
        let seat = match turn {
            Turn::Player => &mut *player,
            Turn::Opponent => &mut *opponent,
        };
        let mark = *seat.mark();

        let pos = seat.choose(board, console)?;
        console.frame(board)?;
        console.line(&format!("{} placed {} on {}.", seat.name(), mark, pos))?;
        info!(seat = %seat.name(), mark = %mark, position = %pos, "move applied");

        if board.has_three_in_a_row(mark) {
            info!(winner = %seat.name(), "match won");
            return Ok(MatchOutcome::Won(mark));
        }
        if board.is_full() {
            info!("match drawn");
            return Ok(MatchOutcome::Draw);
        }

        turn = turn.other();
    }
}
