//! Session state: players, cumulative scores, and the match loop.

use crate::console::Console;
use crate::game::{Board, Mark, Position};
use crate::orchestrator::{run_match, MatchOutcome};
use crate::players::MoveStrategy;
use anyhow::Result;
use derive_getters::Getters;
use tracing::{info, instrument};

/// One side of the table: identity, mark, cumulative score, and the policy
/// that decides its moves.
///
/// Players are created once per session; their scores persist across
/// matches and never decrease.
#[derive(Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// The mark this player places.
    mark: Mark,
    /// Matches won so far this session.
    score: u32,
    /// Decision policy, injected at session setup.
    #[getter(skip)]
    strategy: Box<dyn MoveStrategy>,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(name: impl Into<String>, mark: Mark, strategy: Box<dyn MoveStrategy>) -> Self {
        Self {
            name: name.into(),
            mark,
            score: 0,
            strategy,
        }
    }

    /// Delegates the next move to this player's strategy.
    pub fn choose(&mut self, board: &mut Board, console: &mut dyn Console) -> Result<Position> {
        self.strategy.choose(board, self.mark, console)
    }

    fn award_win(&mut self) {
        self.score += 1;
    }
}

/// A sequence of matches between the same two players.
///
/// Holds the running totals; ties are derived, not stored, so the
/// bookkeeping cannot drift: `matches_played` always equals the two scores
/// plus [`ties`](Self::ties).
#[derive(Getters)]
pub struct Session {
    /// The human seat (or its stand-in, in watch mode).
    player: Player,
    /// The computer seat.
    opponent: Player,
    /// Total matches finished this session.
    matches_played: u32,
}

impl Session {
    /// Starts a session between two players with no matches played.
    pub fn new(player: Player, opponent: Player) -> Self {
        Self {
            player,
            opponent,
            matches_played: 0,
        }
    }

    /// Matches that ended with no winner.
    pub fn ties(&self) -> u32 {
        self.matches_played - self.player.score - self.opponent.score
    }

    /// Folds one match outcome into the running totals.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: MatchOutcome) {
        self.matches_played += 1;
        match outcome {
            MatchOutcome::Won(mark) if mark == self.player.mark => self.player.award_win(),
            MatchOutcome::Won(_) => self.opponent.award_win(),
            MatchOutcome::Draw => {}
        }
        info!(
            player = self.player.score,
            opponent = self.opponent.score,
            ties = self.ties(),
            played = self.matches_played,
            "scores updated"
        );
    }

    /// One-line score summary for the status area.
    pub fn summary(&self) -> String {
        format!(
            "{}: {}  {}: {}  Ties: {}  ({} played)",
            self.player.name,
            self.player.score,
            self.opponent.name,
            self.opponent.score,
            self.ties(),
            self.matches_played
        )
    }

    /// Runs matches until the user declines another round.
    pub fn play(&mut self, console: &mut dyn Console) -> Result<()> {
        let mut board = Board::new();
        loop {
            let outcome = run_match(&mut board, &mut self.player, &mut self.opponent, console)?;
            self.record(outcome);

            match outcome {
                MatchOutcome::Won(mark) => {
                    let winner = if mark == self.player.mark {
                        &self.player
                    } else {
                        &self.opponent
                    };
                    console.line(&format!("{} wins the match!", winner.name))?;
                }
                MatchOutcome::Draw => console.line("The match is a tie.")?,
            }
            console.line(&self.summary())?;

            if !confirm_another(console)? {
                break;
            }
        }
        console.line("Thanks for playing!")?;
        Ok(())
    }
}

fn confirm_another(console: &mut dyn Console) -> Result<bool> {
    let answer = console.read_line("Play another match? (y/n)")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
