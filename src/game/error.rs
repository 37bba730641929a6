//! Error types for the board model and move selection.

use derive_more::{Display, Error};

/// Errors from programmatic board queries.
///
/// These mark contract violations inside the crate, not conditions the
/// player can reach: the match controller checks for a full board before
/// asking anyone for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A random empty square was requested but the board is full.
    #[display("no empty square remains on the board")]
    BoardFull,
}

/// A rejected move selection.
///
/// Both variants are recovered locally by re-prompting; the `Display` text
/// is the plain-language reason shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SelectionError {
    /// The input was not a number from 1 to 9.
    #[display("That is not a valid selection.")]
    InvalidInput,
    /// The selected square already holds a mark.
    #[display("That square is already taken.")]
    Occupied,
}
