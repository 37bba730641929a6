//! Core domain types for the board.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The X mark (moves first).
    X,
    /// The O mark (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-letter form used in status lines.
    pub fn letter(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark placed yet.
    Empty,
    /// Square taken by a mark.
    Taken(Mark),
}

impl Square {
    /// Whether this square still accepts a mark.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// A square address on the 3x3 grid.
///
/// Players address squares by the 1-based number printed in each empty
/// square; storage is 0-based row-major. Both conversions live here so the
/// rest of the crate never juggles raw indices.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Square 1.
    TopLeft,
    /// Square 2.
    TopCenter,
    /// Square 3.
    TopRight,
    /// Square 4.
    MiddleLeft,
    /// Square 5.
    Center,
    /// Square 6.
    MiddleRight,
    /// Square 7.
    BottomLeft,
    /// Square 8.
    BottomCenter,
    /// Square 9.
    BottomRight,
}

impl Position {
    /// Row-major storage index (0-8).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// The 1-based number shown to the player (1-9).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Converts a storage index back to a position.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Converts a player-facing square number (1-9) to a position.
    ///
    /// This is the single validation boundary for square numbers; past it,
    /// out-of-range addresses are unrepresentable.
    pub fn from_number(number: u64) -> Option<Self> {
        match number {
            1..=9 => Self::from_index(number as usize - 1),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "square {}", self.number())
    }
}
