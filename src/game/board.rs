//! The 3x3 board and its win/block queries.

use super::error::BoardError;
use super::types::{Mark, Position, Square};
use rand::prelude::IndexedRandom;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// The eight winning lines: rows, then columns, then diagonals.
///
/// The order is fixed. The two-in-a-group scans below return the first
/// qualifying line, so this ordering decides every tie-break and makes the
/// scans deterministic for a given board.
pub const WIN_GROUPS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// 3x3 tic-tac-toe board.
///
/// Squares are stored row-major; the `Position` type carries the mapping
/// between storage indices and the 1-based numbers players see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Returns the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Places a mark, overwriting whatever the square held.
    ///
    /// Occupancy is the caller's contract: both strategies check
    /// `is_empty` (directly or through the selection parser) before
    /// placing.
    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.squares[pos.index()] = Square::Taken(mark);
    }

    /// Clears every square back to empty. Square identities persist.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Whether the square at `pos` still accepts a mark.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Whether no empty square remains.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Whether `mark` holds all three squares of some winning line.
    pub fn has_three_in_a_row(&self, mark: Mark) -> bool {
        WIN_GROUPS
            .iter()
            .any(|group| group.iter().all(|&pos| self.get(pos) == Square::Taken(mark)))
    }

    /// All currently empty positions, in board order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Picks a uniformly random empty position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::BoardFull`] when no square is empty. The match
    /// controller checks `is_full` before requesting moves, so hitting this
    /// is a caller bug rather than a playable state.
    #[instrument(skip(self))]
    pub fn random_empty_position(&self) -> Result<Position, BoardError> {
        let open = self.empty_positions();
        let pos = *open.choose(&mut rand::rng()).ok_or(BoardError::BoardFull)?;
        debug!(position = %pos, "picked random empty square");
        Ok(pos)
    }

    /// Finds a position that completes three-in-a-row for `mark`.
    ///
    /// Scans the winning lines in their fixed order and returns the open
    /// square of the first line where the other two squares already hold
    /// `mark`.
    #[instrument(skip(self))]
    pub fn winning_position(&self, mark: Mark) -> Option<Position> {
        self.open_square_where(|a, b| a == Square::Taken(mark) && b == Square::Taken(mark))
    }

    /// Finds a position that blocks an imminent three-in-a-row against `mark`.
    ///
    /// Same scan as [`winning_position`](Self::winning_position), but a line
    /// qualifies when its two taken squares hold the same foreign mark.
    #[instrument(skip(self))]
    pub fn blocking_position(&self, mark: Mark) -> Option<Position> {
        self.open_square_where(|a, b| match a {
            Square::Taken(threat) if threat != mark => b == Square::Taken(threat),
            _ => false,
        })
    }

    /// Shared two-in-a-group scan.
    ///
    /// For each winning line with exactly one empty square, hands the other
    /// two squares to `qualifies` and returns the empty square of the first
    /// line accepted.
    fn open_square_where(&self, qualifies: impl Fn(Square, Square) -> bool) -> Option<Position> {
        WIN_GROUPS.iter().find_map(|group| {
            let (open, taken) = self.split_group(group)?;
            qualifies(taken[0], taken[1]).then_some(open)
        })
    }

    /// Splits a line into its single empty square and the other two squares,
    /// or `None` unless exactly one square is empty.
    fn split_group(&self, group: &[Position; 3]) -> Option<(Position, [Square; 2])> {
        let mut open = None;
        let mut taken = Vec::with_capacity(2);
        for &pos in group {
            match self.get(pos) {
                Square::Empty => {
                    if open.replace(pos).is_some() {
                        return None;
                    }
                }
                square => taken.push(square),
            }
        }
        let open = open?;
        Some((open, [taken[0], taken[1]]))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(number: u64) -> Position {
        Position::from_number(number).unwrap()
    }

    fn fill(board: &mut Board, mark: Mark, numbers: &[u64]) {
        for &n in numbers {
            board.set(pos(n), mark);
        }
    }

    #[test]
    fn set_then_query() {
        let mut board = Board::new();
        assert!(board.is_empty(pos(5)));

        board.set(pos(5), Mark::X);
        assert!(!board.is_empty(pos(5)));
        assert_eq!(board.get(pos(5)), Square::Taken(Mark::X));
    }

    #[test]
    fn reset_clears_all_nine() {
        let mut board = Board::new();
        fill(&mut board, Mark::X, &[1, 2, 3, 4, 5]);
        fill(&mut board, Mark::O, &[6, 7, 8, 9]);
        assert!(board.is_full());

        board.reset();
        assert!(!board.is_full());
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn three_in_a_row_matches_every_line() {
        for group in WIN_GROUPS {
            let mut board = Board::new();
            for p in group {
                board.set(p, Mark::O);
            }
            assert!(board.has_three_in_a_row(Mark::O), "line {group:?}");
            assert!(!board.has_three_in_a_row(Mark::X), "line {group:?}");
        }
    }

    #[test]
    fn two_in_a_row_is_not_three() {
        let mut board = Board::new();
        fill(&mut board, Mark::X, &[1, 2]);
        assert!(!board.has_three_in_a_row(Mark::X));
    }

    #[test]
    fn full_board_without_a_line() {
        // X takes 1,3,4,8,9 and O takes 2,5,6,7: no line for either side.
        let mut board = Board::new();
        fill(&mut board, Mark::X, &[1, 3, 4, 8, 9]);
        fill(&mut board, Mark::O, &[2, 5, 6, 7]);

        assert!(board.is_full());
        assert!(!board.has_three_in_a_row(Mark::X));
        assert!(!board.has_three_in_a_row(Mark::O));
    }

    #[test]
    fn winning_position_completes_the_row() {
        let mut board = Board::new();
        fill(&mut board, Mark::X, &[1, 2]);
        assert_eq!(board.winning_position(Mark::X), Some(pos(3)));
    }

    #[test]
    fn blocking_position_covers_the_threat() {
        let mut board = Board::new();
        fill(&mut board, Mark::O, &[1, 2]);
        fill(&mut board, Mark::X, &[5]);
        assert_eq!(board.blocking_position(Mark::X), Some(pos(3)));
    }

    #[test]
    fn own_pair_does_not_count_as_threat() {
        let mut board = Board::new();
        fill(&mut board, Mark::X, &[1, 2]);
        assert_eq!(board.blocking_position(Mark::X), None);
    }

    #[test]
    fn mixed_pair_does_not_qualify() {
        // 1 and 2 hold different marks, so square 3 neither wins nor blocks.
        let mut board = Board::new();
        board.set(pos(1), Mark::X);
        board.set(pos(2), Mark::O);
        assert_eq!(board.winning_position(Mark::X), None);
        assert_eq!(board.blocking_position(Mark::X), None);
    }

    #[test]
    fn scans_are_deterministic() {
        // Two simultaneous X pairs: the row [1,2,3] precedes the column
        // [1,4,7] in the line order, so the row's open square wins the scan.
        let mut board = Board::new();
        fill(&mut board, Mark::X, &[1, 2, 4]);

        let first = board.winning_position(Mark::X);
        assert_eq!(first, Some(pos(3)));
        for _ in 0..10 {
            assert_eq!(board.winning_position(Mark::X), first);
        }

        let mut other = Board::new();
        fill(&mut other, Mark::O, &[1, 2, 4]);
        let block = other.blocking_position(Mark::X);
        assert_eq!(block, Some(pos(3)));
        for _ in 0..10 {
            assert_eq!(other.blocking_position(Mark::X), block);
        }
    }

    #[test]
    fn random_empty_position_lands_on_an_empty_square() {
        let mut board = Board::new();
        fill(&mut board, Mark::X, &[1, 3, 5, 7, 9]);
        for _ in 0..20 {
            let pos = board.random_empty_position().expect("squares remain");
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn random_empty_position_fails_on_full_board() {
        let mut board = Board::new();
        fill(&mut board, Mark::X, &[1, 3, 4, 8, 9]);
        fill(&mut board, Mark::O, &[2, 5, 6, 7]);
        assert_eq!(board.random_empty_position(), Err(BoardError::BoardFull));
    }
}
