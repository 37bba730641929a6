//! Board model: marks, squares, positions, and win/block detection.

mod board;
mod error;
mod types;

pub use board::{Board, WIN_GROUPS};
pub use error::{BoardError, SelectionError};
pub use types::{Mark, Position, Square};
