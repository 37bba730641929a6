//! Display/input collaborator for the terminal.
//!
//! The game core talks to a [`Console`] trait; the [`Terminal`]
//! implementation renders through crossterm and reads line-buffered stdin.
//! Tests substitute a scripted console, so nothing in the core touches the
//! real terminal directly.

use crate::game::{Board, Mark, Position, Square};
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::time::Duration;

const BANNER: &str = "----------------------------------\n\
                      \x20          Tic Tac Toe\n\
                      ----------------------------------";

const GRID_LINE: &str = "-----+-----+-----";

/// The display and input surface the game plays against.
///
/// Rendering is output-only: nothing the console does feeds back into game
/// logic. Input is line-buffered text.
pub trait Console {
    /// Clears the screen and redraws the banner and board.
    fn frame(&mut self, board: &Board) -> Result<()>;

    /// Clears the screen and prints the banner alone.
    fn banner(&mut self) -> Result<()>;

    /// Prints one status line.
    fn line(&mut self, text: &str) -> Result<()>;

    /// Prints a prompt and reads one line of input.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Pacing pause. Presentation only; carries no game semantics and may
    /// be zero.
    fn pause(&mut self, duration: Duration);
}

/// Real terminal backed by crossterm and stdin.
pub struct Terminal {
    out: io::Stdout,
}

impl Terminal {
    /// Creates a console over the process stdout/stdin.
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {
    fn frame(&mut self, board: &Board) -> Result<()> {
        self.banner()?;
        writeln!(self.out, "{}", render_board(board))?;
        Ok(())
    }

    fn banner(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(self.out, "{BANNER}")?;
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut buf = String::new();
        io::stdin().read_line(&mut buf)?;
        Ok(buf.trim().to_string())
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Formats the board as a grid of three-line glyphs.
///
/// Taken squares render their mark's glyph; empty squares show their
/// 1-based number so the prompt "select 1-9" reads straight off the screen.
pub fn render_board(board: &Board) -> String {
    const ROWS: [[Position; 3]; 3] = [
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [Position::MiddleLeft, Position::Center, Position::MiddleRight],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
    ];

    let mut out = String::new();
    for (i, row) in ROWS.iter().enumerate() {
        let cells: Vec<[String; 3]> = row
            .iter()
            .map(|&pos| glyph(board.get(pos), pos.number()))
            .collect();
        for line in 0..3 {
            out.push_str(&format!(
                "{}|{}|{}\n",
                cells[0][line], cells[1][line], cells[2][line]
            ));
        }
        if i < 2 {
            out.push_str(GRID_LINE);
            out.push('\n');
        }
    }
    out
}

fn glyph(square: Square, number: u8) -> [String; 3] {
    match square {
        Square::Taken(Mark::X) => [
            r" \ / ".to_string(),
            r"  X  ".to_string(),
            r" / \ ".to_string(),
        ],
        Square::Taken(Mark::O) => [
            "  _  ".to_string(),
            " | | ".to_string(),
            " |_| ".to_string(),
        ],
        Square::Empty => [
            "     ".to_string(),
            format!("  {number}  "),
            "     ".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_shows_all_nine_numbers() {
        let rendered = render_board(&Board::new());
        for n in 1..=9 {
            assert!(rendered.contains(&format!("  {n}  ")), "number {n} missing");
        }
    }

    #[test]
    fn taken_square_hides_its_number() {
        let mut board = Board::new();
        board.set(Position::Center, Mark::X);
        let rendered = render_board(&board);
        assert!(!rendered.contains("  5  "));
        assert!(rendered.contains("  X  "));
    }

    #[test]
    fn grid_has_two_separator_lines() {
        let rendered = render_board(&Board::new());
        assert_eq!(rendered.matches(GRID_LINE).count(), 2);
    }

    #[test]
    fn each_row_is_three_lines_tall() {
        let rendered = render_board(&Board::new());
        // 3 rows x 3 glyph lines + 2 separators
        assert_eq!(rendered.lines().count(), 11);
    }
}
