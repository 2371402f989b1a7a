//! Text rendering of the board and console messages.

use crate::games::tictactoe::{Board, Mark, Position, Square};
use crossterm::style::{Color, Stylize, style};
use std::fmt::Display;

/// Turns a board into displayable text.
///
/// Keeps presentation out of the engine so the engine never touches the
/// console.
pub trait BoardRenderer {
    /// Renders `board` as one or more lines of text.
    fn render(&self, board: &Board) -> String;
}

/// Applies ANSI colours when enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Creates a palette, coloured when `enabled`.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Returns `text` in `color`, or unchanged when colour is off.
    pub fn paint(&self, text: impl Display, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Colour used for a mark.
    pub fn mark_color(mark: Mark) -> Color {
        match mark {
            Mark::Player => Color::Red,
            Mark::Ai => Color::Cyan,
        }
    }
}

/// Plain-text board with numbered empty cells.
///
/// ```text
///    X   |   2   |   O
///   ---------------------------------
///    4   |   X   |   6
///   ---------------------------------
///    7   |   8   |   9
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    palette: Palette,
}

impl TextRenderer {
    /// Creates a renderer using `palette` for marks.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn cell(&self, board: &Board, pos: Position) -> String {
        match board.get(pos) {
            Square::Empty => pos.number().to_string(),
            Square::Occupied(mark) => self.palette.paint(mark, Palette::mark_color(mark)),
        }
    }
}

impl BoardRenderer for TextRenderer {
    fn render(&self, board: &Board) -> String {
        let rows: Vec<String> = Position::ALL
            .chunks(3)
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|pos| self.cell(board, *pos)).collect();
                format!("   {}", cells.join("   |   "))
            })
            .collect();

        let rule = format!("\n  {}\n", "-".repeat(33));
        format!("\n{}\n", rows.join(&rule))
    }
}
