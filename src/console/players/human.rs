//! Human player reading cell numbers from a text stream.

use super::Opponent;
use crate::console::render::Palette;
use crate::games::tictactoe::{Board, Position};
use anyhow::{Context, Result};
use crossterm::style::Color;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, instrument};

/// Why a line of input was not accepted as a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// The line is not an integer.
    #[display("Invalid input. Enter a number between 1 and 9.")]
    Parse,

    /// The integer is outside 1-9, including integers too large to store.
    #[display("{} is out of range. Enter a number between 1 and 9.", _0)]
    OutOfRange(String),

    /// The named cell already holds a mark.
    #[display("That cell is already taken.")]
    CellOccupied(Position),
}

impl std::error::Error for InputError {}

/// Interprets one line of input as a move on `board`.
#[instrument(skip(board))]
pub fn parse_move(line: &str, board: &Board) -> Result<Position, InputError> {
    let text = line.trim();
    let number: i64 = match text.parse() {
        Ok(number) => number,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(InputError::OutOfRange(text.to_string()));
        }
        Err(_) => return Err(InputError::Parse),
    };
    let pos = usize::try_from(number)
        .ok()
        .and_then(Position::from_number)
        .ok_or_else(|| InputError::OutOfRange(text.to_string()))?;

    if board.is_empty(pos) {
        Ok(pos)
    } else {
        Err(InputError::CellOccupied(pos))
    }
}

/// Human player prompting on `output` and reading from `input`.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W, palette: Palette) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            palette,
        }
    }
}

impl<R: BufRead, W: Write> Opponent for HumanPlayer<R, W> {
    /// Re-prompts until a legal cell is entered.
    ///
    /// # Errors
    ///
    /// Fails if the input stream ends or either stream reports an I/O error.
    fn choose(&mut self, board: &Board) -> Result<Position> {
        loop {
            write!(
                self.output,
                "{}",
                self.palette.paint("Your move (1-9): ", Color::Green)
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before a move was entered");
            }

            match parse_move(&line, board) {
                Ok(pos) => return Ok(pos),
                Err(e) => {
                    debug!(error = %e, input = line.trim(), "Rejected move");
                    writeln!(self.output, "{}", self.palette.paint(&e, Color::Yellow))?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
