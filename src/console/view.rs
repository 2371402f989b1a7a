//! Console output for a round.

use super::orchestrator::{GameEvent, GameObserver};
use super::render::{BoardRenderer, Palette};
use crate::games::tictactoe::{Board, Mark, Outcome};
use anyhow::Result;
use crossterm::style::Color;
use std::io::Write;

/// Prints boards and messages as events arrive.
pub struct ConsoleView<W, B> {
    output: W,
    renderer: B,
    palette: Palette,
    last_mover: Option<Mark>,
}

impl<W: Write, B: BoardRenderer> ConsoleView<W, B> {
    /// Creates a view writing to `output`.
    pub fn new(output: W, renderer: B, palette: Palette) -> Self {
        Self {
            output,
            renderer,
            palette,
            last_mover: None,
        }
    }

    /// Prints the welcome banner, optionally followed by the numbered guide.
    pub fn welcome(&mut self, show_guide: bool) -> Result<()> {
        writeln!(
            self.output,
            "{}",
            self.palette.paint("Welcome to Tic Tac Toe vs AI!\n", Color::Magenta)
        )?;
        writeln!(
            self.output,
            "You are {}, AI is {}.",
            Mark::Player.symbol(),
            Mark::Ai.symbol()
        )?;
        if show_guide {
            writeln!(self.output, "Board positions:")?;
            self.board(&Board::new())?;
        }
        Ok(())
    }

    fn board(&mut self, board: &Board) -> Result<()> {
        write!(self.output, "{}", self.renderer.render(board))?;
        Ok(())
    }

    fn verdict(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::PlayerWin => self.palette.paint("🎉 You win! Well played.", Color::Green),
            Outcome::AiWin => self
                .palette
                .paint("💀 AI wins! Better luck next time.", Color::Red),
            Outcome::Draw => self.palette.paint("🤝 It's a draw!", Color::Cyan),
            Outcome::InProgress => outcome.to_string(),
        }
    }
}

impl<W: Write, B: BoardRenderer> GameObserver for ConsoleView<W, B> {
    fn on_event(&mut self, event: &GameEvent) -> Result<()> {
        match event {
            GameEvent::RoundStarted { board } => self.board(board)?,
            GameEvent::MoveMade { mv, board } => {
                self.last_mover = Some(mv.mark());
                if mv.mark() == Mark::Ai {
                    let line = format!("AI chose position {}.", mv.position().number());
                    writeln!(self.output, "{}", self.palette.paint(line, Color::Cyan))?;
                    self.board(board)?;
                }
            }
            GameEvent::GameOver { outcome, board } => {
                if self.last_mover == Some(Mark::Player) {
                    self.board(board)?;
                }
                writeln!(self.output, "{}", self.verdict(*outcome))?;
            }
        }
        self.output.flush()?;
        Ok(())
    }
}
