//! Computer opponent backed by exhaustive minimax.

use super::Opponent;
use crate::games::tictactoe::{Board, Mark, Minimax, Position};
use anyhow::{Context, Result};
use tracing::debug;

/// Plays perfectly for its mark.
pub struct MinimaxPlayer {
    name: String,
    engine: Minimax,
}

impl MinimaxPlayer {
    /// Creates a player searching on behalf of `mark`.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            engine: Minimax::new(mark),
        }
    }
}

impl Opponent for MinimaxPlayer {
    fn choose(&mut self, board: &Board) -> Result<Position> {
        debug!(ai = %self.name, "AI making move");

        let mut scratch = board.clone();
        let pos = self
            .engine
            .choose_best_move(&mut scratch)
            .context("No valid moves available")?;

        debug!(ai = %self.name, position = pos.number(), "AI chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
