//! Opponent trait and implementations.

mod human;
mod minimax_ai;

pub use human::{HumanPlayer, InputError, parse_move};
pub use minimax_ai::MinimaxPlayer;

use crate::games::tictactoe::{Board, Position};
use anyhow::Result;

/// Anything that can pick a cell for its side.
pub trait Opponent {
    /// Chooses the next move on `board`, which has at least one empty cell.
    fn choose(&mut self, board: &Board) -> Result<Position>;

    /// Returns the display name.
    fn name(&self) -> &str;
}
