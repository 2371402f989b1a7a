//! Single round of tic-tac-toe.

use super::action::{Move, MoveError};
use super::rules::{Outcome, outcome};
use super::types::{Board, Mark, Square};
use super::Position;
use tracing::{debug, instrument};

/// A round in progress: the board and the side to move.
///
/// The outcome is never stored; it is recomputed from the board after
/// every move.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new round with an empty board. The player moves first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Mark due to move next.
    pub fn to_move(&self) -> Mark {
        if self.board.count(Mark::Player) > self.board.count(Mark::Ai) {
            Mark::Ai
        } else {
            Mark::Player
        }
    }

    /// Current outcome, derived from the board.
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    /// Places the next mark at `pos` and returns the resulting outcome.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the round has ended and
    /// [`MoveError::SquareOccupied`] if the cell is taken.
    #[instrument(skip(self), fields(mark = ?self.to_move()))]
    pub fn place(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.to_move();
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(Move::new(mark, pos));
        debug_assert!(self.board.is_turn_consistent());

        let outcome = self.outcome();
        debug!(position = pos.number(), %outcome, "Move applied");
        Ok(outcome)
    }
}
