//! Game outcome, always derived from the board.

use super::super::{Board, Mark};
use super::{has_won, is_full};
use serde::{Deserialize, Serialize};

/// Result of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty cells remain.
    InProgress,
    /// The human player completed a line.
    PlayerWin,
    /// The computer completed a line.
    AiWin,
    /// The board is full without a winner.
    Draw,
}

impl Outcome {
    /// Returns true once the round is over.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::PlayerWin => Some(Mark::Player),
            Outcome::AiWin => Some(Mark::Ai),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::PlayerWin => write!(f, "Player wins"),
            Outcome::AiWin => write!(f, "AI wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Derives the outcome of `board`.
pub fn outcome(board: &Board) -> Outcome {
    if has_won(board, Mark::Ai) {
        Outcome::AiWin
    } else if has_won(board, Mark::Player) {
        Outcome::PlayerWin
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
