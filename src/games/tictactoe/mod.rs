//! Tic-tac-toe: board model, rules, move enumeration and minimax search.

mod action;
mod game;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::{Position, available_moves};
pub use rules::{Outcome, has_won, is_full, outcome, winner};
pub use search::{Minimax, Score, choose_best_move, evaluate};
pub use types::{Board, BoardParseError, Mark, Square};
