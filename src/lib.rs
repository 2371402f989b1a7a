//! Strictly Minimax library - tic-tac-toe with a perfect computer opponent
//!
//! The engine is pure and console-free; the console front end only calls
//! into it with a board and gets back a verdict or a chosen cell.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Mark`], [`Position`]
//! - **Rules**: [`has_won`], [`is_full`], [`outcome`]
//! - **Move enumeration**: [`available_moves`]
//! - **Search**: [`evaluate`], [`choose_best_move`], [`Minimax`]
//! - **Console**: [`console::play`] and its collaborators
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Position, choose_best_move};
//!
//! // The computer (O) completes its top row.
//! let mut board: Board = "OO./.X./..X".parse().unwrap();
//! assert_eq!(choose_best_move(&mut board), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Game, Mark, Minimax, Move, MoveError, Outcome, Position, Score,
    Square, available_moves, choose_best_move, evaluate, has_won, is_full, outcome, winner,
};
