//! Exhaustive minimax search.
//!
//! Scores are reported from the perspective of the side the engine plays
//! for: [`Score::Win`] means that side wins under optimal play from both
//! players, [`Score::Loss`] means it loses. No pruning, depth limit or
//! memoization is used; the full tree from an empty board is under 550k
//! nodes.

use super::position::available_moves;
use super::rules::{has_won, is_full};
use super::types::{Board, Mark, Square};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic value of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i8)]
pub enum Score {
    /// The searching side loses.
    Loss = -1,
    /// Neither side can force a win.
    Draw = 0,
    /// The searching side wins.
    Win = 1,
}

impl Score {
    /// Integer value in `{-1, 0, 1}`.
    pub fn value(self) -> i8 {
        self as i8
    }
}

/// A mark placed for the duration of one branch of the search.
///
/// The cell is emptied again when the guard drops, so every exit path
/// out of a branch restores the board.
struct Speculation<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Speculation<'a> {
    fn place(board: &'a mut Board, pos: Position, mark: Mark) -> Self {
        debug_assert!(board.is_empty(pos));
        board.set(pos, Square::Occupied(mark));
        Self { board, pos }
    }

    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}

/// Minimax engine playing for one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    mark: Mark,
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(Mark::Ai)
    }
}

impl Minimax {
    /// Creates an engine that maximizes the result for `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    /// The mark this engine plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Scores `board` with `maximizing` true when it is this engine's turn.
    ///
    /// The board is borrowed mutably for speculative placements but is
    /// unchanged when this returns.
    pub fn evaluate(&self, board: &mut Board, maximizing: bool) -> Score {
        if has_won(board, self.mark) {
            return Score::Win;
        }
        if has_won(board, self.mark.opponent()) {
            return Score::Loss;
        }
        if is_full(board) {
            return Score::Draw;
        }

        let (mover, best) = if maximizing {
            (self.mark, Score::Loss)
        } else {
            (self.mark.opponent(), Score::Win)
        };

        available_moves(board)
            .into_iter()
            .map(|pos| {
                let mut speculation = Speculation::place(board, pos, mover);
                self.evaluate(speculation.board(), !maximizing)
            })
            .fold(best, |best, score| {
                if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                }
            })
    }

    /// Scores every empty cell as this engine's next move, in row-major order.
    pub fn score_moves(&self, board: &mut Board) -> Vec<(Position, Score)> {
        available_moves(board)
            .into_iter()
            .map(|pos| {
                let mut speculation = Speculation::place(board, pos, self.mark);
                (pos, self.evaluate(speculation.board(), false))
            })
            .collect()
    }

    /// Picks the best cell for this engine, or `None` on a full board.
    ///
    /// Ties keep the first cell in row-major order.
    #[instrument(skip(self, board), fields(mark = ?self.mark, board = %board))]
    pub fn choose_best_move(&self, board: &mut Board) -> Option<Position> {
        let scored = self.score_moves(board);
        debug!(?scored, "Scored candidate moves");

        let mut best: Option<(Position, Score)> = None;
        for (pos, score) in scored {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        if let Some((pos, score)) = best {
            debug!(position = pos.number(), ?score, "Selected move");
        }
        best.map(|(pos, _)| pos)
    }
}

/// Scores `board` for the computer, `maximizing` when the computer moves next.
pub fn evaluate(board: &mut Board, maximizing: bool) -> Score {
    Minimax::default().evaluate(board, maximizing)
}

/// Chooses the computer's move, or `None` if the board is full.
pub fn choose_best_move(board: &mut Board) -> Option<Position> {
    Minimax::default().choose_best_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut b = board("OO./.X./..X");
        assert_eq!(choose_best_move(&mut b), Some(Position::TopRight));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        let mut b = board("XX./.O./...");
        assert_eq!(choose_best_move(&mut b), Some(Position::TopRight));
    }

    #[test]
    fn test_win_preferred_over_block() {
        // Both sides threaten; the computer should finish its own line.
        let mut b = board("XX./OO./X..");
        assert_eq!(choose_best_move(&mut b), Some(Position::MiddleRight));
    }

    #[test]
    fn test_search_leaves_board_unchanged() {
        let mut b = board("X../.O./..X");
        let before = b.clone();
        choose_best_move(&mut b);
        evaluate(&mut b, true);
        evaluate(&mut b, false);
        assert_eq!(b, before);
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(evaluate(&mut board("OOO/XX./X.."), false), Score::Win);
        assert_eq!(evaluate(&mut board("XXX/OO./O.."), true), Score::Loss);
        assert_eq!(evaluate(&mut board("XOX/OXX/OXO"), true), Score::Draw);
    }

    #[test]
    fn test_computer_win_checked_before_fullness() {
        // Full board where the computer owns the anti-diagonal.
        let mut b = board("XXO/XOX/OOX");
        assert_eq!(evaluate(&mut b, true), Score::Win);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut b = board("XOX/OXX/OXO");
        assert_eq!(choose_best_move(&mut b), None);
    }

    #[test]
    fn test_score_values() {
        assert_eq!(Score::Loss.value(), -1);
        assert_eq!(Score::Draw.value(), 0);
        assert_eq!(Score::Win.value(), 1);
        assert!(Score::Loss < Score::Draw && Score::Draw < Score::Win);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut b = Board::new();
        assert_eq!(evaluate(&mut b, false), Score::Draw);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_engine_for_player_mark() {
        let engine = Minimax::new(Mark::Player);
        let mut b = board("XX./OO./...");
        assert_eq!(engine.choose_best_move(&mut b), Some(Position::TopRight));
    }
}
