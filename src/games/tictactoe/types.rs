//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Mark placed on the board by one of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Mark {
    /// The human player (moves first).
    Player,
    /// The computer opponent.
    Ai,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Ai,
            Mark::Ai => Mark::Player,
        }
    }

    /// Symbol drawn on the board for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Ai => 'O',
        }
    }

    /// Parses a board symbol back into a mark.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Mark::Player),
            'O' | 'o' => Some(Mark::Ai),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Empties the square at the given position.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Player marks equal computer marks, or exceed them by exactly one.
    #[instrument(skip(self))]
    pub fn is_turn_consistent(&self) -> bool {
        let player = self.count(Mark::Player);
        let ai = self.count(Mark::Ai);
        player == ai || player == ai + 1
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.squares.chunks(3).enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for square in row {
                let c = match square {
                    Square::Empty => '.',
                    Square::Occupied(mark) => mark.symbol(),
                };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// Error parsing the compact board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty cell nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidCharacter(char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `"XO./.X./..O"` style notation, row-major.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            match c {
                '/' | '|' | '\n' | '\r' => continue,
                '.' | '-' | '_' | ' ' => cells.push(Square::Empty),
                other => match Mark::from_symbol(other) {
                    Some(mark) => cells.push(Square::Occupied(mark)),
                    None => return Err(BoardParseError::InvalidCharacter(other)),
                },
            }
        }

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongCellCount(v.len()))?;
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::Player));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Mark::Ai));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.to_string(), "XO./.X./..O");
    }

    #[test]
    fn test_parse_accepts_spaces_as_empty() {
        let board: Board = "OO | X |  X".parse().unwrap();
        assert_eq!(board.count(Mark::Ai), 2);
        assert_eq!(board.count(Mark::Player), 2);
        assert!(board.is_empty(Position::TopRight));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XOZ/.../...".parse::<Board>(),
            Err(BoardParseError::InvalidCharacter('Z'))
        );
        assert_eq!(
            "XO/.../...".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(8))
        );
    }

    #[test]
    fn test_turn_consistency() {
        assert!(Board::new().is_turn_consistent());
        assert!("X../.../...".parse::<Board>().unwrap().is_turn_consistent());
        assert!("XO./.../...".parse::<Board>().unwrap().is_turn_consistent());
        assert!(!"O../.../...".parse::<Board>().unwrap().is_turn_consistent());
        assert!(!"XX./.../...".parse::<Board>().unwrap().is_turn_consistent());
    }

    #[test]
    fn test_clear_restores_empty() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::Ai));
        board.clear(Position::Center);
        assert_eq!(board, Board::new());
    }
}
