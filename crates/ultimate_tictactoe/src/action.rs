//! First-class move types for ultimate tic-tac-toe.
//!
//! Moves are domain events, not side effects. They name the target
//! sub-board and cell and can be validated independently of execution.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: the sub-board to play in and the cell inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Sub-board index on the meta-board.
    pub board: Position,
    /// Cell index inside the sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(board: Position, cell: Position) -> Self {
        Self { board, cell }
    }

    /// Creates a move from raw indices, rejecting anything outside 0-8.
    #[instrument]
    pub fn from_indices(board: u8, cell: u8) -> Result<Self, IllegalMove> {
        Ok(Self::new(Position::try_from(board)?, Position::try_from(cell)?))
    }

    /// Returns the move as raw `(board, cell)` indices.
    pub fn to_indices(self) -> (u8, u8) {
        (self.board.to_u8(), self.cell.to_u8())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.board.label(), self.cell.label())
    }
}

/// A move as recorded in history, together with who played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// The player who moved.
    pub player: Mark,
    /// Where they played.
    pub mv: Move,
}

impl Turn {
    /// Creates a new history entry.
    pub fn new(player: Mark, mv: Move) -> Self {
        Self { player, mv }
    }
}

/// Reason a move was rejected.
///
/// Every variant is recoverable: the state the move was aimed at is
/// left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// A raw index was outside 0-8.
    #[display("Index {} is out of bounds (must be 0-8)", index)]
    OutOfBounds {
        /// The offending index.
        index: u8,
    },

    /// The target sub-board is already won or drawn.
    #[display("Board {} is already decided", _0)]
    BoardClosed(Position),

    /// The routing rule requires another sub-board this turn.
    #[display("Must play in board {}, not {}", required, attempted)]
    WrongBoard {
        /// Sub-board the previous move routed to.
        required: Position,
        /// Sub-board the caller tried.
        attempted: Position,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} of board {} is already occupied", cell, board)]
    CellOccupied {
        /// Sub-board of the target cell.
        board: Position,
        /// The occupied cell.
        cell: Position,
    },

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for IllegalMove {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_indices() {
        let mv = Move::from_indices(4, 0).unwrap();
        assert_eq!(mv, Move::new(Position::Center, Position::TopLeft));
        assert_eq!(mv.to_indices(), (4, 0));
    }

    #[test]
    fn test_from_indices_rejects_bounds() {
        assert_eq!(
            Move::from_indices(9, 0),
            Err(IllegalMove::OutOfBounds { index: 9 })
        );
        assert_eq!(
            Move::from_indices(0, 200),
            Err(IllegalMove::OutOfBounds { index: 200 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = IllegalMove::WrongBoard {
            required: Position::TopLeft,
            attempted: Position::Center,
        };
        assert_eq!(err.to_string(), "Must play in board Top-left, not Center");
        assert!(
            IllegalMove::CellOccupied {
                board: Position::Center,
                cell: Position::TopLeft
            }
            .to_string()
            .contains("occupied")
        );
    }
}
