//! Core domain types for ultimate tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A player's symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (moves first).
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell taken by a player. Never reverts to `Empty`.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if the cell is still empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// Status of one sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoardStatus {
    /// Still accepting moves.
    #[default]
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// All nine cells filled without a line.
    Drawn,
}

impl BoardStatus {
    /// Returns true once the sub-board no longer accepts moves.
    pub fn is_decided(self) -> bool {
        self != BoardStatus::InProgress
    }
}

/// Meta-board slot: the reduced outcome of a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Claim {
    /// Sub-board still in play.
    #[default]
    Unclaimed,
    /// Sub-board won by a player.
    ClaimedBy(Mark),
    /// Sub-board filled with no winner. Counts for nobody.
    Drawn,
}

impl From<BoardStatus> for Claim {
    fn from(status: BoardStatus) -> Self {
        match status {
            BoardStatus::InProgress => Claim::Unclaimed,
            BoardStatus::Won(mark) => Claim::ClaimedBy(mark),
            BoardStatus::Drawn => Claim::Drawn,
        }
    }
}

/// Overall game result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// A player completed a line of claimed sub-boards.
    Won(Mark),
    /// Every sub-board is decided and nobody has a line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "Player {} wins", mark),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
