//! Sub-boards and the meta-board.

use crate::position::Position;
use crate::rules;
use crate::types::{BoardStatus, Claim, GameStatus, Mark, Square};
use serde::{Deserialize, Serialize};

/// One of the nine inner 3×3 grids.
///
/// The status is derived from the cells on every write and cached; once it
/// leaves `InProgress` the board refuses further marks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubBoard {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    status: BoardStatus,
}

impl SubBoard {
    /// Creates a new empty sub-board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the cached status.
    pub fn status(&self) -> BoardStatus {
        self.status
    }

    /// Returns true while the board still accepts moves.
    pub fn is_open(&self) -> bool {
        !self.status.is_decided()
    }

    /// Empty cells in index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }

    /// Writes a mark and recomputes the status.
    ///
    /// Callers validate first; this only guards the cell invariant.
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) -> BoardStatus {
        debug_assert!(self.is_empty(pos), "cell {pos} already occupied");
        debug_assert!(self.is_open(), "board already decided");
        self.squares[pos.to_index()] = Square::Occupied(mark);
        self.status = rules::sub_board_status(&self.squares);
        self.status
    }

    #[cfg(test)]
    pub(crate) fn squares_mut(&mut self) -> &mut [Square; 9] {
        &mut self.squares
    }

    /// Formats one row of this board (`"X.O"`), for the text grid.
    pub(crate) fn row_string(&self, row: usize) -> String {
        self.squares[row * 3..row * 3 + 3]
            .iter()
            .map(|s| match s {
                Square::Empty => '.',
                Square::Occupied(Mark::X) => 'X',
                Square::Occupied(Mark::O) => 'O',
            })
            .collect()
    }
}

/// The outer 3×3 grid of sub-board outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaBoard {
    claims: [Claim; 9],
}

impl MetaBoard {
    /// Creates a meta-board with every slot unclaimed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the claim at the given position.
    pub fn get(&self, pos: Position) -> Claim {
        self.claims[pos.to_index()]
    }

    /// Returns all claims.
    pub fn claims(&self) -> &[Claim; 9] {
        &self.claims
    }

    /// Returns the player holding a line of claims, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::meta_winner(&self.claims)
    }

    /// Derives the overall game result.
    pub fn status(&self) -> GameStatus {
        rules::game_status(&self.claims)
    }

    pub(crate) fn set(&mut self, pos: Position, claim: Claim) {
        self.claims[pos.to_index()] = claim;
    }
}
