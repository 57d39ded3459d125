//! Contract-based validation for ultimate tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{IllegalMove, Move};
use crate::invariants::{InvariantSet, UltimateInvariants};
use crate::position::Position;
use crate::state::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), IllegalMove>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects every move once the game is won or drawn.
    pub fn check(game: &GameState) -> Result<(), IllegalMove> {
        if game.is_over() {
            Err(IllegalMove::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target sub-board is still in play.
pub struct BoardIsOpen;

impl BoardIsOpen {
    /// Rejects moves into won or drawn sub-boards.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), IllegalMove> {
        if game.board(mov.board).is_open() {
            Ok(())
        } else {
            Err(IllegalMove::BoardClosed(mov.board))
        }
    }
}

/// Precondition: the move respects the routing set by the previous move.
pub struct FollowsRouting;

impl FollowsRouting {
    /// Returns the board the next move is forced into, if any.
    ///
    /// A route to a decided board imposes nothing.
    pub fn required_board(game: &GameState) -> Option<Position> {
        game.active_board()
            .filter(|&pos| game.board(pos).is_open())
    }

    /// Rejects moves outside the routed sub-board.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), IllegalMove> {
        match Self::required_board(game) {
            Some(required) if required != mov.board => Err(IllegalMove::WrongBoard {
                required,
                attempted: mov.board,
            }),
            _ => Ok(()),
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto occupied cells.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), IllegalMove> {
        if game.board(mov.board).is_empty(mov.cell) {
            Ok(())
        } else {
            Err(IllegalMove::CellOccupied {
                board: mov.board,
                cell: mov.cell,
            })
        }
    }
}

/// Composite precondition: every rule a legal move must satisfy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "debug", skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), IllegalMove> {
        GameNotOver::check(game)?;
        BoardIsOpen::check(mov, game)?;
        FollowsRouting::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: a decided sub-board keeps its status and cells.
pub struct DecidedBoardsFrozen;

impl DecidedBoardsFrozen {
    /// Compares every board that was decided before the move.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        before
            .boards()
            .iter()
            .zip(after.boards())
            .filter(|(old, _)| !old.is_open())
            .all(|(old, new)| old == new)
    }
}

/// Postcondition: exactly one empty cell was filled and nothing else changed.
pub struct SingleCellWritten;

impl SingleCellWritten {
    /// Counts cell differences between the two states.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mut changed = 0;
        for (old, new) in before.boards().iter().zip(after.boards()) {
            for (a, b) in old.squares().iter().zip(new.squares()) {
                if a != b {
                    if !a.is_empty() {
                        return false;
                    }
                    changed += 1;
                }
            }
        }
        changed == 1 && after.history().len() == before.history().len() + 1
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is not over
/// - Target sub-board is open
/// - Routing is respected
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one empty cell was written
/// - Decided sub-boards are untouched
/// - All state invariants hold
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), IllegalMove> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), IllegalMove> {
        let mut violations = Vec::new();
        if !SingleCellWritten::holds(before, after) {
            violations.push("Exactly one empty cell is written per move");
        }
        if !DecidedBoardsFrozen::holds(before, after) {
            violations.push("Decided sub-boards never change");
        }
        if let Err(failed) = UltimateInvariants::check_all(after) {
            violations.extend(failed.into_iter().map(|v| v.description));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            let descriptions = violations.join("; ");
            warn!(%descriptions, "Move postcondition failed");
            Err(IllegalMove::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions
            )))
        }
    }
}
