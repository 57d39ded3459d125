//! Ultimate tic-tac-toe game engine.
//!
//! Nine 3×3 sub-boards sit on a 3×3 meta-board. Winning a sub-board claims
//! its meta-board slot, and the cell just played names the sub-board the
//! opponent must play in next.
//!
//! # Architecture
//!
//! - **Rules**: pure three-in-a-row evaluation shared by sub-boards and
//!   the meta-board
//! - **State**: [`GameState`] with the transactional [`GameState::apply_move`]
//! - **Contracts / invariants**: preconditions on every move, postconditions
//!   and state invariants in debug builds
//! - **Choosers**: pluggable [`MoveChooser`] strategies for automated players
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{apply_move, legal_moves, new_game, Mark};
//!
//! let state = new_game();
//! let state = apply_move(&state, 4, 0).unwrap();
//! assert_eq!(state.current_player(), Mark::O);
//! assert!(legal_moves(&state).iter().all(|&(board, _)| board == 0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod chooser;
mod contracts;
mod engine;
mod position;
mod state;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use action::{IllegalMove, Move, Turn};
pub use board::{MetaBoard, SubBoard};
pub use position::Position;
pub use state::GameState;
pub use types::{BoardStatus, Claim, GameStatus, Mark, Square};

// Crate-level exports - Contracts
pub use contracts::{
    BoardIsOpen, CellIsEmpty, Contract, DecidedBoardsFrozen, FollowsRouting, GameNotOver,
    LegalMove, MoveContract, SingleCellWritten,
};

// Crate-level exports - Engine surface
pub use chooser::{FirstAvailable, MoveChooser, RandomChooser};
pub use engine::{apply_move, choose_random_move, legal_moves, new_game, reset, Game};
