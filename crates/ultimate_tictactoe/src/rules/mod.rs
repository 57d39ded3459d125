//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions that evaluate a 9-slot grid. The same line check runs
//! over a sub-board's cells and over the meta-board's claims, so rules
//! are kept apart from board storage.

pub mod draw;
pub mod win;

pub use draw::{game_status, is_full, is_settled, sub_board_status};
pub use win::{check_winner, evaluate, meta_winner, LINES};
