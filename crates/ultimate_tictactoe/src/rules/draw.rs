//! Fullness and status derivation for sub-boards and the meta-board.

use super::win::{check_winner, meta_winner};
use crate::types::{BoardStatus, Claim, GameStatus, Square};
use tracing::instrument;

/// Checks if every cell of a sub-board is occupied.
pub fn is_full(squares: &[Square; 9]) -> bool {
    squares.iter().all(|s| !s.is_empty())
}

/// Checks if every meta-board slot is decided (won or drawn).
pub fn is_settled(claims: &[Claim; 9]) -> bool {
    claims.iter().all(|c| *c != Claim::Unclaimed)
}

/// Derives a sub-board's status from its cells.
///
/// A line wins even on a full board; a full board without one is drawn.
#[instrument(level = "trace")]
pub fn sub_board_status(squares: &[Square; 9]) -> BoardStatus {
    if let Some(winner) = check_winner(squares) {
        BoardStatus::Won(winner)
    } else if is_full(squares) {
        BoardStatus::Drawn
    } else {
        BoardStatus::InProgress
    }
}

/// Derives the overall result from the meta-board.
#[instrument(level = "trace")]
pub fn game_status(claims: &[Claim; 9]) -> GameStatus {
    if let Some(winner) = meta_winner(claims) {
        GameStatus::Won(winner)
    } else if is_settled(claims) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    const X: Square = Square::Occupied(Mark::X);
    const O: Square = Square::Occupied(Mark::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&[E; 9]));
        assert_eq!(sub_board_status(&[E; 9]), BoardStatus::InProgress);
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&[X, O, E, E, X, E, E, E, E]));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = [X, O, X, O, X, X, O, X, O];
        assert!(is_full(&board));
        assert_eq!(sub_board_status(&board), BoardStatus::Drawn);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        // X X X / O O X / X O O
        let board = [X, X, X, O, O, X, X, O, O];
        assert_eq!(sub_board_status(&board), BoardStatus::Won(Mark::X));
    }

    #[test]
    fn test_game_status_draw_when_settled_without_line() {
        let c = Claim::ClaimedBy(Mark::X);
        let d = Claim::ClaimedBy(Mark::O);
        let n = Claim::Drawn;
        // X O X / O X n / O X O  -> no three X or O in a line
        let claims = [c, d, c, d, c, n, d, c, d];
        assert_eq!(game_status(&claims), GameStatus::Draw);
    }

    #[test]
    fn test_game_status_in_progress_with_open_slot() {
        let mut claims = [Claim::Drawn; 9];
        claims[7] = Claim::Unclaimed;
        assert_eq!(game_status(&claims), GameStatus::InProgress);
        claims[7] = Claim::Drawn;
        assert_eq!(game_status(&claims), GameStatus::Draw);
    }
}
