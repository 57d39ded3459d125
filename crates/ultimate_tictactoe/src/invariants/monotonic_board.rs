//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: Cells are monotonic (never overwritten).
///
/// Once a cell transitions from Empty to Occupied, it never changes.
/// This is verified by replaying the move history and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = [[Square::Empty; 9]; 9];

        for turn in game.history() {
            let cell = &mut reconstructed[turn.mv.board.to_index()][turn.mv.cell.to_index()];
            if !cell.is_empty() {
                return false;
            }
            *cell = Square::Occupied(turn.player);
        }

        reconstructed
            .iter()
            .zip(game.boards())
            .all(|(cells, board)| cells == board.squares())
    }

    fn description() -> &'static str {
        "Cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move, Position, Turn};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut game = GameState::new();
        for (b, c) in [(4, 0), (0, 4), (4, 4), (4, 2)] {
            game.apply_move(Move::from_indices(b, c).unwrap()).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = GameState::new();
        game.apply_move(Move::new(Position::Center, Position::Center)).unwrap();

        // Flip the mark in place.
        game.boards[4].squares_mut()[4] = Square::Occupied(Mark::O);
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut game = GameState::new();
        let mv = Move::new(Position::TopLeft, Position::TopLeft);
        game.apply_move(mv).unwrap();
        game.history.push(Turn::new(Mark::O, mv));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
