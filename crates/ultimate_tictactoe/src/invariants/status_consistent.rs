//! Status consistency invariant: cached statuses match the cells.

use super::Invariant;
use crate::rules;
use crate::{Claim, GameState};

/// Invariant: every cached status agrees with a fresh evaluation.
///
/// Each sub-board status is what its cells say, each meta-board claim is
/// the reduction of that status, and the game result is what the
/// meta-board says.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let boards_agree = game.boards().iter().zip(game.meta().claims()).all(|(board, claim)| {
            let status = rules::sub_board_status(board.squares());
            board.status() == status && *claim == Claim::from(status)
        });

        boards_agree && game.status() == rules::game_status(game.meta().claims())
    }

    fn description() -> &'static str {
        "Sub-board, meta-board and game statuses match the cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, Mark, Move, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(StatusConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_won_sub_board_holds() {
        let mut game = GameState::new();
        // X takes the top row of board 0.
        for (b, c) in [(0, 0), (0, 4), (4, 3), (3, 0), (0, 1), (1, 0), (0, 2)] {
            game.apply_move(Move::from_indices(b, c).unwrap()).unwrap();
        }
        assert_eq!(game.meta().get(Position::TopLeft), Claim::ClaimedBy(Mark::X));
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_stale_claim_violates() {
        let mut game = GameState::new();
        game.meta.set(Position::Center, Claim::ClaimedBy(Mark::X));
        assert!(!StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_stale_result_violates() {
        let mut game = GameState::new();
        game.status = GameStatus::Draw;
        assert!(!StatusConsistentInvariant::holds(&game));
    }
}
