//! Routing invariant: the active sub-board follows the last cell played.

use super::Invariant;
use crate::GameState;

/// Invariant: `active_board` is the last move's cell, or `None` when that
/// sub-board is decided or no move has been made.
pub struct RoutingInvariant;

impl Invariant<GameState> for RoutingInvariant {
    fn holds(game: &GameState) -> bool {
        let expected = game
            .last_move()
            .map(|mv| mv.cell)
            .filter(|&cell| game.board(cell).is_open());
        game.active_board() == expected
    }

    fn description() -> &'static str {
        "Active sub-board is routed by the last cell played"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(RoutingInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_routed_after_move() {
        let mut game = GameState::new();
        game.apply_move(Move::new(Position::Center, Position::BottomLeft)).unwrap();
        assert!(RoutingInvariant::holds(&game));
        assert_eq!(game.active_board(), Some(Position::BottomLeft));
    }

    #[test]
    fn test_wrong_route_violates() {
        let mut game = GameState::new();
        game.apply_move(Move::new(Position::Center, Position::BottomLeft)).unwrap();
        game.active_board = Some(Position::TopLeft);
        assert!(!RoutingInvariant::holds(&game));
    }
}
