//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::GameState;

/// Invariant: History length equals number of occupied cells.
///
/// Every move in history corresponds to exactly one occupied cell.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let occupied = game
            .boards()
            .iter()
            .flat_map(|board| board.squares())
            .filter(|s| !s.is_empty())
            .count();

        game.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
