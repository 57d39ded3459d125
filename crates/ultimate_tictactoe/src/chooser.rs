//! Move choosers: pluggable strategies for non-interactive players.

use crate::action::Move;
use crate::state::GameState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// A strategy that picks the next move for the player to move.
///
/// Choosers only read the state; the caller feeds the returned move into
/// [`GameState::apply_move`], so swapping strategies never changes the
/// move contract.
pub trait MoveChooser {
    /// Picks a legal move, or `None` if there is none.
    fn choose(&mut self, state: &GameState) -> Option<Move>;

    /// Returns the chooser's display name.
    fn name(&self) -> &str;
}

/// Picks uniformly among the legal moves.
#[derive(Debug, Clone)]
pub struct RandomChooser<R = StdRng> {
    name: String,
    rng: R,
}

impl RandomChooser<StdRng> {
    /// Creates a chooser seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a reproducible chooser.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomChooser<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomChooser<R> {
    /// Creates a chooser drawing from the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self {
            name: "Random".to_string(),
            rng,
        }
    }

    /// Renames the chooser.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<R: Rng> MoveChooser for RandomChooser<R> {
    #[instrument(skip_all, fields(chooser = %self.name))]
    fn choose(&mut self, state: &GameState) -> Option<Move> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            debug!("No legal moves available");
            return None;
        }
        let mv = moves[self.rng.random_range(0..moves.len())];
        debug!(board = %mv.board, cell = %mv.cell, options = moves.len(), "Chose move");
        Some(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Picks the first legal move (lowest board, then lowest cell).
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl MoveChooser for FirstAvailable {
    fn choose(&mut self, state: &GameState) -> Option<Move> {
        state.legal_moves().into_iter().next()
    }

    fn name(&self) -> &str {
        "First available"
    }
}
