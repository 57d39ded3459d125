//! Game engine: the call surface for presentation layers.
//!
//! [`Game`] owns a [`GameState`] and drives it in place. The free functions
//! work on raw `u8` indices and never touch their input, returning a new
//! state instead, for callers that keep their own copy per frame.

use crate::action::{IllegalMove, Move};
use crate::chooser::{MoveChooser, RandomChooser};
use crate::state::GameState;
use crate::types::{GameStatus, Mark};
use rand::rngs::ThreadRng;
use tracing::{info, instrument};

/// Returns the initial state.
pub fn new_game() -> GameState {
    GameState::new()
}

/// Returns a fresh state, discarding whatever came before.
pub fn reset() -> GameState {
    GameState::new()
}

/// Legal moves as `(board, cell)` index pairs.
pub fn legal_moves(state: &GameState) -> Vec<(u8, u8)> {
    state.legal_moves().into_iter().map(Move::to_indices).collect()
}

/// Plays `(board, cell)` for the current player and returns the new state.
///
/// # Errors
///
/// Returns [`IllegalMove`] for indices outside 0-8 or any move not in
/// [`legal_moves`]. The input state is never modified.
pub fn apply_move(state: &GameState, board: u8, cell: u8) -> Result<GameState, IllegalMove> {
    let mv = Move::from_indices(board, cell)?;
    let mut next = state.clone();
    next.apply_move(mv)?;
    Ok(next)
}

/// Picks a uniformly random legal move, or `None` when there is none.
pub fn choose_random_move(state: &GameState) -> Option<(u8, u8)> {
    RandomChooser::<ThreadRng>::with_rng(rand::rng())
        .choose(state)
        .map(Move::to_indices)
}

/// Ultimate tic-tac-toe game engine owning its state.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Replays moves from the initial state.
    ///
    /// # Errors
    ///
    /// Stops at the first illegal move and returns its error.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, IllegalMove> {
        let mut game = Self::new();
        for &mv in moves {
            game.make_move(mv)?;
        }
        Ok(game)
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the game, returning its state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Returns the overall result.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Legal moves for the player to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.state.legal_moves()
    }

    /// Makes a move for the current player.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] and leaves the game unchanged if the move is
    /// not legal.
    pub fn make_move(&mut self, mv: Move) -> Result<GameStatus, IllegalMove> {
        self.state.apply_move(mv)?;
        Ok(self.state.status())
    }

    /// Asks `chooser` for a move and plays it.
    ///
    /// Returns `Ok(None)` when the chooser has nothing to offer, which only
    /// happens once the game is over.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if the chooser proposes an illegal move.
    #[instrument(skip_all, fields(chooser = chooser.name(), player = %self.state.current_player()))]
    pub fn play_turn(&mut self, chooser: &mut dyn MoveChooser) -> Result<Option<Move>, IllegalMove> {
        let Some(mv) = chooser.choose(&self.state) else {
            return Ok(None);
        };
        self.make_move(mv)?;
        Ok(Some(mv))
    }

    /// Plays both sides with the given choosers until the game ends.
    ///
    /// # Errors
    ///
    /// Returns the first [`IllegalMove`] either chooser proposes.
    pub fn play_out(
        &mut self,
        x: &mut dyn MoveChooser,
        o: &mut dyn MoveChooser,
    ) -> Result<GameStatus, IllegalMove> {
        while !self.state.is_over() {
            let chooser: &mut dyn MoveChooser = match self.state.current_player() {
                Mark::X => &mut *x,
                Mark::O => &mut *o,
            };
            if self.play_turn(chooser)?.is_none() {
                break;
            }
        }
        info!(status = %self.state.status(), moves = self.state.history().len(), "Played out");
        Ok(self.state.status())
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = reset();
    }
}
