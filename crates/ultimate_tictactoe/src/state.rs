//! Complete game state and the move transition.

use crate::action::{IllegalMove, Move, Turn};
use crate::board::{MetaBoard, SubBoard};
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::types::{BoardStatus, Claim, GameStatus, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The aggregate root: nine sub-boards, the meta-board, whose turn it is,
/// where they must play, and the overall result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) boards: [SubBoard; 9],
    pub(crate) meta: MetaBoard,
    pub(crate) current_player: Mark,
    pub(crate) active_board: Option<Position>,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Turn>,
}

impl GameState {
    /// Creates a fresh game: every cell empty, X to move anywhere.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: Default::default(),
            meta: MetaBoard::new(),
            current_player: Mark::X,
            active_board: None,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns all nine sub-boards.
    pub fn boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// Returns one sub-board.
    pub fn board(&self, pos: Position) -> &SubBoard {
        &self.boards[pos.to_index()]
    }

    /// Returns the square at `cell` of sub-board `board`.
    pub fn square(&self, board: Position, cell: Position) -> Square {
        self.board(board).get(cell)
    }

    /// Returns the status of one sub-board.
    pub fn board_status(&self, pos: Position) -> BoardStatus {
        self.board(pos).status()
    }

    /// Returns the meta-board.
    pub fn meta(&self) -> &MetaBoard {
        &self.meta
    }

    /// Returns the player to move.
    ///
    /// This flips after every accepted move, including the final one, so
    /// check [`status`](Self::status) before asking anyone to play.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the sub-board the next move is routed to, if constrained.
    ///
    /// The routing is lifted for a turn when the named board is decided,
    /// so prefer [`eligible_boards`](Self::eligible_boards) for legality.
    pub fn active_board(&self) -> Option<Position> {
        self.active_board
    }

    /// Returns the overall result.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Returns the last move played.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|turn| turn.mv)
    }

    /// Sub-boards the next move may target.
    pub fn eligible_boards(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        match self.active_board {
            Some(pos) if self.board(pos).is_open() => vec![pos],
            _ => Position::ALL
                .into_iter()
                .filter(|&pos| self.board(pos).is_open())
                .collect(),
        }
    }

    /// All legal moves, ordered by sub-board then cell.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.eligible_boards()
            .into_iter()
            .flat_map(|board| {
                self.board(board)
                    .empty_cells()
                    .map(move |cell| Move::new(board, cell))
            })
            .collect()
    }

    /// Checks a move against the current state without applying it.
    pub fn validate(&self, mv: Move) -> Result<(), IllegalMove> {
        MoveContract::pre(self, &mv)
    }

    /// Returns true if the move would be accepted.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.validate(mv).is_ok()
    }

    /// Plays `mv` for the current player.
    ///
    /// Either the whole transition happens or nothing changes: on error the
    /// state is exactly what it was before the call.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if the game is over, the board is decided or
    /// not the routed one, or the cell is taken.
    #[instrument(skip(self), fields(board = %mv.board, cell = %mv.cell, player = %self.current_player))]
    pub fn apply_move(&mut self, mv: Move) -> Result<(), IllegalMove> {
        MoveContract::pre(self, &mv)?;

        // Postconditions are checked in debug builds only.
        if cfg!(debug_assertions) {
            let before = self.clone();
            self.commit(mv);
            if let Err(err) = MoveContract::post(&before, self) {
                *self = before;
                return Err(err);
            }
        } else {
            self.commit(mv);
        }

        Ok(())
    }

    /// Applies a validated move.
    fn commit(&mut self, mv: Move) {
        let player = self.current_player;
        let board_status = self.boards[mv.board.to_index()].place(mv.cell, player);
        self.meta.set(mv.board, Claim::from(board_status));
        self.history.push(Turn::new(player, mv));

        if board_status.is_decided() {
            debug!(board = %mv.board, status = ?board_status, "Sub-board decided");
        }

        self.status = self.meta.status();
        if self.status.is_over() {
            info!(status = %self.status, moves = self.history.len(), "Game over");
        }

        // The cell just played names the next board, unless that board is
        // already decided (won or drawn).
        self.active_board = self.board(mv.cell).is_open().then_some(mv.cell);
        self.current_player = player.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the 9×9 grid with sub-boards separated by rules.
impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for board_row in 0..3 {
            if board_row > 0 {
                writeln!(f, "----+-----+----")?;
            }
            for cell_row in 0..3 {
                let line = (0..3)
                    .map(|board_col| self.boards[board_row * 3 + board_col].row_string(cell_row))
                    .collect::<Vec<_>>()
                    .join(" | ");
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}
