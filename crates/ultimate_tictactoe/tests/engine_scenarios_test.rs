//! Scenario tests for the ultimate tic-tac-toe engine.

use ultimate_tictactoe::{
    BoardStatus, Claim, Game, GameState, GameStatus, IllegalMove, Mark, Move, Position, Square,
    apply_move, legal_moves, new_game,
};

fn play(moves: &[(u8, u8)]) -> GameState {
    let mut state = new_game();
    for &(board, cell) in moves {
        state = apply_move(&state, board, cell)
            .unwrap_or_else(|e| panic!("move ({board}, {cell}) rejected: {e}"));
    }
    state
}

/// X claims sub-boards 0, 4 and 8; the last move completes board 8.
const DIAGONAL_WIN: [(u8, u8); 25] = [
    (0, 2), (2, 4), (4, 1), (1, 4), (4, 4), (4, 0), (0, 5), (5, 7), (7, 3), (3, 4),
    (4, 6), (6, 0), (0, 0), (0, 4), (4, 7), (7, 0), (0, 1), (1, 3), (3, 5), (5, 4),
    (8, 6), (6, 8), (8, 0), (2, 0), (8, 3),
];

/// Every sub-board ends up claimed without a line on the meta-board.
const META_DRAW: [(u8, u8); 44] = [
    (1, 2), (2, 5), (5, 3), (3, 0), (0, 4), (4, 2), (2, 8), (8, 0), (0, 7), (7, 6),
    (6, 8), (8, 8), (8, 7), (7, 0), (0, 3), (3, 4), (4, 1), (1, 6), (6, 7), (7, 8),
    (8, 1), (1, 0), (0, 8), (8, 4), (4, 8), (7, 7), (4, 7), (3, 8), (1, 1), (1, 3),
    (6, 6), (2, 2), (2, 3), (0, 5), (5, 8), (2, 1), (5, 0), (0, 1), (5, 6), (4, 3),
    (4, 4), (0, 0), (0, 6), (2, 0),
];

/// Sub-board 5 fills up without a winner on the last move listed.
const DRAWN_BOARD_5: [(u8, u8); 33] = [
    (5, 6), (6, 6), (6, 3), (3, 8), (8, 5), (5, 3), (3, 4), (4, 5), (5, 5), (5, 2),
    (2, 2), (2, 4), (4, 4), (4, 2), (2, 5), (5, 7), (7, 8), (8, 7), (7, 3), (3, 7),
    (7, 5), (5, 4), (4, 6), (6, 8), (8, 6), (6, 5), (5, 1), (1, 5), (5, 8), (8, 4),
    (4, 3), (3, 5), (5, 0),
];

#[test]
fn test_first_move_routes_opponent() {
    let state = play(&[(4, 0)]);

    assert_eq!(state.square(Position::Center, Position::TopLeft), Square::Occupied(Mark::X));
    assert_eq!(state.active_board(), Some(Position::TopLeft));
    assert_eq!(state.current_player(), Mark::O);
    assert_eq!(legal_moves(&state), (0..9).map(|c| (0, c)).collect::<Vec<_>>());
}

#[test]
fn test_sub_board_win_claims_meta_slot() {
    let state = play(&[(0, 0), (0, 4), (4, 3), (3, 0), (0, 1), (1, 0), (0, 2)]);

    assert_eq!(state.board_status(Position::TopLeft), BoardStatus::Won(Mark::X));
    assert_eq!(state.meta().get(Position::TopLeft), Claim::ClaimedBy(Mark::X));
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.active_board(), Some(Position::TopRight));
}

#[test]
fn test_routing_to_won_board_is_lifted() {
    // Board 0 is X's; O now plays cell 0 of board 2, sending X to board 0.
    let state = play(&[(0, 0), (0, 4), (4, 3), (3, 0), (0, 1), (1, 0), (0, 2), (2, 0)]);

    assert_eq!(state.active_board(), None);
    let boards: Vec<Position> = state.eligible_boards();
    assert_eq!(boards.len(), 8);
    assert!(!boards.contains(&Position::TopLeft));
}

#[test]
fn test_move_into_decided_board_rejected() {
    let before = play(&[(0, 0), (0, 4), (4, 3), (3, 0), (0, 1), (1, 0), (0, 2), (2, 0)]);

    let err = apply_move(&before, 0, 8).unwrap_err();
    assert_eq!(err, IllegalMove::BoardClosed(Position::TopLeft));
}

#[test]
fn test_drawn_sub_board_lifts_routing() {
    let state = play(&DRAWN_BOARD_5);
    assert_eq!(state.board_status(Position::MiddleRight), BoardStatus::Drawn);
    assert_eq!(state.meta().get(Position::MiddleRight), Claim::Drawn);

    // O plays cell 5, which names the drawn board.
    let state = apply_move(&state, 0, 5).unwrap();
    assert_eq!(state.active_board(), None);
    assert_eq!(state.current_player(), Mark::X);

    let boards = state.eligible_boards();
    assert_eq!(boards.len(), 8);
    assert!(!boards.contains(&Position::MiddleRight));
    assert_eq!(legal_moves(&state).len(), 47);
}

#[test]
fn test_meta_diagonal_wins_immediately() {
    let before = play(&DIAGONAL_WIN[..24]);
    assert_eq!(before.status(), GameStatus::InProgress);

    let state = play(&DIAGONAL_WIN);
    assert_eq!(state.status(), GameStatus::Won(Mark::X));
    assert_eq!(state.winner(), Some(Mark::X));
    for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
        assert_eq!(state.meta().get(pos), Claim::ClaimedBy(Mark::X));
    }

    // Open cells remain, but nothing is legal and the turn still flipped.
    let empty = state
        .boards()
        .iter()
        .flat_map(|b| b.squares())
        .filter(|s| s.is_empty())
        .count();
    assert_eq!(empty, 56);
    assert!(legal_moves(&state).is_empty());
    assert_eq!(state.current_player(), Mark::O);
    assert_eq!(apply_move(&state, 3, 0), Err(IllegalMove::GameOver));
}

#[test]
fn test_meta_draw() {
    let before = play(&META_DRAW[..43]);
    assert_eq!(before.status(), GameStatus::InProgress);
    assert_eq!(before.legal_moves().len(), 4);

    let state = play(&META_DRAW);
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.winner(), None);
    assert!(state.meta().claims().iter().all(|c| *c != Claim::Unclaimed));
    assert!(legal_moves(&state).is_empty());
    assert_eq!(apply_move(&state, 2, 4), Err(IllegalMove::GameOver));
}

#[test]
fn test_failed_move_leaves_state_unchanged() {
    let before = play(&[(4, 0), (0, 4)]);

    for (board, cell) in [(0, 0), (4, 0), (9, 0), (4, 9)] {
        let mut state = before.clone();
        let mv = Move::from_indices(board, cell);
        if let Ok(mv) = mv {
            assert!(state.apply_move(mv).is_err());
        }
        assert_eq!(state, before);
    }
}

#[test]
fn test_game_wrapper_replay() {
    let moves: Vec<Move> = DIAGONAL_WIN
        .iter()
        .map(|&(b, c)| Move::from_indices(b, c).unwrap())
        .collect();
    let game = Game::replay(&moves).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(game.state().history().len(), 25);
}
