//! Tests for the gomoku game engine lifecycle.

use strictly_gomoku::{
    BoardSize, Cell, Coord, Game, GameStatus, GomokuInvariants, InvariantSet, Move, MoveError,
    MoveOutcome, Player,
};

fn started(size: usize) -> Game {
    let mut game = Game::new(BoardSize::new(size).expect("valid size"));
    game.start();
    game
}

/// Plays `(row, col)` pairs in order, expecting the game to continue.
fn play(game: &mut Game, coords: &[(usize, usize)]) {
    for &(row, col) in coords {
        assert_eq!(game.place(row, col), Ok(MoveOutcome::Continue), "at ({row}, {col})");
    }
}

#[test]
fn test_move_before_start_is_rejected() {
    let mut game = Game::default();
    let before = game.clone();
    assert_eq!(
        game.place(0, 0),
        Err(MoveError::Status(GameStatus::NotStarted))
    );
    assert_eq!(game, before);
}

#[test]
fn test_start_awaits_black() {
    let game = started(16);
    assert_eq!(game.status(), GameStatus::AwaitingBlack);
    assert_eq!(game.current_player(), Some(Player::Black));
}

#[test]
fn test_row_win() {
    let mut game = started(16);
    play(
        &mut game,
        &[
            (0, 0),
            (1, 0),
            (0, 1),
            (1, 1),
            (0, 2),
            (1, 2),
            (0, 3),
            (1, 3),
        ],
    );

    assert_eq!(game.place(0, 4), Ok(MoveOutcome::GameOverWin(Player::Black)));
    assert_eq!(game.winner(), Some(Player::Black));
    assert_eq!(game.status(), GameStatus::FinishedWin);
    assert_eq!(game.step_count(), 9);
}

#[test]
fn test_diagonal_win() {
    let mut game = started(16);
    play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (1, 1),
            (0, 2),
            (2, 2),
            (0, 3),
            (3, 3),
            (0, 4),
        ],
    );

    assert_eq!(game.place(4, 4), Ok(MoveOutcome::GameOverWin(Player::Black)));
}

#[test]
fn test_anti_diagonal_win_for_white() {
    let mut game = started(16);
    play(
        &mut game,
        &[
            (15, 0),
            (0, 15),
            (15, 2),
            (1, 14),
            (15, 4),
            (2, 13),
            (15, 6),
            (3, 12),
            (14, 9),
        ],
    );

    assert_eq!(game.place(4, 11), Ok(MoveOutcome::GameOverWin(Player::White)));
    assert_eq!(game.winner(), Some(Player::White));
}

#[test]
fn test_column_win_on_bottom_edge() {
    let mut game = started(16);
    play(
        &mut game,
        &[
            (11, 15),
            (0, 0),
            (12, 15),
            (0, 2),
            (13, 15),
            (0, 4),
            (14, 15),
            (0, 6),
        ],
    );

    assert_eq!(game.place(15, 15), Ok(MoveOutcome::GameOverWin(Player::Black)));
}

#[test]
fn test_overline_wins_once() {
    let mut game = started(16);
    play(
        &mut game,
        &[
            (5, 0),
            (10, 0),
            (5, 1),
            (10, 2),
            (5, 2),
            (10, 4),
            (5, 4),
            (10, 6),
            (5, 5),
            (10, 8),
        ],
    );

    assert_eq!(game.place(5, 3), Ok(MoveOutcome::GameOverWin(Player::Black)));
    assert_eq!(
        game.place(6, 6),
        Err(MoveError::Status(GameStatus::FinishedWin))
    );
    assert_eq!(game.step_count(), 11);
}

/// Colours an 8x8 board in 2-wide stripes shifted every row, which never
/// puts three equal stones in a line.
fn striped(row: usize, col: usize) -> Player {
    if (col / 2 + row) % 2 == 0 {
        Player::Black
    } else {
        Player::White
    }
}

#[test]
fn test_full_board_is_draw() {
    let mut game = started(8);
    let cells: Vec<(usize, usize)> = (0..8).flat_map(|r| (0..8).map(move |c| (r, c))).collect();
    let black: Vec<_> = cells.iter().filter(|&&(r, c)| striped(r, c) == Player::Black).collect();
    let white: Vec<_> = cells.iter().filter(|&&(r, c)| striped(r, c) == Player::White).collect();
    assert_eq!(black.len(), white.len());

    let order: Vec<(usize, usize)> = black
        .iter()
        .zip(white.iter())
        .flat_map(|(b, w)| [**b, **w])
        .collect();
    let (last, rest) = order.split_last().expect("non-empty board");
    play(&mut game, rest);

    assert_eq!(game.place(last.0, last.1), Ok(MoveOutcome::GameOverDraw));
    assert_eq!(game.status(), GameStatus::FinishedDraw);
    assert_eq!(game.winner(), None);
    assert!(game.valid_moves().is_empty());

    let before = game.clone();
    assert_eq!(
        game.place(0, 0),
        Err(MoveError::Status(GameStatus::FinishedDraw))
    );
    assert_eq!(game, before);
}

#[test]
fn test_tiny_board_draws() {
    let mut game = started(2);
    play(&mut game, &[(0, 0), (0, 1), (1, 0)]);
    assert_eq!(game.place(1, 1), Ok(MoveOutcome::GameOverDraw));
}

#[test]
fn test_rejected_moves_leave_state_unchanged() {
    let mut game = started(16);
    play(&mut game, &[(7, 7)]);
    let before = game.clone();

    assert_eq!(
        game.place(16, 3),
        Err(MoveError::OutOfRange {
            row: 16,
            col: 3,
            size: 16
        })
    );
    assert_eq!(
        game.place(3, usize::MAX),
        Err(MoveError::OutOfRange {
            row: 3,
            col: usize::MAX,
            size: 16
        })
    );
    assert_eq!(
        game.place(7, 7),
        Err(MoveError::CellOccupied(Coord::new(7, 7)))
    );
    assert_eq!(game, before);
}

#[test]
fn test_rollback_until_empty() {
    let mut game = started(16);
    play(&mut game, &[(0, 0), (1, 1), (2, 2)]);

    assert_eq!(game.rollback(), Ok(Move::new(Player::Black, Coord::new(2, 2))));
    assert_eq!(game.rollback(), Ok(Move::new(Player::White, Coord::new(1, 1))));
    assert_eq!(game.rollback(), Ok(Move::new(Player::Black, Coord::new(0, 0))));
    assert_eq!(game.rollback(), Err(MoveError::EmptyHistory));

    assert_eq!(game.board().occupied(), 0);
    assert_eq!(game.status(), GameStatus::AwaitingBlack);
}

#[test]
fn test_rollback_on_fresh_game() {
    let mut game = Game::default();
    assert_eq!(game.rollback(), Err(MoveError::EmptyHistory));
    assert_eq!(game.status(), GameStatus::NotStarted);
}

#[test]
fn test_place_then_rollback_round_trips() {
    let mut game = started(16);
    play(&mut game, &[(3, 3), (4, 4), (5, 5)]);
    let before = game.clone();

    game.place(9, 1).expect("legal move");
    game.rollback().expect("one move to undo");
    assert_eq!(game, before);
}

#[test]
fn test_rollback_reopens_drawn_game() {
    let mut game = started(2);
    play(&mut game, &[(0, 0), (0, 1), (1, 0)]);
    game.place(1, 1).expect("final move");

    let undone = game.rollback().expect("undo final move");
    assert_eq!(undone.player, Player::White);
    assert_eq!(game.status(), GameStatus::AwaitingWhite);
    assert_eq!(game.board().get(Coord::new(1, 1)), Some(Cell::Empty));
    assert!(GomokuInvariants::check_all(&game).is_ok());
}

#[test]
fn test_reset_after_win() {
    let mut game = started(16);
    play(
        &mut game,
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3)],
    );
    game.place(0, 4).expect("winning move");

    game.reset();
    assert_eq!(game.status(), GameStatus::NotStarted);
    assert_eq!(game.winner(), None);
    assert!(game.history().is_empty());
    game.start();
    assert_eq!(game.place(0, 4), Ok(MoveOutcome::Continue));
}

#[test]
fn test_replay_stops_at_first_rejection() {
    let coords = [Coord::new(0, 0), Coord::new(0, 0)];
    assert_eq!(
        Game::replay(BoardSize::DEFAULT, &coords),
        Err(MoveError::CellOccupied(Coord::new(0, 0)))
    );
}

#[test]
fn test_snapshot_serializes_record() {
    let game = Game::replay(BoardSize::new(9).unwrap(), &[Coord::new(4, 4)]).unwrap();
    let value = serde_json::to_value(&game).expect("serializable");

    assert_eq!(value["status"], "AwaitingWhite");
    assert_eq!(value["board"]["size"], 9);
    assert_eq!(value["history"][0]["player"], "Black");
    assert_eq!(value["history"][0]["coord"]["row"], 4);

    let back: Game = serde_json::from_value(value).expect("deserializable");
    assert_eq!(back, game);
}

#[test]
fn test_snapshot_with_short_board_is_rejected() {
    let json = r#"{"board":{"size":9,"cells":["Empty"]},"history":[],"status":"AwaitingBlack","winner":null}"#;
    let err = serde_json::from_str::<Game>(json).unwrap_err();
    assert!(err.to_string().contains("needs 81 cells"), "{err}");
}

#[test]
fn test_snapshot_inconsistent_with_record_is_rejected() {
    let game = Game::replay(BoardSize::new(5).unwrap(), &[Coord::new(2, 2)]).unwrap();
    let mut value = serde_json::to_value(&game).unwrap();

    value["history"] = serde_json::json!([]);
    assert!(serde_json::from_value::<Game>(value).is_err());

    let mut value = serde_json::to_value(&game).unwrap();
    value["winner"] = serde_json::json!("Black");
    assert!(serde_json::from_value::<Game>(value).is_err());

    let mut value = serde_json::to_value(&game).unwrap();
    value["status"] = serde_json::json!("NotStarted");
    assert!(serde_json::from_value::<Game>(value).is_err());
}
