//! Human-readable text for game state.

use strictly_gomoku::{Coord, Game, GameStatus, MoveOutcome, Player};

/// Status line shown to the players.
pub fn status_label(game: &Game) -> &'static str {
    match (game.status(), game.winner()) {
        (GameStatus::NotStarted, _) => "Wait to start",
        (GameStatus::AwaitingBlack, _) => "Waiting for black...",
        (GameStatus::AwaitingWhite, _) => "Waiting for white...",
        (GameStatus::FinishedWin, Some(Player::Black)) => "Black wins!",
        (GameStatus::FinishedWin, Some(Player::White)) => "White wins!",
        (GameStatus::FinishedWin, None) | (GameStatus::FinishedDraw, _) => "Game is over",
    }
}

/// Feedback after `player` placed at `coord`.
pub fn outcome_message(player: Player, coord: Coord, outcome: MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Continue => format!("{} played {}", player, coord),
        MoveOutcome::GameOverWin(winner) => format!("{} wins with {}!", winner, coord),
        MoveOutcome::GameOverDraw => "Board full, the game is drawn".to_string(),
    }
}
