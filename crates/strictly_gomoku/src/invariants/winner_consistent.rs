//! Winner consistency invariant: a winner exists exactly in `FinishedWin`.

use super::super::{Game, GameStatus};
use super::Invariant;

/// Invariant: the winner is set if and only if the game was won.
pub struct WinnerConsistentInvariant;

impl Invariant<Game> for WinnerConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.winner().is_some() == (game.status() == GameStatus::FinishedWin)
    }

    fn description() -> &'static str {
        "Winner is set only while the game is won"
    }
}
