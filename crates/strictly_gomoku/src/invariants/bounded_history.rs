//! Bounded history invariant: no more moves than cells.

use super::super::Game;
use super::Invariant;

/// Invariant: the move record never exceeds N² entries.
pub struct BoundedHistoryInvariant;

impl Invariant<Game> for BoundedHistoryInvariant {
    fn holds(game: &Game) -> bool {
        game.history().len() <= game.size().cells()
    }

    fn description() -> &'static str {
        "Move record length is at most N squared"
    }
}
