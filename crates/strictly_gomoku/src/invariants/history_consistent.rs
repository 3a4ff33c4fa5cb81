//! History consistency invariant: the board is exactly the move record.

use super::super::{Cell, Game};
use super::Invariant;

/// Invariant: every stone on the board has one record entry and vice versa.
///
/// The occupied count equals the record length, and each record entry's
/// cell holds that entry's player.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        board.occupied() == game.history().len()
            && game
                .history()
                .iter()
                .all(|m| board.get(m.coord) == Some(Cell::Stone(m.player)))
    }

    fn description() -> &'static str {
        "Board stones match the move record one to one"
    }
}
