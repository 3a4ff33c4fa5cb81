//! Alternating turn invariant: black, white, black, white, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: players alternate, black first.
///
/// Rollback only pops the newest entry, so the record keeps this shape
/// through undo as well. While a move is awaited, the awaited player is
/// the one the record's parity calls for.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first() {
            if first.player != Player::Black {
                return false;
            }
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        match game.current_player() {
            Some(to_move) => {
                let expected = if history.len() % 2 == 0 {
                    Player::Black
                } else {
                    Player::White
                };
                to_move == expected
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns, black first"
    }
}
