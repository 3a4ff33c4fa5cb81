//! Contract-based validation for gomoku transitions.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.
//! Preconditions are always checked; [`Game`] checks postconditions in
//! debug builds only.

use super::action::MoveError;
use super::game::Game;
use super::invariants::{GomokuInvariants, InvariantSet};
use super::types::Coord;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: a player must be awaited.
pub struct GameInProgress;

impl GameInProgress {
    /// Fails with the current status when no move is expected.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        match game.current_player() {
            Some(_) => Ok(()),
            None => Err(MoveError::Status(game.status())),
        }
    }
}

/// Precondition: the coordinate must lie on the board.
pub struct OnBoard;

impl OnBoard {
    /// Fails when either coordinate is outside `[0, N)`.
    #[instrument(skip(game))]
    pub fn check(row: usize, col: usize, game: &Game) -> Result<(), MoveError> {
        let size = game.size();
        if size.contains(Coord::new(row, col)) {
            Ok(())
        } else {
            Err(MoveError::OutOfRange {
                row,
                col,
                size: size.get(),
            })
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails when the cell already holds a stone.
    #[instrument(skip(game))]
    pub fn check(coord: Coord, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(coord))
        }
    }
}

/// Composite precondition, checked in the order status, range, occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for placing at `(row, col)`.
    #[instrument(skip(game))]
    pub fn check(row: usize, col: usize, game: &Game) -> Result<(), MoveError> {
        GameInProgress::check(game)?;
        OnBoard::check(row, col, game)?;
        CellIsEmpty::check(Coord::new(row, col), game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Contracts
// ─────────────────────────────────────────────────────────────

fn check_invariants(after: &Game, transition: &str) -> Result<(), MoveError> {
    GomokuInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(transition, %descriptions, "Postcondition failed");
        MoveError::InvariantViolation(format!(
            "Postcondition of {} failed: {}",
            transition, descriptions
        ))
    })
}

/// Contract for placing a stone.
///
/// Postconditions: exactly one record entry was appended and all
/// [`GomokuInvariants`] hold.
pub struct MoveContract;

impl Contract<Game, (usize, usize)> for MoveContract {
    fn pre(game: &Game, &(row, col): &(usize, usize)) -> Result<(), MoveError> {
        LegalMove::check(row, col, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.step_count() != before.step_count() + 1 {
            return Err(MoveError::InvariantViolation(
                "Move must append exactly one record entry".to_string(),
            ));
        }
        check_invariants(after, "move")
    }
}

/// Contract for undoing a move.
///
/// Postconditions: exactly one record entry was removed, play returned to
/// its owner, and all [`GomokuInvariants`] hold.
pub struct RollbackContract;

impl Contract<Game, ()> for RollbackContract {
    fn pre(game: &Game, _action: &()) -> Result<(), MoveError> {
        if game.history().is_empty() {
            Err(MoveError::EmptyHistory)
        } else {
            Ok(())
        }
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        let undone = before.last_move();
        if after.step_count() + 1 != before.step_count()
            || after.current_player() != undone.map(|m| m.player)
        {
            return Err(MoveError::InvariantViolation(
                "Rollback must remove one entry and return play to its owner".to_string(),
            ));
        }
        check_invariants(after, "rollback")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Cell, GameStatus, Player};

    #[test]
    fn test_precondition_not_started() {
        let game = Game::default();
        assert_eq!(
            MoveContract::pre(&game, &(0, 0)),
            Err(MoveError::Status(GameStatus::NotStarted))
        );
    }

    #[test]
    fn test_precondition_order_status_before_range() {
        let game = Game::default();
        assert!(matches!(
            MoveContract::pre(&game, &(99, 99)),
            Err(MoveError::Status(_))
        ));
    }

    #[test]
    fn test_precondition_out_of_range() {
        let game = Game::replay(BoardSize::DEFAULT, &[]).unwrap();
        assert_eq!(
            MoveContract::pre(&game, &(16, 0)),
            Err(MoveError::OutOfRange {
                row: 16,
                col: 0,
                size: 16
            })
        );
    }

    #[test]
    fn test_precondition_occupied() {
        let game = Game::replay(BoardSize::DEFAULT, &[Coord::new(3, 4)]).unwrap();
        assert_eq!(
            MoveContract::pre(&game, &(3, 4)),
            Err(MoveError::CellOccupied(Coord::new(3, 4)))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::replay(BoardSize::DEFAULT, &[]).unwrap();
        let mut after = before.clone();
        after.place(8, 8).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::replay(BoardSize::DEFAULT, &[]).unwrap();
        let mut after = before.clone();
        after.place(8, 8).unwrap();
        after.board.set(Coord::new(0, 0), Cell::Stone(Player::White));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_rollback_contract() {
        let empty = Game::replay(BoardSize::DEFAULT, &[]).unwrap();
        assert_eq!(
            RollbackContract::pre(&empty, &()),
            Err(MoveError::EmptyHistory)
        );

        let before = Game::replay(BoardSize::DEFAULT, &[Coord::new(2, 2)]).unwrap();
        let mut after = before.clone();
        after.rollback().unwrap();
        assert!(RollbackContract::post(&before, &after).is_ok());
    }
}
