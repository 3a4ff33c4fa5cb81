//! Moves, move outcomes, and move errors.
//!
//! A move is a domain event: who placed a stone and where. The move
//! record of a game is a `Vec<Move>` in chronological order.

use super::{Coord, GameStatus, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A stone placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{} -> {}", player, coord)]
pub struct Move {
    /// The player who placed the stone.
    pub player: Player,
    /// Where the stone was placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the coordinate of this move.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

/// Successful result of placing a stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum MoveOutcome {
    /// The game goes on with the other player.
    #[display("continue")]
    Continue,
    /// The move completed five in a row.
    #[display("{} wins", _0)]
    GameOverWin(Player),
    /// The move filled the last empty cell.
    #[display("draw")]
    GameOverDraw,
}

impl MoveOutcome {
    /// Checks if the move ended the game.
    pub fn is_game_over(self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }
}

/// Error that can occur when validating or applying a move or rollback.
///
/// Every variant leaves the game unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Moves are only accepted while a player is awaited.
    #[display("Cannot move while game is {}", _0)]
    Status(GameStatus),

    /// Coordinate outside the board.
    #[display("({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },

    /// The target cell already holds a stone.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// Rollback with an empty move record.
    #[display("No moves to undo")]
    EmptyHistory,

    /// A postcondition failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
