//! Pure gomoku (five-in-a-row) game logic.
//!
//! The engine is presentation-independent: front ends translate input into
//! `(row, col)` moves, call [`Game::place`] and [`Game::rollback`], and poll
//! the query methods to redraw. The engine emits no events and performs no
//! I/O.
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{BoardSize, Game, GameStatus, MoveOutcome, Player};
//!
//! let mut game = Game::new(BoardSize::DEFAULT);
//! game.start();
//! for col in 0..4 {
//!     game.place(0, col).unwrap();
//!     game.place(1, col).unwrap();
//! }
//! assert_eq!(game.place(0, 4), Ok(MoveOutcome::GameOverWin(Player::Black)));
//! assert_eq!(game.status(), GameStatus::FinishedWin);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod rules;
mod types;

pub use action::{Move, MoveError, MoveOutcome};
pub use contracts::{
    CellIsEmpty, Contract, GameInProgress, LegalMove, MoveContract, OnBoard, RollbackContract,
};
pub use game::Game;
pub use invariants::{
    AlternatingTurnInvariant, BoundedHistoryInvariant, GomokuInvariants,
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    WinnerConsistentInvariant,
};
pub use rules::{check_winner, is_full, Line, WIN_LENGTH};
pub use types::{Board, BoardShapeError, BoardSize, BoardSizeError, Cell, Coord, GameStatus, Player};
