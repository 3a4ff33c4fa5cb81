//! Game rules for gomoku.
//!
//! Pure functions evaluating a board after a placement. Rules are kept
//! apart from the game state machine so they can be tested on hand-built
//! boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, Line, WIN_LENGTH};
