//! Draw detection for gomoku.

use super::super::Board;
use tracing::instrument;

/// Checks if every cell holds a stone.
///
/// While the board and move record agree this is the record reaching N².
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}
