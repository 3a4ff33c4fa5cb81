//! Win detection for gomoku.
//!
//! Only the four lines through the last placed stone are examined: a new
//! five-in-a-row can only be formed through that stone.

use super::super::{Board, BoardSize, Cell, Coord, Player};
use derive_more::Display;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Stones in a row needed to win. Longer runs also win.
pub const WIN_LENGTH: usize = 5;

/// One of the four line directions through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Line {
    /// Left to right along a row.
    Row,
    /// Top to bottom along a column.
    Column,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Row and column delta between consecutive cells.
    fn step(self) -> (isize, isize) {
        match self {
            Line::Row => (0, 1),
            Line::Column => (1, 0),
            Line::Diagonal => (1, 1),
            Line::AntiDiagonal => (1, -1),
        }
    }

    /// First cell of the line through `through`, where the line meets the
    /// top or side edge of the board.
    ///
    /// `through` must lie on the board.
    pub fn origin(self, through: Coord, size: BoardSize) -> Coord {
        let Coord { row, col } = through;
        match self {
            Line::Row => Coord::new(row, 0),
            Line::Column => Coord::new(0, col),
            Line::Diagonal => {
                let back = row.min(col);
                Coord::new(row - back, col - back)
            }
            Line::AntiDiagonal => {
                let back = row.min(size.get() - 1 - col);
                Coord::new(row - back, col + back)
            }
        }
    }

    /// Every cell of the line through `through`, from its origin to the
    /// opposite edge.
    pub fn cells(self, through: Coord, size: BoardSize) -> impl Iterator<Item = Coord> {
        let (dr, dc) = self.step();
        std::iter::successors(Some(self.origin(through, size)), move |c| {
            let next = Coord::new(c.row.checked_add_signed(dr)?, c.col.checked_add_signed(dc)?);
            size.contains(next).then_some(next)
        })
    }
}

/// Checks the four lines through `last` for five or more in a row.
///
/// Returns the owner of the first qualifying run. In any position reached
/// through legal play this is the player who placed `last`.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, last: Coord) -> Option<Player> {
    if !board.size().contains(last) {
        return None;
    }
    Line::iter().find_map(|line| scan_line(board, line, last))
}

/// Walks a whole line keeping the current run of identical stones.
///
/// An empty cell or a change of owner ends the run.
fn scan_line(board: &Board, line: Line, through: Coord) -> Option<Player> {
    let mut run: Option<(Player, usize)> = None;

    for coord in line.cells(through, board.size()) {
        let owner = board.get(coord).and_then(Cell::player);
        run = match (owner, run) {
            (Some(p), Some((q, len))) if p == q => Some((p, len + 1)),
            (Some(p), _) => Some((p, 1)),
            (None, _) => None,
        };

        if let Some((player, len)) = run {
            if len >= WIN_LENGTH {
                debug!(%line, %player, end = %coord, "Five in a row");
                return Some(player);
            }
        }
    }

    None
}
