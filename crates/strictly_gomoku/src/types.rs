//! Core domain types for gomoku.

use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Black (moves first).
    Black,
    /// White (moves second).
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Single-character board symbol.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }

    /// Status that waits for this player to move.
    pub fn awaiting(self) -> GameStatus {
        match self {
            Player::Black => GameStatus::AwaitingBlack,
            Player::White => GameStatus::AwaitingWhite,
        }
    }
}

/// A point on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Cell {
    /// No stone.
    #[display(".")]
    Empty,
    /// A stone of the given player.
    #[display("{}", _0.symbol())]
    Stone(Player),
}

impl Cell {
    /// Returns the owner of the stone, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Stone(player) => Some(player),
        }
    }

    /// Checks if the cell holds no stone.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Zero-based `(row, col)` board coordinate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, new,
)]
#[display("({}, {})", row, col)]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

/// Side length of a square board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Largest supported side length.
    pub const MAX: usize = 64;

    /// Side length used when none is configured.
    pub const DEFAULT: BoardSize = BoardSize(16);

    /// Creates a board size, rejecting zero and anything above [`BoardSize::MAX`].
    #[instrument]
    pub fn new(n: usize) -> Result<Self, BoardSizeError> {
        if n == 0 || n > Self::MAX {
            return Err(BoardSizeError { requested: n });
        }
        Ok(Self(n))
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells on the board.
    pub fn cells(self) -> usize {
        self.0 * self.0
    }

    /// Checks that both coordinates lie in `[0, N)`.
    pub fn contains(self, coord: Coord) -> bool {
        coord.row < self.0 && coord.col < self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// Requested board size is zero or too large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Board size {} is outside 1..={}", requested, BoardSize::MAX)]
pub struct BoardSizeError {
    /// The rejected side length.
    pub requested: usize,
}

/// N×N gomoku board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

/// Unchecked serialized form of a [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardShapeError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        if repr.cells.len() != repr.size.cells() {
            return Err(BoardShapeError {
                size: repr.size.get(),
                cells: repr.cells.len(),
            });
        }
        Ok(Self {
            size: repr.size,
            cells: repr.cells,
        })
    }
}

/// Error for a board whose cell count does not match its side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("A {}x{} board needs {} cells, got {}", size, size, size * size, cells)]
pub struct BoardShapeError {
    /// Declared side length.
    pub size: usize,
    /// Number of cells supplied.
    pub cells: usize,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cells()],
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the cell at `coord`, or `None` off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Sets the cell at `coord`.
    ///
    /// Writes outside the board are ignored and reported as `false`.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Number of cells holding a stone.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over every coordinate with its cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let n = self.size.get();
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i / n, i % n), *cell))
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.size
            .contains(coord)
            .then(|| coord.row * self.size.get() + coord.col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::DEFAULT)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.size.get();
        for (i, row) in self.cells.chunks(n).enumerate() {
            let line = row
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            f.write_str(&line)?;
            if i + 1 < n {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// Current turn/result state of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Default)]
pub enum GameStatus {
    /// Board is set up, no one may move yet.
    #[default]
    #[display("not started")]
    NotStarted,
    /// Black to move.
    #[display("awaiting black")]
    AwaitingBlack,
    /// White to move.
    #[display("awaiting white")]
    AwaitingWhite,
    /// A player made five in a row.
    #[display("finished with a winner")]
    FinishedWin,
    /// The board filled up.
    #[display("finished in a draw")]
    FinishedDraw,
}

impl GameStatus {
    /// Returns the player to move, if a move is expected.
    pub fn to_move(self) -> Option<Player> {
        match self {
            GameStatus::AwaitingBlack => Some(Player::Black),
            GameStatus::AwaitingWhite => Some(Player::White),
            _ => None,
        }
    }

    /// Checks for a terminal status.
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::FinishedWin | GameStatus::FinishedDraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_bounds() {
        assert!(BoardSize::new(0).is_err());
        assert!(BoardSize::new(BoardSize::MAX + 1).is_err());
        assert_eq!(BoardSize::new(15).unwrap().cells(), 225);
        assert_eq!(BoardSize::default().get(), 16);
    }

    #[test]
    fn test_board_get_set() {
        let mut board = Board::new(BoardSize::new(5).unwrap());
        assert!(board.set(Coord::new(2, 3), Cell::Stone(Player::White)));
        assert_eq!(board.get(Coord::new(2, 3)), Some(Cell::Stone(Player::White)));
        assert!(!board.is_empty(Coord::new(2, 3)));
        assert_eq!(board.occupied(), 1);

        assert!(!board.set(Coord::new(5, 0), Cell::Stone(Player::Black)));
        assert_eq!(board.get(Coord::new(0, 5)), None);
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new(BoardSize::new(3).unwrap());
        board.set(Coord::new(0, 0), Cell::Stone(Player::Black));
        board.set(Coord::new(1, 2), Cell::Stone(Player::White));
        assert_eq!(board.to_string(), "X . .\n. . O\n. . .");
    }

    #[test]
    fn test_board_rejects_wrong_cell_count() {
        let short: Result<Board, _> = serde_json::from_str(r#"{"size":3,"cells":["Empty"]}"#);
        let err = short.unwrap_err().to_string();
        assert!(err.contains("needs 9 cells, got 1"), "{err}");

        let board = Board::new(BoardSize::new(3).unwrap());
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_status_to_move() {
        assert_eq!(GameStatus::AwaitingWhite.to_move(), Some(Player::White));
        assert_eq!(GameStatus::FinishedDraw.to_move(), None);
        assert_eq!(Player::Black.awaiting(), GameStatus::AwaitingBlack);
        assert!(GameStatus::FinishedWin.is_finished());
    }
}
