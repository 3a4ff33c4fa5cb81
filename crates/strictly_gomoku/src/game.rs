//! Gomoku game engine.
//!
//! `Game` owns the board, the move record, the status state machine, and
//! the winner. The move record is the source of truth; the board is a
//! cache of it kept in step by `place` and `rollback`.

use super::action::{Move, MoveError, MoveOutcome};
use super::contracts::{Contract, MoveContract, RollbackContract};
use super::invariants::{GomokuInvariants, InvariantSet};
use super::rules;
use super::types::{Board, BoardSize, Cell, Coord, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Two-player gomoku game with undo.
///
/// Deserialized snapshots are checked against [`GomokuInvariants`] and
/// rejected if the board, record, status, and winner disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRepr")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) status: GameStatus,
    pub(crate) winner: Option<Player>,
}

/// Unchecked serialized form of a [`Game`].
#[derive(Deserialize)]
struct GameRepr {
    board: Board,
    history: Vec<Move>,
    status: GameStatus,
    winner: Option<Player>,
}

impl TryFrom<GameRepr> for Game {
    type Error = MoveError;

    #[instrument(skip(repr), fields(steps = repr.history.len(), status = %repr.status))]
    fn try_from(repr: GameRepr) -> Result<Self, Self::Error> {
        if repr.status == GameStatus::NotStarted && !repr.history.is_empty() {
            return Err(MoveError::InvariantViolation(
                "Unstarted game cannot have moves".to_string(),
            ));
        }

        let game = Self {
            board: repr.board,
            history: repr.history,
            status: repr.status,
            winner: repr.winner,
        };
        GomokuInvariants::check_all(&game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejected inconsistent snapshot");
            MoveError::InvariantViolation(descriptions)
        })?;
        Ok(game)
    }
}

impl Game {
    /// Creates a game on an empty board, waiting to be started.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            history: Vec::with_capacity(size.cells()),
            status: GameStatus::NotStarted,
            winner: None,
        }
    }

    /// Opens play for black.
    ///
    /// Only has an effect on a game that has not started yet.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn start(&mut self) {
        if self.status != GameStatus::NotStarted {
            warn!("Ignoring start on a game already under way");
            return;
        }
        info!(size = %self.size(), "Game started");
        self.status = GameStatus::AwaitingBlack;
    }

    /// Places the current player's stone at `(row, col)`.
    ///
    /// Checks, in order, that a player is awaited, that the coordinate is on
    /// the board, and that the cell is empty. A rejected move changes nothing.
    ///
    /// # Errors
    ///
    /// [`MoveError::Status`], [`MoveError::OutOfRange`], or
    /// [`MoveError::CellOccupied`].
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn place(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        MoveContract::pre(self, &(row, col))?;
        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self
            .status
            .to_move()
            .ok_or(MoveError::Status(self.status))?;
        let coord = Coord::new(row, col);
        self.board.set(coord, Cell::Stone(player));
        self.history.push(Move::new(player, coord));

        let outcome = self.settle(player, coord);

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(outcome)
    }

    /// Places a stone at `coord`. See [`Game::place`].
    pub fn place_at(&mut self, coord: Coord) -> Result<MoveOutcome, MoveError> {
        self.place(coord.row, coord.col)
    }

    /// Decides the status after `player` placed at `coord`.
    fn settle(&mut self, player: Player, coord: Coord) -> MoveOutcome {
        if rules::is_full(&self.board) {
            info!(steps = self.history.len(), "Board full, game drawn");
            self.status = GameStatus::FinishedDraw;
            return MoveOutcome::GameOverDraw;
        }

        if let Some(winner) = rules::check_winner(&self.board, coord) {
            info!(%winner, steps = self.history.len(), "Game won");
            self.winner = Some(winner);
            self.status = GameStatus::FinishedWin;
            return MoveOutcome::GameOverWin(winner);
        }

        self.status = player.opponent().awaiting();
        debug!(%player, %coord, next = %self.status, "Move applied");
        MoveOutcome::Continue
    }

    /// Undoes the most recent move.
    ///
    /// Play returns to the player whose stone was removed, and any winner
    /// is cleared.
    ///
    /// # Errors
    ///
    /// [`MoveError::EmptyHistory`] when there is nothing to undo.
    #[instrument(skip(self), fields(steps = self.history.len()))]
    pub fn rollback(&mut self) -> Result<Move, MoveError> {
        RollbackContract::pre(self, &())?;
        #[cfg(debug_assertions)]
        let before = self.clone();

        let last = self.history.pop().ok_or(MoveError::EmptyHistory)?;
        self.board.set(last.coord, Cell::Empty);
        self.status = last.player.awaiting();
        self.winner = None;
        debug!(undone = %last, next = %self.status, "Move rolled back");

        #[cfg(debug_assertions)]
        RollbackContract::post(&before, self)?;

        Ok(last)
    }

    /// Clears the board for a new round of the same size.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(steps = self.history.len(), "Resetting game");
        *self = Self::new(self.size());
    }

    /// Starts a game and plays `coords` in order.
    ///
    /// # Errors
    ///
    /// The first rejected move, including any move after the game ended.
    #[instrument(skip(coords))]
    pub fn replay(size: BoardSize, coords: &[Coord]) -> Result<Self, MoveError> {
        let mut game = Self::new(size);
        game.start();
        for coord in coords {
            game.place_at(*coord)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board side length.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Returns the move record, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Returns the number of stones placed.
    pub fn step_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner. Only set while the status is `FinishedWin`.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the player to move, if any.
    pub fn current_player(&self) -> Option<Player> {
        self.status.to_move()
    }

    /// Returns every empty coordinate in row-major order.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Coord> {
        self.board
            .iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BoardSize::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(size: usize) -> Game {
        let mut game = Game::new(BoardSize::new(size).unwrap());
        game.start();
        game
    }

    #[test]
    fn test_new_game_not_started() {
        let game = Game::default();
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.step_count(), 0);
        assert_eq!(game.last_move(), None);
        assert_eq!(game.size().get(), 16);
    }

    #[test]
    fn test_start_is_only_effective_once() {
        let mut game = started(16);
        game.place(3, 3).unwrap();
        game.start();
        assert_eq!(game.status(), GameStatus::AwaitingWhite);
    }

    #[test]
    fn test_place_alternates() {
        let mut game = started(16);
        assert_eq!(game.place(0, 0), Ok(MoveOutcome::Continue));
        assert_eq!(game.current_player(), Some(Player::White));
        assert_eq!(game.place(1, 1), Ok(MoveOutcome::Continue));
        assert_eq!(game.current_player(), Some(Player::Black));
        assert_eq!(
            game.last_move(),
            Some(Move::new(Player::White, Coord::new(1, 1)))
        );
    }

    #[test]
    fn test_rollback_clears_winner() {
        let mut game = Game::replay(
            BoardSize::DEFAULT,
            &[
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(0, 2),
                Coord::new(1, 2),
                Coord::new(0, 3),
                Coord::new(1, 3),
                Coord::new(0, 4),
            ],
        )
        .unwrap();
        assert_eq!(game.winner(), Some(Player::Black));

        let undone = game.rollback().unwrap();
        assert_eq!(undone.coord, Coord::new(0, 4));
        assert_eq!(game.status(), GameStatus::AwaitingBlack);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_reset_keeps_size() {
        let mut game = started(9);
        game.place(4, 4).unwrap();
        game.reset();
        assert_eq!(game, Game::new(BoardSize::new(9).unwrap()));
    }

    #[test]
    fn test_valid_moves_shrink() {
        let mut game = started(3);
        assert_eq!(game.valid_moves().len(), 9);
        game.place(1, 1).unwrap();
        let moves = game.valid_moves();
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Coord::new(1, 1)));
    }
}
