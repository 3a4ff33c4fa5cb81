//! Cues played in response to player actions.
//!
//! Cues are decorative: they never feed back into the game.

use std::io::Write;
use strictly_gomoku::{MoveOutcome, Player};
use tracing::{debug, warn};

/// Feedback for a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Cue {
    /// Black placed a stone.
    PlaceBlack,
    /// White placed a stone.
    PlaceWhite,
    /// A stone completed five in a row.
    Win,
    /// The board filled up.
    Draw,
    /// An action was rejected.
    Error,
    /// A new round began.
    NewGame,
}

impl Cue {
    /// Cue for a successful placement by `player`.
    pub fn for_move(player: Player, outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Continue => match player {
                Player::Black => Cue::PlaceBlack,
                Player::White => Cue::PlaceWhite,
            },
            MoveOutcome::GameOverWin(_) => Cue::Win,
            MoveOutcome::GameOverDraw => Cue::Draw,
        }
    }

    /// Whether the cue is worth an audible alert.
    pub fn is_alert(self) -> bool {
        matches!(self, Cue::Win | Cue::Draw | Cue::Error)
    }
}

/// Something that can play cues.
pub trait CueSink {
    /// Plays a cue.
    fn play(&mut self, cue: Cue);
}

/// Rings the terminal bell for alert cues.
pub struct TerminalBell<W: Write> {
    out: W,
    enabled: bool,
}

impl<W: Write> TerminalBell<W> {
    /// Creates a bell writing to `out`.
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    /// Consumes the bell, returning its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CueSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        debug!(%cue, "Cue");
        if !self.enabled || !cue.is_alert() {
            return;
        }
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to ring bell");
        }
    }
}

/// Keeps every cue it is given, in order.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    /// Cues played so far.
    pub cues: Vec<Cue>,
}

impl CueSink for Recorder {
    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
