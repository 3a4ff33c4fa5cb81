//! Headless play from a list of moves.

use crate::labels::status_label;
use derive_more::{Display, Error};
use std::io::{self, Write};
use std::str::FromStr;
use strictly_gomoku::{BoardSize, Coord, Game};
use tracing::{debug, instrument};

/// One scripted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Place the current player's stone.
    Place(Coord),
    /// Take back the last stone.
    Undo,
}

/// A token that is neither `row,col` nor `undo`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid step {:?}: expected \"row,col\" or \"undo\"", token)]
pub struct ScriptError {
    /// The rejected token.
    pub token: String,
}

impl FromStr for Step {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("undo") || token.eq_ignore_ascii_case("u") {
            return Ok(Step::Undo);
        }
        let err = || ScriptError {
            token: token.to_string(),
        };
        let (row, col) = token.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Step::Place(Coord::new(row, col)))
    }
}

/// Parses every token, stopping at the first bad one.
pub fn parse_steps<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Step>, ScriptError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Starts a game of `size`, applies `steps`, and reports to `out`.
///
/// Rejected steps are reported and skipped; they never end the script.
#[instrument(skip(steps, out), fields(steps = steps.len()))]
pub fn run_script(size: BoardSize, steps: &[Step], out: &mut impl Write) -> io::Result<Game> {
    let mut game = Game::new(size);
    game.start();

    for (i, step) in steps.iter().enumerate() {
        let n = i + 1;
        match *step {
            Step::Place(coord) => {
                let mover = game.current_player();
                match game.place_at(coord) {
                    Ok(outcome) => match mover {
                        Some(player) => writeln!(out, "{:>3}. {} {}: {}", n, player, coord, outcome)?,
                        None => writeln!(out, "{:>3}. {}: {}", n, coord, outcome)?,
                    },
                    Err(e) => {
                        debug!(step = n, error = %e, "Step rejected");
                        writeln!(out, "{:>3}. rejected: {}", n, e)?;
                    }
                }
            }
            Step::Undo => match game.rollback() {
                Ok(undone) => writeln!(out, "{:>3}. undo {}", n, undone)?,
                Err(e) => writeln!(out, "{:>3}. rejected: {}", n, e)?,
            },
        }
    }

    writeln!(out)?;
    write!(out, "{}", game.board())?;
    writeln!(out)?;
    writeln!(out, "{} (steps: {})", status_label(&game), game.step_count())?;
    Ok(game)
}
