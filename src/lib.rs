//! Gobang - two-player gomoku in the terminal
//!
//! The rules live in [`strictly_gomoku`]; this crate adds the front ends.
//!
//! # Architecture
//!
//! - **TUI**: ratatui board with mouse placement, keyboard cursor, and
//!   New Round / Undo / Exit buttons
//! - **Script**: headless runner that applies `row,col` and `undo` steps
//! - **Config**: TOML settings with command-line overrides
//!
//! # Example
//!
//! ```
//! use gobang::{run_script, parse_steps};
//! use strictly_gomoku::{BoardSize, GameStatus};
//!
//! let steps = parse_steps(&["7,7", "7,8", "undo"]).unwrap();
//! let mut out = Vec::new();
//! let game = run_script(BoardSize::DEFAULT, &steps, &mut out).unwrap();
//! assert_eq!(game.step_count(), 1);
//! assert_eq!(game.status(), GameStatus::AwaitingWhite);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod labels;
mod logging;
mod script;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig, DEFAULT_CONFIG_FILE};
pub use labels::{outcome_message, status_label};
pub use logging::{init_file_logging, init_stderr_logging};
pub use script::{parse_steps, run_script, ScriptError, Step};
pub use tui::run_tui;
