//! Command-line interface for gobang.

use crate::config::GameConfig;
use crate::tui::Theme;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_gomoku::BoardSize;

/// Gobang - two-player five-in-a-row in the terminal
#[derive(Parser, Debug)]
#[command(name = "gobang")]
#[command(about = "Two-player gomoku with mouse placement and undo", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./gobang.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Board side length, overriding the config file
    #[arg(short, long, global = true)]
    pub size: Option<usize>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal with mouse and keyboard
    Play {
        /// Board colour scheme
        #[arg(long, value_enum)]
        theme: Option<Theme>,

        /// Never ring the terminal bell
        #[arg(long)]
        no_bell: bool,
    },

    /// Apply moves without a UI and print the result
    Script {
        /// Steps such as `7,7` or `undo`, applied in order
        #[arg(required = true, allow_hyphen_values = true)]
        steps: Vec<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            theme: None,
            no_bell: false,
        }
    }
}

impl Cli {
    /// Applies command-line overrides on top of a loaded config.
    pub fn apply(&self, config: GameConfig) -> Result<GameConfig, strictly_gomoku::BoardSizeError> {
        let mut config = config;
        if let Some(size) = self.size {
            config = config.with_board_size(BoardSize::new(size)?);
        }
        if let Some(Command::Play { theme, no_bell }) = &self.command {
            if let Some(theme) = theme {
                config = config.with_theme(*theme);
            }
            if *no_bell {
                config = config.with_bell(false);
            }
        }
        Ok(config)
    }
}
