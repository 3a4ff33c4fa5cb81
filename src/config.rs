//! Game configuration loaded from TOML.

use crate::tui::Theme;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_gomoku::BoardSize;
use tracing::{debug, info, instrument};

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "gobang.toml";

/// Front-end settings for a gomoku session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Board side length.
    #[serde(default)]
    board_size: BoardSize,

    /// Terminal columns between neighbouring intersections.
    #[serde(default = "default_cell_width")]
    cell_width: u16,

    /// Ring the terminal bell on errors and at the end of a game.
    #[serde(default = "default_bell")]
    bell: bool,

    /// Board colour scheme.
    #[serde(default)]
    theme: Theme,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_cell_width() -> u16 {
    2
}

fn default_bell() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("gobang.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            cell_width: default_cell_width(),
            bell: default_bell(),
            theme: Theme::default(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Smallest board the terminal UI draws.
    pub const MIN_BOARD: usize = 5;
    /// Largest board the terminal UI draws (one letter per column).
    pub const MAX_BOARD: usize = 26;
    /// Accepted range for [`GameConfig::cell_width`].
    pub const CELL_WIDTHS: std::ops::RangeInclusive<u16> = 2..=4;

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        let config = config.validate()?;
        info!(board_size = %config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path`, or [`DEFAULT_CONFIG_FILE`] if it exists, or defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks the values the terminal UI can display.
    #[instrument(skip(self))]
    pub fn validate(self) -> Result<Self, ConfigError> {
        let n = self.board_size.get();
        if !(Self::MIN_BOARD..=Self::MAX_BOARD).contains(&n) {
            return Err(ConfigError::new(format!(
                "board_size must be within {}..={}, got {}",
                Self::MIN_BOARD,
                Self::MAX_BOARD,
                n
            )));
        }
        if !Self::CELL_WIDTHS.contains(&self.cell_width) {
            return Err(ConfigError::new(format!(
                "cell_width must be within {}..={}, got {}",
                Self::CELL_WIDTHS.start(),
                Self::CELL_WIDTHS.end(),
                self.cell_width
            )));
        }
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
