//! Board colour schemes.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Colour scheme for the board and stones. Purely decorative.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Wooden board.
    #[default]
    Classic,
    /// Dark board with bright lines.
    Midnight,
    /// Plain terminal colours.
    Paper,
}

impl Theme {
    /// The theme after this one, wrapping around.
    pub fn next(self) -> Self {
        let mut all = Theme::iter().cycle().skip_while(|t| *t != self);
        all.nth(1).unwrap_or(self)
    }

    /// Style of empty intersections and grid lines.
    pub fn grid(self) -> Style {
        match self {
            Theme::Classic => Style::default().fg(Color::Black).bg(Color::Rgb(222, 184, 135)),
            Theme::Midnight => Style::default().fg(Color::Gray).bg(Color::Rgb(20, 24, 40)),
            Theme::Paper => Style::default().fg(Color::DarkGray),
        }
    }

    /// Style of a black stone.
    pub fn black_stone(self) -> Style {
        let base = self.grid().add_modifier(Modifier::BOLD);
        match self {
            Theme::Classic => base.fg(Color::Black),
            Theme::Midnight => base.fg(Color::LightBlue),
            Theme::Paper => base.fg(Color::Blue),
        }
    }

    /// Style of a white stone.
    pub fn white_stone(self) -> Style {
        let base = self.grid().add_modifier(Modifier::BOLD);
        match self {
            Theme::Classic => base.fg(Color::White),
            Theme::Midnight => base.fg(Color::White),
            Theme::Paper => base.fg(Color::Red),
        }
    }

    /// Style of the row and column labels.
    pub fn label(self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Extra styling for the keyboard cursor.
    pub fn cursor(self, base: Style) -> Style {
        base.bg(Color::Yellow)
    }

    /// Extra styling for the most recent stone.
    pub fn last_move(self, base: Style) -> Style {
        base.add_modifier(Modifier::UNDERLINED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles() {
        assert_eq!(Theme::Classic.next(), Theme::Midnight);
        assert_eq!(Theme::Midnight.next(), Theme::Paper);
        assert_eq!(Theme::Paper.next(), Theme::Classic);
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(Theme::Midnight.to_string(), "midnight");
    }
}
