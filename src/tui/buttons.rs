//! Panel buttons and their hit-testing.

use ratatui::layout::{Position, Rect};

/// What a panel button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum ButtonKind {
    /// Clear the board and start over.
    #[strum(to_string = "New Round")]
    NewRound,
    /// Take back the last stone.
    #[strum(to_string = "Undo")]
    Undo,
    /// Leave the game.
    #[strum(to_string = "Exit")]
    Exit,
}

/// A button and where it was laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    /// What the button does.
    pub kind: ButtonKind,
    /// Screen area, borders included.
    pub area: Rect,
}

/// Returns the button under `(x, y)`, if any.
pub fn hit(buttons: &[Button], x: u16, y: u16) -> Option<ButtonKind> {
    let pos = Position::new(x, y);
    buttons
        .iter()
        .find(|b| b.area.contains(pos))
        .map(|b| b.kind)
}
