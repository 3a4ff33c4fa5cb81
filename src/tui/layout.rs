//! Screen layout shared by rendering and pointer hit-testing.

use super::buttons::{Button, ButtonKind};
use super::pointer::BoardGeometry;
use ratatui::layout::Rect;
use strictly_gomoku::BoardSize;
use strum::IntoEnumIterator;

/// Columns reserved left of the board for row numbers.
pub const LABEL_WIDTH: u16 = 3;
/// Rows reserved above the board for column letters.
pub const HEADER_HEIGHT: u16 = 1;
/// Width of the status panel.
pub const PANEL_WIDTH: u16 = 30;
/// Height of each panel button.
pub const BUTTON_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 16;
const BUTTON_GAP: u16 = 1;
/// Panel rows above the first button.
const BUTTON_OFFSET: u16 = 8;
const MARGIN: u16 = 1;

/// Where everything sits for a given terminal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Board area including labels.
    pub board: Rect,
    /// Intersection positions.
    pub geometry: BoardGeometry,
    /// Status panel.
    pub panel: Rect,
    /// Panel buttons, top to bottom.
    pub buttons: Vec<Button>,
}

impl ScreenLayout {
    /// Lays out a board of `size` with `unit_x` columns per intersection in `area`.
    pub fn compute(area: Rect, size: BoardSize, unit_x: u16) -> Self {
        let n = size.get() as u16;
        let board = Rect::new(
            area.x + MARGIN,
            area.y + MARGIN,
            LABEL_WIDTH + (n - 1) * unit_x + 1,
            HEADER_HEIGHT + n,
        )
        .intersection(area);

        let geometry = BoardGeometry {
            origin_x: board.x + LABEL_WIDTH,
            origin_y: board.y + HEADER_HEIGHT,
            unit_x,
            unit_y: 1,
            size,
        };

        let panel_height = (HEADER_HEIGHT + n).max(BUTTON_OFFSET + 3 * (BUTTON_HEIGHT + BUTTON_GAP));
        let panel = Rect::new(
            board.right() + 2 * MARGIN,
            area.y + MARGIN,
            PANEL_WIDTH,
            panel_height,
        )
        .intersection(area);

        let buttons = ButtonKind::iter()
            .enumerate()
            .map(|(i, kind)| Button {
                kind,
                area: Rect::new(
                    panel.x + 2,
                    panel.y + BUTTON_OFFSET + i as u16 * (BUTTON_HEIGHT + BUTTON_GAP),
                    BUTTON_WIDTH,
                    BUTTON_HEIGHT,
                )
                .intersection(area),
            })
            .collect();

        Self {
            board,
            geometry,
            panel,
            buttons,
        }
    }

    /// Returns the button under `(x, y)`, if any.
    pub fn button_at(&self, x: u16, y: u16) -> Option<ButtonKind> {
        super::buttons::hit(&self.buttons, x, y)
    }
}
