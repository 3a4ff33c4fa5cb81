//! Stateless UI rendering for gomoku.

use super::app::App;
use super::layout::LABEL_WIDTH;
use super::pointer::BoardGeometry;
use super::theme::Theme;
use crate::labels::status_label;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};
use strictly_gomoku::{Cell, Coord, Game, Player};

/// Renders the board, the status panel, and the buttons.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = app.layout();

    frame.render_widget(
        BoardWidget {
            game: app.game(),
            cursor: app.cursor(),
            theme: app.theme(),
            geometry: layout.geometry,
        },
        layout.board,
    );

    draw_panel(frame, layout.panel, app);

    for button in &layout.buttons {
        let label = Paragraph::new(button.kind.to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(label, button.area);
    }
}

fn draw_panel(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let last = game
        .last_move()
        .map(|m| format!("{} at {}", m.player, column_label(m.coord)))
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        Line::from(Span::styled(
            status_label(game),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Steps: {}", game.step_count())),
        Line::from(format!("Last: {}", last)),
        Line::from(""),
        Line::from(Span::styled(
            app.message().to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(format!("Theme: {}", app.theme())),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Gobang ")
            .title_bottom(" u undo  t theme  q quit "),
    );
    frame.render_widget(panel, area);
}

/// Board position written the way the labels show it, e.g. `H8`.
fn column_label(coord: Coord) -> String {
    format!("{}{}", column_letter(coord.col), coord.row + 1)
}

fn column_letter(col: usize) -> char {
    char::from(b'A' + (col % 26) as u8)
}

/// The grid with labels, stones, and the cursor.
struct BoardWidget<'a> {
    game: &'a Game,
    cursor: Coord,
    theme: Theme,
    geometry: BoardGeometry,
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let n = self.geometry.size.get();
        let last = self.game.last_move().map(|m| m.coord);
        let grid = self.theme.grid();
        let put = |buf: &mut Buffer, x: u16, y: u16, s: &str, style: Style| {
            if area.contains(Position::new(x, y)) {
                buf.set_string(x, y, s, style);
            }
        };

        for col in 0..n {
            let (x, _) = self.geometry.to_screen(Coord::new(0, col));
            put(
                buf,
                x,
                area.y,
                &column_letter(col).to_string(),
                self.theme.label(),
            );
        }

        for row in 0..n {
            let (_, y) = self.geometry.to_screen(Coord::new(row, 0));
            put(
                buf,
                area.x,
                y,
                &format!("{:>width$}", row + 1, width = LABEL_WIDTH as usize - 1),
                self.theme.label(),
            );

            for col in 0..n {
                let coord = Coord::new(row, col);
                let (x, y) = self.geometry.to_screen(coord);

                let (symbol, mut style) = match self.game.board().get(coord) {
                    Some(Cell::Stone(Player::Black)) => ("●", self.theme.black_stone()),
                    Some(Cell::Stone(Player::White)) => ("○", self.theme.white_stone()),
                    _ => (grid_symbol(row, col, n), grid),
                };
                if last == Some(coord) {
                    style = self.theme.last_move(style);
                }
                if self.cursor == coord {
                    style = self.theme.cursor(style);
                }
                put(buf, x, y, symbol, style);

                if col + 1 < n {
                    for dx in 1..self.geometry.unit_x {
                        put(buf, x + dx, y, "─", grid);
                    }
                }
            }
        }
    }
}

/// Box-drawing character for an empty intersection.
fn grid_symbol(row: usize, col: usize, n: usize) -> &'static str {
    let last = n - 1;
    match (row, col) {
        (0, 0) => "┌",
        (0, c) if c == last => "┐",
        (0, _) => "┬",
        (r, 0) if r == last => "└",
        (r, c) if r == last && c == last => "┘",
        (r, _) if r == last => "┴",
        (_, 0) => "├",
        (_, c) if c == last => "┤",
        _ => "┼",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_symbols() {
        assert_eq!(grid_symbol(0, 0, 16), "┌");
        assert_eq!(grid_symbol(0, 15, 16), "┐");
        assert_eq!(grid_symbol(15, 0, 16), "└");
        assert_eq!(grid_symbol(15, 15, 16), "┘");
        assert_eq!(grid_symbol(7, 0, 16), "├");
        assert_eq!(grid_symbol(7, 15, 16), "┤");
        assert_eq!(grid_symbol(15, 3, 16), "┴");
        assert_eq!(grid_symbol(7, 7, 16), "┼");
    }

    #[test]
    fn test_column_label() {
        assert_eq!(column_label(Coord::new(7, 7)), "H8");
        assert_eq!(column_label(Coord::new(0, 0)), "A1");
    }
}
