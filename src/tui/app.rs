//! Application state and input handling.

use super::buttons::ButtonKind;
use super::cues::Cue;
use super::layout::ScreenLayout;
use super::theme::Theme;
use crate::config::GameConfig;
use crate::labels::outcome_message;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use strictly_gomoku::{Coord, Game};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the only [`Game`]; every input event is applied to completion
/// before the next one is read.
pub struct App {
    game: Game,
    cursor: Coord,
    message: String,
    theme: Theme,
    unit_x: u16,
    layout: ScreenLayout,
    should_quit: bool,
}

impl App {
    /// Creates the app and opens play for black.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        let size = *config.board_size();
        let mut game = Game::new(size);
        game.start();
        Self {
            cursor: centre(&game),
            game,
            message: "Black moves first".to_string(),
            theme: *config.theme(),
            unit_x: *config.cell_width(),
            layout: ScreenLayout::compute(Rect::default(), size, *config.cell_width()),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the last feedback message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Gets the layout of the last drawn frame.
    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Recomputes the layout for a frame of `area`.
    pub fn resize(&mut self, area: Rect) {
        self.layout = ScreenLayout::compute(area, self.game.size(), self.unit_x);
    }

    /// Handles a pointer release at a screen position.
    ///
    /// Buttons take priority; otherwise the nearest intersection is played.
    #[instrument(skip(self))]
    pub fn click(&mut self, x: u16, y: u16) -> Option<Cue> {
        if let Some(button) = self.layout.button_at(x, y) {
            return self.press(button);
        }
        match self.layout.geometry.to_coord(x, y) {
            Some(coord) => {
                self.cursor = coord;
                Some(self.place_at(coord))
            }
            None => {
                debug!("Click outside the board");
                self.message = "Click on an intersection".to_string();
                Some(Cue::Error)
            }
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn key(&mut self, code: KeyCode) -> Option<Cue> {
        match code {
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => return Some(self.place_at(self.cursor)),
            KeyCode::Char('u') | KeyCode::Backspace => return self.press(ButtonKind::Undo),
            KeyCode::Char('n') | KeyCode::Char('r') => return self.press(ButtonKind::NewRound),
            KeyCode::Char('t') => {
                self.theme = self.theme.next();
                self.message = format!("Theme: {}", self.theme);
            }
            KeyCode::Char('q') | KeyCode::Esc => return self.press(ButtonKind::Exit),
            _ => {}
        }
        None
    }

    /// Runs a panel button.
    #[instrument(skip(self))]
    pub fn press(&mut self, button: ButtonKind) -> Option<Cue> {
        match button {
            ButtonKind::NewRound => Some(self.new_round()),
            ButtonKind::Undo => self.undo(),
            ButtonKind::Exit => {
                info!("User quit");
                self.should_quit = true;
                None
            }
        }
    }

    /// Places the current player's stone at `coord`.
    #[instrument(skip(self))]
    pub fn place_at(&mut self, coord: Coord) -> Cue {
        let mover = self.game.current_player();
        match (self.game.place_at(coord), mover) {
            (Ok(outcome), Some(player)) => {
                self.message = outcome_message(player, coord, outcome);
                Cue::for_move(player, outcome)
            }
            (Ok(_), None) => Cue::Error,
            (Err(e), _) => {
                debug!(error = %e, "Move rejected");
                self.message = e.to_string();
                Cue::Error
            }
        }
    }

    /// Takes back the last stone.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Cue> {
        match self.game.rollback() {
            Ok(undone) => {
                self.cursor = undone.coord;
                self.message = format!("Took back {} at {}", undone.player, undone.coord);
                None
            }
            Err(e) => {
                self.message = e.to_string();
                Some(Cue::Error)
            }
        }
    }

    /// Clears the board and starts a new round.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) -> Cue {
        self.game.reset();
        self.game.start();
        self.cursor = centre(&self.game);
        self.message = "New round: black moves first".to_string();
        Cue::NewGame
    }

    fn move_cursor(&mut self, dr: isize, dc: isize) {
        let last = self.game.size().get() - 1;
        let step = |v: usize, d: isize| v.saturating_add_signed(d).min(last);
        self.cursor = Coord::new(step(self.cursor.row, dr), step(self.cursor.col, dc));
    }
}

fn centre(game: &Game) -> Coord {
    let mid = game.size().get() / 2;
    Coord::new(mid, mid)
}
