//! Terminal UI for gobang.

#![warn(missing_docs)]

mod app;
mod buttons;
mod cues;
mod layout;
mod pointer;
mod theme;
mod ui;

pub use app::App;
pub use buttons::{Button, ButtonKind};
pub use cues::{Cue, CueSink, Recorder, TerminalBell};
pub use layout::ScreenLayout;
pub use pointer::BoardGeometry;
pub use theme::Theme;
pub use ui::draw;

use crate::config::GameConfig;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs an interactive two-player game until the user exits.
#[instrument(skip(config))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!(board_size = %config.board_size(), theme = %config.theme(), "Starting gobang TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let mut bell = TerminalBell::new(io::stdout(), *config.bell());
    let result = run_app(&mut terminal, &mut app, &mut bell);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "TUI exited with error");
    }
    info!(steps = app.game().step_count(), "TUI shutdown");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    sink: &mut impl CueSink,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| {
            app.resize(f.area());
            draw(f, app);
        })?;

        let cue = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Up(MouseButton::Left) => {
                app.click(mouse.column, mouse.row)
            }
            _ => None,
        };

        if let Some(cue) = cue {
            sink.play(cue);
        }
    }
    Ok(())
}
