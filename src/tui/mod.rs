//! Terminal UI for caro.

mod app;
mod input;
mod mode;
mod ui;

pub use app::{App, COMPUTER, HUMAN};
pub use mode::GameMode;

use crate::config::CaroConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip_all)]
pub async fn run_tui(config: &CaroConfig) -> Result<()> {
    info!("Starting caro TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(config.sound().player());
    let res = run_app(&mut terminal, &mut app, config.game().computer_delay()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for input or the computer, repeat.
async fn run_app(terminal: &mut Term, app: &mut App, computer_delay: Duration) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        if app.awaiting_computer() {
            sleep(computer_delay).await;
            discard_pending_input(app)?;
            if !app.should_quit() {
                app.play_computer_turn();
            }
            continue;
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
}

/// Drops keys typed while the computer was thinking, except quit keys.
fn discard_pending_input(app: &mut App) -> Result<()> {
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press && input::is_quit(key.code) => {
                app.handle_key(key.code);
            }
            dropped => debug!(?dropped, "Discarding input during computer turn"),
        }
    }
    Ok(())
}
