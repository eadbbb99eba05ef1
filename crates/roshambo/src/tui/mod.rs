//! Terminal UI for roshambo.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction};
pub use input::{Focus, Selection};

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::AppConfig;

/// Runs the interactive game until the player quits.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting roshambo TUI");

    let session = config.new_session()?;
    let app = App::new(
        session,
        Box::new(config.opponent()),
        Selection {
            sign: *config.default_sign(),
            goal: *config.default_goal(),
        },
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, waits for a key, applies it. Repeats until quit.
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Poll with a short timeout so resizes redraw promptly.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            if app.handle_key(key) == AppAction::Quit {
                info!(
                    score = %app.session().state().score(),
                    round = app.session().state().round(),
                    "Leaving game"
                );
                return Ok(());
            }
        }
    }
}
