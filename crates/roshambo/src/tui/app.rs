//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roshambo_core::{Opponent, Session};
use tracing::{debug, info, instrument, warn};

use super::input::{Focus, Selection, adjust_selection, move_focus};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App {
    session: Session,
    opponent: Box<dyn Opponent>,
    selection: Selection,
    focus: Focus,
    status_message: String,
}

impl App {
    /// Creates the application with initial picks.
    pub fn new(session: Session, opponent: Box<dyn Opponent>, selection: Selection) -> Self {
        Self {
            session,
            opponent,
            selection,
            focus: Focus::default(),
            status_message: "Pick a sign and a goal, then Play.".to_string(),
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the current picks.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Gets the focused control.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Interrupted");
            return AppAction::Quit;
        }

        // A pending prompt is modal: only Continue and quit get through.
        if self.session.prompt().is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c') | KeyCode::Char('p') => {
                    self.acknowledge();
                    AppAction::Continue
                }
                KeyCode::Char('q') => AppAction::Quit,
                _ => AppAction::Continue,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                AppAction::Quit
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('p') => {
                self.play();
                AppAction::Continue
            }
            code @ (KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down) => {
                self.focus = move_focus(self.focus, code);
                AppAction::Continue
            }
            code => {
                self.selection = adjust_selection(self.focus, self.selection, code);
                AppAction::Continue
            }
        }
    }

    /// Plays a round with the current picks.
    #[instrument(skip(self))]
    pub fn play(&mut self) {
        let Selection { sign, goal } = self.selection;
        match self.session.play(sign, goal, &mut self.opponent) {
            Ok(report) => {
                debug!(round = report.round_number(), "Round played");
                self.status_message = format!(
                    "Round {}: {}",
                    report.round_number(),
                    report.round()
                );
            }
            Err(e) => {
                warn!(error = %e, "Play rejected");
                self.status_message = e.to_string();
            }
        }
    }

    /// Dismisses the pending prompt, resetting if the session ended.
    #[instrument(skip(self))]
    pub fn acknowledge(&mut self) {
        let resets = self
            .session
            .prompt()
            .is_some_and(|prompt| prompt.resets_session());
        if self.session.acknowledge() && resets {
            self.status_message = "New game! Pick a sign and a goal, then Play.".to_string();
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("opponent", &self.opponent.name())
            .field("selection", &self.selection)
            .field("focus", &self.focus)
            .field("status_message", &self.status_message)
            .finish()
    }
}
