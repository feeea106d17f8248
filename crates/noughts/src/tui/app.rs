//! Application state and logic.

use super::input::{Action, move_cursor};
use noughts_engine::{
    GameObserver, GameOutcome, Mark, MoveError, Phase, Position, Session, SessionConfig,
    WinPattern,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// How long the event loop sleeps when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Restore the terminal and exit.
    Quit,
}

/// Rendering state fed by session notifications.
#[derive(Debug, Default)]
pub struct Feedback {
    last_placed: Option<Position>,
    winning_line: Option<WinPattern>,
}

impl Feedback {
    /// Cell filled most recently.
    pub fn last_placed(&self) -> Option<Position> {
        self.last_placed
    }

    /// Line to highlight after a win.
    pub fn winning_line(&self) -> Option<WinPattern> {
        self.winning_line
    }
}

impl GameObserver for Feedback {
    fn on_cell_filled(&mut self, position: Position, mark: Mark) {
        debug!(%position, %mark, "Cell filled");
        self.last_placed = Some(position);
    }

    fn on_game_outcome(&mut self, outcome: &GameOutcome) {
        debug!(%outcome, "Outcome received");
        self.winning_line = outcome.pattern();
    }

    fn on_turn_changed(&mut self, mark: Mark) {
        debug!(%mark, "Turn changed");
        self.winning_line = None;
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    feedback: Feedback,
    cursor: Position,
    notice: Option<String>,
    confirming_exit: bool,
    computer_due: Option<Instant>,
    think_delay: Duration,
}

impl App {
    /// Starts a game with the given settings.
    #[instrument(skip(config))]
    pub fn new(config: SessionConfig, think_delay: Duration) -> Self {
        let mut feedback = Feedback::default();
        let session = Session::start(config, &mut feedback);
        let mut app = Self {
            session,
            feedback,
            cursor: Position::Center,
            notice: None,
            confirming_exit: false,
            computer_due: None,
            think_delay,
        };
        app.schedule_computer();
        app
    }

    /// Gets the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the notification-driven rendering state.
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Message about the last rejected input, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True while the quit prompt is showing.
    pub fn confirming_exit(&self) -> bool {
        self.confirming_exit
    }

    /// True while the computer's move is pending.
    pub fn computer_thinking(&self) -> bool {
        self.computer_due.is_some()
    }

    /// Status bar text.
    pub fn status(&self) -> String {
        if self.confirming_exit {
            return "Abandon this game? (y/n)".to_string();
        }
        let status = self.session.status_line();
        if self.computer_thinking() {
            format!("{status} - thinking...")
        } else if self.session.is_over() {
            format!("{status}! Press 'r' to play again or 'q' to quit.")
        } else {
            status
        }
    }

    /// How long the event loop may block before calling [`App::tick`].
    pub fn poll_timeout(&self) -> Duration {
        self.computer_due
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(Instant::now()))
    }

    /// Applies one key action.
    ///
    /// # Errors
    ///
    /// Only move errors the session treats as bugs. Rejected moves become a
    /// notice instead.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn handle(&mut self, action: Action) -> Result<Control, MoveError> {
        if self.confirming_exit {
            return Ok(match action {
                Action::Yes | Action::Quit => {
                    info!("Game abandoned");
                    Control::Quit
                }
                Action::No => {
                    self.confirming_exit = false;
                    Control::Continue
                }
                _ => Control::Continue,
            });
        }

        self.notice = None;
        match action {
            Action::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::PlaceAtCursor => self.place(self.cursor)?,
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos)?;
            }
            Action::Restart => self.restart(),
            Action::Quit if self.session.needs_exit_confirmation() => {
                self.confirming_exit = true;
            }
            Action::Quit => return Ok(Control::Quit),
            Action::Yes | Action::No | Action::Ignore => {}
        }
        Ok(Control::Continue)
    }

    /// Plays the computer's move once its delay has passed.
    ///
    /// # Errors
    ///
    /// Propagates selector failures.
    pub fn tick(&mut self) -> Result<(), MoveError> {
        let Some(due) = self.computer_due else {
            return Ok(());
        };
        if Instant::now() < due {
            return Ok(());
        }
        self.computer_due = None;
        let (pos, outcome) = self.session.play_computer_move(&mut self.feedback)?;
        debug!(%pos, %outcome, "Computer moved");
        self.schedule_computer();
        Ok(())
    }

    fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        match self.session.submit_human_move(pos, &mut self.feedback) {
            Ok(_) => {
                self.schedule_computer();
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "Move rejected");
                self.notice = Some(e.to_string());
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Move failed");
                Err(e)
            }
        }
    }

    fn restart(&mut self) {
        info!("Restarting game");
        self.session.reset(&mut self.feedback);
        self.feedback.last_placed = None;
        self.computer_due = None;
        self.schedule_computer();
    }

    fn schedule_computer(&mut self) {
        if self.session.phase() == Phase::AwaitingComputerMove && self.computer_due.is_none() {
            self.computer_due = Some(Instant::now() + self.think_delay);
        }
    }
}
