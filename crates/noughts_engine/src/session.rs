//! One play-through: board, turn order and the computer seat.
//!
//! A [`Session`] is the turn state machine. It accepts human moves, decides
//! when the computer is due, asks its [`MoveSelector`] for that move, and
//! reports every change to a [`GameObserver`]. It never waits: a front end
//! that wants a "thinking" pause simply delays its call to
//! [`Session::play_computer_move`].

use crate::action::{Move, MoveError};
use crate::observer::GameObserver;
use crate::outcome::GameOutcome;
use crate::position::Position;
use crate::rules;
use crate::selector::{Difficulty, MoveSelector};
use crate::types::{Board, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Who plays a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Moves arrive through [`Session::submit_human_move`].
    Human,
    /// Moves come from the session's selector.
    Computer,
}

/// Opponent arrangement for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Mode {
    /// One human against the computer.
    Computer {
        /// Strength of the computer seat.
        difficulty: Difficulty,
        /// Mark the computer plays.
        computer_mark: Mark,
    },
    /// Two humans sharing the board.
    Multiplayer,
}

/// Where the turn state machine stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for [`Session::submit_human_move`].
    AwaitingHumanMove,
    /// Waiting for [`Session::play_computer_move`].
    AwaitingComputerMove,
    /// Won or drawn. Left only by [`Session::reset`].
    GameOver(GameOutcome),
}

/// Settings fixed for the life of a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Opponent arrangement.
    mode: Mode,
    /// Mark that moves first.
    first_mover: Mark,
    /// Display name of the X seat.
    player_x: String,
    /// Display name of the O seat.
    player_o: String,
}

impl SessionConfig {
    /// Human against the computer, seats named "You" and "Computer".
    pub fn computer(difficulty: Difficulty, computer_mark: Mark, first_mover: Mark) -> Self {
        let (player_x, player_o) = match computer_mark {
            Mark::X => ("Computer", "You"),
            Mark::O => ("You", "Computer"),
        };
        Self {
            mode: Mode::Computer {
                difficulty,
                computer_mark,
            },
            first_mover,
            player_x: player_x.to_string(),
            player_o: player_o.to_string(),
        }
    }

    /// Two humans, seats named "Player 1" (X) and "Player 2" (O).
    pub fn multiplayer(first_mover: Mark) -> Self {
        Self {
            mode: Mode::Multiplayer,
            first_mover,
            player_x: "Player 1".to_string(),
            player_o: "Player 2".to_string(),
        }
    }

    /// Renames the seats. Blank names keep the current ones.
    pub fn with_names(mut self, player_x: impl Into<String>, player_o: impl Into<String>) -> Self {
        let (player_x, player_o) = (player_x.into(), player_o.into());
        if !player_x.trim().is_empty() {
            self.player_x = player_x.trim().to_string();
        }
        if !player_o.trim().is_empty() {
            self.player_o = player_o.trim().to_string();
        }
        self
    }

    /// Who plays `mark`.
    pub fn role_of(&self, mark: Mark) -> Role {
        match self.mode {
            Mode::Computer { computer_mark, .. } if computer_mark == mark => Role::Computer,
            _ => Role::Human,
        }
    }

    /// Display name of the seat playing `mark`.
    pub fn seat_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }
}

/// A game in progress, or just finished.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    history: Vec<Move>,
    phase: Phase,
    selector: Option<Box<dyn MoveSelector>>,
}

impl Session {
    /// Starts a session with the selector matching the configured difficulty.
    #[instrument(skip(observer))]
    pub fn start(config: SessionConfig, observer: &mut dyn GameObserver) -> Self {
        let selector = match config.mode {
            Mode::Computer { difficulty, .. } => Some(difficulty.selector()),
            Mode::Multiplayer => None,
        };
        Self::with_selector(config, selector, observer)
    }

    /// Starts a session with an explicit computer selector.
    ///
    /// The selector is only consulted in computer mode.
    #[instrument(skip(selector, observer))]
    pub fn with_selector(
        config: SessionConfig,
        selector: Option<Box<dyn MoveSelector>>,
        observer: &mut dyn GameObserver,
    ) -> Self {
        let turn = config.first_mover;
        let mut session = Self {
            phase: Phase::AwaitingHumanMove,
            config,
            board: Board::new(),
            turn,
            history: Vec::new(),
            selector,
        };
        session.phase = session.phase_for(turn);
        info!(
            mode = ?session.config.mode,
            first_mover = %turn,
            phase = ?session.phase,
            "Session started"
        );
        observer.on_turn_changed(turn);
        session
    }

    /// Returns the session settings.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move, or the mark that moved last once the game is over.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> GameOutcome {
        match self.phase {
            Phase::GameOver(outcome) => outcome,
            _ => GameOutcome::InProgress,
        }
    }

    /// True once a win or draw has been reached.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// True when leaving now would abandon a game with moves on the board.
    pub fn needs_exit_confirmation(&self) -> bool {
        !self.is_over() && self.board.filled() > 0
    }

    /// One-line status: whose turn it is, or how the game ended.
    pub fn status_line(&self) -> String {
        match self.phase {
            Phase::GameOver(GameOutcome::Win { mark, .. }) => {
                format!("{} wins", self.config.seat_name(mark))
            }
            Phase::GameOver(_) => "Draw".to_string(),
            _ => format!("{}'s turn ({})", self.config.seat_name(self.turn), self.turn),
        }
    }

    /// Plays a move for the human whose turn it is.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] after a win or draw.
    /// - [`MoveError::NotHumanTurn`] while the computer is due.
    /// - [`MoveError::OccupiedCell`] if `pos` is taken.
    ///
    /// The session is unchanged on error.
    #[instrument(skip(self, observer), fields(turn = %self.turn))]
    pub fn submit_human_move(
        &mut self,
        pos: Position,
        observer: &mut dyn GameObserver,
    ) -> Result<GameOutcome, MoveError> {
        match self.phase {
            Phase::AwaitingHumanMove => self.place(pos, observer),
            Phase::AwaitingComputerMove => {
                debug!("Human move ignored while computer is due");
                Err(MoveError::NotHumanTurn)
            }
            Phase::GameOver(_) => {
                debug!("Human move ignored after game over");
                Err(MoveError::GameOver)
            }
        }
    }

    /// Asks the selector for the computer's move and plays it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::NotComputerTurn`] unless the computer is due.
    /// - [`MoveError::GameOver`] after a win or draw.
    /// - [`MoveError::NoLegalMove`] if the selector finds nothing to play,
    ///   which the phase machine should make impossible.
    #[instrument(skip(self, observer), fields(turn = %self.turn))]
    pub fn play_computer_move(
        &mut self,
        observer: &mut dyn GameObserver,
    ) -> Result<(Position, GameOutcome), MoveError> {
        match self.phase {
            Phase::AwaitingComputerMove => {}
            Phase::AwaitingHumanMove => return Err(MoveError::NotComputerTurn),
            Phase::GameOver(_) => return Err(MoveError::GameOver),
        }

        let Some(selector) = self.selector.as_mut() else {
            error!("Computer is due but the session has no selector");
            return Err(MoveError::NotComputerTurn);
        };
        let pos = selector.select(&self.board, self.turn).inspect_err(|e| {
            error!(error = %e, board = %self.board.display(), "Selector failed");
        })?;
        debug!(selector = selector.name(), position = %pos, "Computer chose move");

        let outcome = self.place(pos, observer)?;
        Ok((pos, outcome))
    }

    /// Clears the board and starts over with the same settings.
    #[instrument(skip(self, observer))]
    pub fn reset(&mut self, observer: &mut dyn GameObserver) {
        self.board = Board::new();
        self.history.clear();
        self.turn = self.config.first_mover;
        self.phase = self.phase_for(self.turn);
        info!(phase = ?self.phase, "Session reset");
        observer.on_turn_changed(self.turn);
    }

    fn phase_for(&self, mark: Mark) -> Phase {
        match self.config.role_of(mark) {
            Role::Human => Phase::AwaitingHumanMove,
            Role::Computer => Phase::AwaitingComputerMove,
        }
    }

    fn place(
        &mut self,
        pos: Position,
        observer: &mut dyn GameObserver,
    ) -> Result<GameOutcome, MoveError> {
        let mark = self.turn;
        self.board = rules::apply_move(&self.board, pos, mark)?;
        self.history.push(Move::new(mark, pos));

        let outcome = rules::evaluate(&self.board);
        if outcome.is_terminal() {
            self.phase = Phase::GameOver(outcome);
        } else {
            self.turn = rules::next_turn(mark);
            self.phase = self.phase_for(self.turn);
        }

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        observer.on_cell_filled(pos, mark);
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game over");
            observer.on_game_outcome(&outcome);
        } else {
            debug!(position = %pos, %mark, next = %self.turn, "Move accepted");
            observer.on_turn_changed(self.turn);
        }
        Ok(outcome)
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), MoveError> {
        use crate::invariants::{InvariantSet, SessionInvariants};

        SessionInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!(%descriptions, "Session invariants violated");
            MoveError::InvariantViolation(descriptions)
        })
    }
}
