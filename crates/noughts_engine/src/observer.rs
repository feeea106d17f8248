//! Notifications from a session to whatever renders it.
//!
//! The engine never draws anything. A front end implements
//! [`GameObserver`] and receives one call per state change.

use crate::outcome::GameOutcome;
use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Receives session state changes. All methods default to doing nothing.
pub trait GameObserver {
    /// A mark was placed.
    fn on_cell_filled(&mut self, _position: Position, _mark: Mark) {}

    /// The game ended. Carries the winning line for highlighting.
    fn on_game_outcome(&mut self, _outcome: &GameOutcome) {}

    /// `mark` is now to move.
    fn on_turn_changed(&mut self, _mark: Mark) {}
}

/// Ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// A recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// See [`GameObserver::on_cell_filled`].
    CellFilled {
        /// Cell that was filled.
        position: Position,
        /// Mark placed there.
        mark: Mark,
    },
    /// See [`GameObserver::on_game_outcome`].
    GameOutcome(GameOutcome),
    /// See [`GameObserver::on_turn_changed`].
    TurnChanged(Mark),
}

impl GameObserver for Vec<SessionEvent> {
    fn on_cell_filled(&mut self, position: Position, mark: Mark) {
        self.push(SessionEvent::CellFilled { position, mark });
    }

    fn on_game_outcome(&mut self, outcome: &GameOutcome) {
        self.push(SessionEvent::GameOutcome(*outcome));
    }

    fn on_turn_changed(&mut self, mark: Mark) {
        self.push(SessionEvent::TurnChanged(mark));
    }
}
