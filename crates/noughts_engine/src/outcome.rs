//! Game outcome, derived from a board after every move.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Three positions that win when held by one mark.
pub type WinPattern = [Position; 3];

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Play continues.
    InProgress,
    /// `mark` holds every cell of `pattern`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line, for highlighting.
        pattern: WinPattern,
    },
    /// Board is full with no winner.
    Draw,
}

impl GameOutcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn pattern(&self) -> Option<WinPattern> {
        match self {
            GameOutcome::Win { pattern, .. } => Some(*pattern),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win { mark, .. } => write!(f, "Player {} wins", mark),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
