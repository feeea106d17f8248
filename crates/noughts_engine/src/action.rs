//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which mark
//! went where and can be replayed against a fresh board.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error that can occur when choosing or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Cell {} is already occupied", _0)]
    OccupiedCell(Position),

    /// The game has already reached a win or a draw.
    #[display("Game is already over")]
    GameOver,

    /// A move was requested on a board with no empty cell.
    #[display("No legal move available")]
    NoLegalMove,

    /// A raw index outside 0-8.
    #[display("Index {} is outside the board (0-8)", _0)]
    InvalidIndex(usize),

    /// A human move arrived while the computer is due to play.
    #[display("It is the computer's turn")]
    NotHumanTurn,

    /// A computer move was requested while no computer move is pending.
    #[display("No computer move is pending")]
    NotComputerTurn,

    /// An invariant was violated after a move (debug builds only).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// True for errors the caller can ignore without changing state.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MoveError::OccupiedCell(_)
                | MoveError::GameOver
                | MoveError::InvalidIndex(_)
                | MoveError::NotHumanTurn
                | MoveError::NotComputerTurn
        )
    }
}
