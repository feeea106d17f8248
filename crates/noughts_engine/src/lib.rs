//! Noughts engine - tic-tac-toe rules and a perfect-play opponent
//!
//! Pure game logic with no rendering dependency.
//!
//! # Architecture
//!
//! - **Rules**: board evaluation, move application, turn order
//! - **Selectors**: random (easy) and minimax (hard) computer moves
//! - **Session**: the turn state machine and its observer notifications
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Difficulty, Mark, NullObserver, Phase, Position, Session, SessionConfig};
//!
//! let config = SessionConfig::computer(Difficulty::Hard, Mark::O, Mark::X);
//! let mut session = Session::start(config, &mut NullObserver);
//!
//! session.submit_human_move(Position::Center, &mut NullObserver)?;
//! assert_eq!(session.phase(), Phase::AwaitingComputerMove);
//!
//! let (reply, _) = session.play_computer_move(&mut NullObserver)?;
//! assert_eq!(reply, Position::TopLeft);
//! # Ok::<(), noughts_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod invariants;
mod observer;
mod outcome;
mod position;
mod rules;
mod selector;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use invariants::{
    AlternatingTurnInvariant, BalancedMarksInvariant, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, SessionInvariants,
};
pub use observer::{GameObserver, NullObserver, SessionEvent};
pub use outcome::{GameOutcome, WinPattern};
pub use position::Position;
pub use rules::{
    WIN_PATTERNS, apply_move, check_winner, evaluate, is_draw, next_turn, winning_pattern,
};
pub use selector::{
    DRAW_SCORE, Difficulty, LOSS_SCORE, MinimaxSelector, MoveSelector, RandomSelector, WIN_SCORE,
    best_move, minimax_score, random_move, score_moves,
};
pub use session::{Mode, Phase, Role, Session, SessionConfig};
pub use types::{Board, BoardParseError, Cell, Mark};
