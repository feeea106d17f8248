//! Alternating turn invariant: marks alternate starting with the first mover.

use super::Invariant;
use crate::session::{Phase, Session};

/// Invariant: marks alternate, and the mark to move follows from the history.
///
/// After a finished game the turn stays with the mark that made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let first = *session.config().first_mover();
        let history = session.history();

        if history.first().is_some_and(|m| m.mark != first) {
            return false;
        }
        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let expected = match (session.phase(), history.last()) {
            (Phase::GameOver(_), Some(last)) => last.mark,
            _ if history.len() % 2 == 0 => first,
            _ => first.opponent(),
        };
        session.turn() == expected
    }

    fn description() -> &'static str {
        "Marks alternate starting with the first mover"
    }
}
