//! Balanced marks: the first mover is never behind, and never more than one ahead.

use super::Invariant;
use crate::session::Session;

/// Invariant: `count(first) - count(second)` is 0 or 1.
pub struct BalancedMarksInvariant;

impl Invariant<Session> for BalancedMarksInvariant {
    fn holds(session: &Session) -> bool {
        let first = *session.config().first_mover();
        let leading = session.board().count(first);
        let trailing = session.board().count(first.opponent());
        leading == trailing || leading == trailing + 1
    }

    fn description() -> &'static str {
        "First mover has the same number of marks as the second, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NullObserver;
    use crate::position::Position;
    use crate::session::SessionConfig;
    use crate::types::{Cell, Mark};

    #[test]
    fn test_holds_with_o_first() {
        let mut session = Session::start(SessionConfig::multiplayer(Mark::O), &mut NullObserver);
        session
            .submit_human_move(Position::Center, &mut NullObserver)
            .unwrap();
        assert_eq!(session.board().count(Mark::O), 1);
        assert!(BalancedMarksInvariant::holds(&session));
    }

    #[test]
    fn test_second_mover_ahead_violates() {
        let mut session = Session::start(SessionConfig::multiplayer(Mark::X), &mut NullObserver);
        session.board.set(Position::Center, Cell::Occupied(Mark::O));
        assert!(!BalancedMarksInvariant::holds(&session));
    }
}
