//! History consistency: the board is exactly what the history says.

use super::Invariant;
use crate::session::Session;
use crate::types::Cell;

/// Invariant: every history entry is on the board, and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<Session> for HistoryConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        let history = session.history();

        history.len() == board.filled()
            && history
                .iter()
                .all(|m| board.get(m.position) == Cell::Occupied(m.mark))
    }

    fn description() -> &'static str {
        "Board contents match the move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NullObserver;
    use crate::position::Position;
    use crate::session::SessionConfig;
    use crate::types::Mark;

    #[test]
    fn test_holds_after_moves() {
        let mut session = Session::start(SessionConfig::multiplayer(Mark::X), &mut NullObserver);
        session
            .submit_human_move(Position::TopLeft, &mut NullObserver)
            .unwrap();
        session
            .submit_human_move(Position::BottomRight, &mut NullObserver)
            .unwrap();
        assert!(HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut session = Session::start(SessionConfig::multiplayer(Mark::X), &mut NullObserver);
        session
            .submit_human_move(Position::TopLeft, &mut NullObserver)
            .unwrap();
        session.board.set(Position::TopLeft, Cell::Occupied(Mark::O));
        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
