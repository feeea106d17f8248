//! Shared helpers for engine integration tests.

use noughts_engine::{Board, Cell, Mark, Position, evaluate};
use std::collections::HashSet;

/// Every board reachable from the empty board when `first` moves first,
/// paired with the mark to move. Terminal boards are included.
pub fn reachable_boards(first: Mark) -> Vec<(Board, Mark)> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(Board::new(), first, &mut seen, &mut out);
    out
}

fn walk(board: Board, to_move: Mark, seen: &mut HashSet<Board>, out: &mut Vec<(Board, Mark)>) {
    if !seen.insert(board) {
        return;
    }
    out.push((board, to_move));
    if evaluate(&board).is_terminal() {
        return;
    }
    for pos in Position::ALL {
        if board.is_empty(pos) {
            let mut next = board;
            next.set(pos, Cell::Occupied(to_move));
            walk(next, to_move.opponent(), seen, out);
        }
    }
}
