//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::Board;

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
