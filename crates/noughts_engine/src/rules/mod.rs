//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are separated from session
//! bookkeeping so the search can call them on scratch boards.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WIN_PATTERNS, check_winner, winning_pattern};

use crate::action::MoveError;
use crate::outcome::GameOutcome;
use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use tracing::{debug, instrument};

/// Evaluates a board: first winning pattern in table order, then draw, else in progress.
#[instrument(level = "trace", skip(board), ret)]
pub fn evaluate(board: &Board) -> GameOutcome {
    outcome_of(board)
}

/// Uninstrumented [`evaluate`] for the search hot path.
pub(crate) fn outcome_of(board: &Board) -> GameOutcome {
    if let Some((mark, pattern)) = winning_pattern(board) {
        GameOutcome::Win { mark, pattern }
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// Places `mark` at `pos`, returning the new board.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the board is already won or drawn.
/// - [`MoveError::OccupiedCell`] if `pos` is taken.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, pos: Position, mark: Mark) -> Result<Board, MoveError> {
    if outcome_of(board).is_terminal() {
        debug!("Rejected move on finished board");
        return Err(MoveError::GameOver);
    }
    if !board.is_empty(pos) {
        debug!("Rejected move on occupied cell");
        return Err(MoveError::OccupiedCell(pos));
    }

    let mut next = *board;
    next.set(pos, Cell::Occupied(mark));
    Ok(next)
}

/// Toggles the mark to move.
pub fn next_turn(mark: Mark) -> Mark {
    mark.opponent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_places_mark() {
        let board = Board::new();
        let next = apply_move(&board, Position::Center, Mark::X).unwrap();
        assert_eq!(next.get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(board, Board::new(), "input board is untouched");
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let board: Board = "....X....".parse().unwrap();
        assert_eq!(
            apply_move(&board, Position::Center, Mark::O),
            Err(MoveError::OccupiedCell(Position::Center))
        );
    }

    #[test]
    fn test_apply_move_rejects_finished_game() {
        let board: Board = "XXX|OO.|...".parse().unwrap();
        assert_eq!(
            apply_move(&board, Position::MiddleRight, Mark::O),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_full_board_reports_game_over() {
        let board: Board = "XOX|OXX|OXO".parse().unwrap();
        assert_eq!(
            apply_move(&board, Position::TopLeft, Mark::O),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_evaluate_win_carries_pattern() {
        let board: Board = "X.O|XO.|X..".parse().unwrap();
        assert_eq!(
            evaluate(&board),
            GameOutcome::Win {
                mark: Mark::X,
                pattern: [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
            }
        );
    }

    #[test]
    fn test_evaluate_draw_and_in_progress() {
        assert_eq!(evaluate(&"XOX|OXX|OXO".parse().unwrap()), GameOutcome::Draw);
        assert_eq!(evaluate(&Board::new()), GameOutcome::InProgress);
    }

    #[test]
    fn test_next_turn_toggles() {
        assert_eq!(next_turn(Mark::X), Mark::O);
        assert_eq!(next_turn(next_turn(Mark::X)), Mark::X);
    }
}
