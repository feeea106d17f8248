//! Perfect-play move choice by exhaustive minimax.
//!
//! Terminal boards score +10 when the computer holds a line, -10 when the
//! opponent does and 0 for a draw. Scores are not discounted by depth, so a
//! slow win is worth as much as a fast one; among equal scores the lowest
//! index is chosen. Both rules change which move is played and are part of
//! the observable behaviour.

use super::MoveSelector;
use crate::action::MoveError;
use crate::outcome::GameOutcome;
use crate::position::Position;
use crate::rules::outcome_of;
use crate::types::{Board, Cell, Mark};
use tracing::{debug, instrument};

/// Score of a board the computer has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a board the opponent has won.
pub const LOSS_SCORE: i32 = -WIN_SCORE;
/// Score of a drawn board.
pub const DRAW_SCORE: i32 = 0;

fn terminal_score(board: &Board, ai: Mark) -> Option<i32> {
    match outcome_of(board) {
        GameOutcome::InProgress => None,
        GameOutcome::Win { mark, .. } if mark == ai => Some(WIN_SCORE),
        GameOutcome::Win { .. } => Some(LOSS_SCORE),
        GameOutcome::Draw => Some(DRAW_SCORE),
    }
}

/// Value of `board` under full-depth minimax without pruning.
///
/// `maximizing` is true when `ai` is to move.
pub fn minimax_score(board: &Board, ai: Mark, human: Mark, maximizing: bool) -> i32 {
    let mut scratch = *board;
    plain(&mut scratch, ai, human, maximizing)
}

fn plain(board: &mut Board, ai: Mark, human: Mark, maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(board, ai) {
        return score;
    }

    let mark = if maximizing { ai } else { human };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Cell::Occupied(mark));
        let score = plain(board, ai, human, !maximizing);
        board.set(pos, Cell::Empty);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Fail-soft alpha-beta. Exact whenever the true value lies inside `(alpha, beta)`.
fn pruned(
    board: &mut Board,
    ai: Mark,
    human: Mark,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = terminal_score(board, ai) {
        return score;
    }

    if maximizing {
        let mut best = i32::MIN;
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Cell::Occupied(ai));
            let score = pruned(board, ai, human, false, alpha, beta);
            board.set(pos, Cell::Empty);
            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Cell::Occupied(human));
            let score = pruned(board, ai, human, true, alpha, beta);
            board.set(pos, Cell::Empty);
            best = best.min(score);
            beta = beta.min(best);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

/// Exact minimax score of every legal move for `ai`, in index order.
#[instrument(skip(board))]
pub fn score_moves(board: &Board, ai: Mark, human: Mark) -> Vec<(Position, i32)> {
    let mut scratch = *board;
    let mut scores = Vec::with_capacity(9);
    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Cell::Occupied(ai));
        let score = pruned(&mut scratch, ai, human, false, i32::MIN, i32::MAX);
        scratch.set(pos, Cell::Empty);
        scores.push((pos, score));
    }
    scores
}

/// Chooses the optimal move for `ai`: the lowest index among maximal scores.
///
/// # Errors
///
/// [`MoveError::NoLegalMove`] if the board is full.
#[instrument(skip(board))]
pub fn best_move(board: &Board, ai: Mark, human: Mark) -> Result<Position, MoveError> {
    let mut scratch = *board;
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Cell::Occupied(ai));
        let score = pruned(&mut scratch, ai, human, false, i32::MIN, i32::MAX);
        scratch.set(pos, Cell::Empty);

        if best.is_none_or(|(_, top)| score > top) {
            best = Some((pos, score));
        }
        // Nothing later can beat a win, and ties keep the earlier index.
        if score == WIN_SCORE {
            break;
        }
    }

    let (pos, score) = best.ok_or(MoveError::NoLegalMove)?;
    debug!(position = %pos, score, "Minimax chose move");
    Ok(pos)
}

/// Hard difficulty: never loses.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxSelector;

impl MinimaxSelector {
    /// Creates a minimax selector.
    pub fn new() -> Self {
        Self
    }
}

impl MoveSelector for MinimaxSelector {
    fn select(&mut self, board: &Board, mark: Mark) -> Result<Position, MoveError> {
        best_move(board, mark, mark.opponent())
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_terminal_scores() {
        let score = |s: &str, maximizing| minimax_score(&board(s), Mark::O, Mark::X, maximizing);
        assert_eq!(score("OOO|XX.|X..", false), WIN_SCORE);
        assert_eq!(score("XXX|OO.|O..", true), LOSS_SCORE);
        assert_eq!(score("XOX|OXX|OXO", true), DRAW_SCORE);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(minimax_score(&Board::new(), Mark::X, Mark::O, true), DRAW_SCORE);
    }

    #[test]
    fn test_empty_board_plays_first_cell() {
        // Every opening draws, so the lowest index wins the tie.
        assert_eq!(
            best_move(&Board::new(), Mark::X, Mark::O),
            Ok(Position::TopLeft)
        );
    }

    #[test]
    fn test_lower_of_two_winning_cells() {
        // O wins at 5 (row) or 7 (column); 2 is lower but lets X win at 7.
        let b = board("XO.|OO.|X.X");
        let scores = score_moves(&b, Mark::O, Mark::X);
        assert_eq!(
            scores,
            vec![
                (Position::TopRight, LOSS_SCORE),
                (Position::MiddleRight, WIN_SCORE),
                (Position::BottomCenter, WIN_SCORE),
            ]
        );
        assert_eq!(best_move(&b, Mark::O, Mark::X), Ok(Position::MiddleRight));
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        // X threatens 8 on the bottom row; every other reply loses.
        let b = board("...|.O.|XX.");
        assert_eq!(best_move(&b, Mark::O, Mark::X), Ok(Position::BottomRight));
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(
            best_move(&board("XOX|OXX|OXO"), Mark::O, Mark::X),
            Err(MoveError::NoLegalMove)
        );
    }

    #[test]
    fn test_selector_plays_opponent_of_its_mark() {
        let mut selector = MinimaxSelector::new();
        let b = board("...|.O.|XX.");
        assert_eq!(selector.select(&b, Mark::O), Ok(Position::BottomRight));
        assert_eq!(selector.name(), "minimax");
    }
}
