//! Win detection logic for tic-tac-toe.

use crate::outcome::WinPattern;
use crate::position::Position;
use crate::types::{Board, Cell, Mark};

/// The 8 winning lines, scanned in this order.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first pattern, in table order, held entirely by one mark.
pub fn winning_pattern(board: &Board) -> Option<(Mark, WinPattern)> {
    WIN_PATTERNS.iter().find_map(|&pattern| {
        let [a, b, c] = pattern;
        let Cell::Occupied(mark) = board.get(a) else {
            return None;
        };
        let held = |pos| board.get(pos) == Cell::Occupied(mark);
        (held(b) && held(c)).then_some((mark, pattern))
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_pattern(board).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX|OO.|...".parse().unwrap();
        assert_eq!(
            winning_pattern(&board),
            Some((Mark::X, [Position::TopLeft, Position::TopCenter, Position::TopRight]))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO|XO.|O..".parse().unwrap();
        assert_eq!(winning_pattern(&board), Some((Mark::O, WIN_PATTERNS[7])));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.|...|...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // Artificial board: X holds the top row and the left column.
        let board: Board = "XXX|X..|X..".parse().unwrap();
        assert_eq!(winning_pattern(&board), Some((Mark::X, WIN_PATTERNS[0])));

        // Both marks complete a line; the earlier row wins.
        let board: Board = "OOO|XXX|...".parse().unwrap();
        assert_eq!(winning_pattern(&board), Some((Mark::O, WIN_PATTERNS[0])));
    }

    #[test]
    fn test_table_covers_rows_columns_diagonals() {
        let indices: Vec<[usize; 3]> = WIN_PATTERNS
            .iter()
            .map(|p| [p[0].to_index(), p[1].to_index(), p[2].to_index()])
            .collect();
        assert_eq!(
            indices,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }
}
