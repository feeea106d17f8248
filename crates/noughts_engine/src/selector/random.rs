//! Uniform random move choice (easy difficulty).

use super::MoveSelector;
use crate::action::MoveError;
use crate::position::Position;
use crate::types::{Board, Mark};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Picks uniformly among the empty cells.
///
/// # Errors
///
/// [`MoveError::NoLegalMove`] if the board is full.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, MoveError> {
    let moves = Position::valid_moves(board);
    moves.choose(rng).copied().ok_or(MoveError::NoLegalMove)
}

/// Easy difficulty: a random legal move.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Creates a selector seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible selector.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, board: &Board, mark: Mark) -> Result<Position, MoveError> {
        let pos = random_move(board, &mut self.rng)?;
        debug!(%mark, position = %pos, "Random move");
        Ok(pos)
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_empty_cells_chosen() {
        let board: Board = "XOX|O.X|OXO".parse().unwrap();
        let mut selector = RandomSelector::seeded(7);
        for _ in 0..20 {
            assert_eq!(selector.select(&board, Mark::X), Ok(Position::Center));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX|OXX|OXO".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_move(&board, &mut rng), Err(MoveError::NoLegalMove));
    }

    #[test]
    fn test_every_empty_cell_reachable() {
        let board: Board = "X...O....".parse().unwrap();
        let mut selector = RandomSelector::seeded(42);
        let mut seen = [false; 9];
        for _ in 0..500 {
            let pos = selector.select(&board, Mark::X).unwrap();
            seen[pos.to_index()] = true;
        }
        let expected: Vec<bool> = (0..9).map(|i| i != 0 && i != 4).collect();
        assert_eq!(seen.to_vec(), expected);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let board = Board::new();
        let mut a = RandomSelector::seeded(99);
        let mut b = RandomSelector::seeded(99);
        for _ in 0..10 {
            assert_eq!(a.select(&board, Mark::O), b.select(&board, Mark::O));
        }
    }
}
