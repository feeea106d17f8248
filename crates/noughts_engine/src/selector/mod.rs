//! Computer move selection.

mod minimax;
mod random;

pub use minimax::{
    DRAW_SCORE, LOSS_SCORE, MinimaxSelector, WIN_SCORE, best_move, minimax_score, score_moves,
};
pub use random::{RandomSelector, random_move};

use crate::action::MoveError;
use crate::position::Position;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Strategy a computer seat uses to pick its move.
pub trait MoveSelector: std::fmt::Debug + Send {
    /// Chooses a move for `mark` on `board`.
    fn select(&mut self, board: &Board, mark: Mark) -> Result<Position, MoveError>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}

/// Computer opponent strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Easy,
    /// Perfect play.
    #[default]
    Hard,
}

impl Difficulty {
    /// Builds the selector for this difficulty.
    pub fn selector(self) -> Box<dyn MoveSelector> {
        match self {
            Difficulty::Easy => Box::new(RandomSelector::new()),
            Difficulty::Hard => Box::new(MinimaxSelector::new()),
        }
    }

    /// Builds the selector with a fixed seed where randomness is involved.
    pub fn seeded_selector(self, seed: u64) -> Box<dyn MoveSelector> {
        match self {
            Difficulty::Easy => Box::new(RandomSelector::seeded(seed)),
            Difficulty::Hard => Box::new(MinimaxSelector::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parses_lowercase() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::Easy.to_string(), "easy");
    }

    #[test]
    fn test_difficulty_picks_selector() {
        assert_eq!(Difficulty::Easy.selector().name(), "random");
        assert_eq!(Difficulty::Hard.seeded_selector(3).name(), "minimax");
    }
}
