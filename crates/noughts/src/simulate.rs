//! Headless games between the computer and another selector.
//!
//! The computer under test always plays O; the first mover alternates so
//! each side opens half the games. The sparring partner is fed through
//! [`Session::submit_human_move`], so every game runs the same turn machine
//! as the terminal UI.

use crate::cli::{Opponent, SimulateArgs};
use derive_getters::Getters;
use derive_more::Display;
use noughts_engine::{
    Difficulty, GameOutcome, Mark, MinimaxSelector, MoveError, MoveSelector, NullObserver, Phase,
    RandomSelector, Session, SessionConfig,
};
use tracing::{debug, info, instrument};

const COMPUTER: Mark = Mark::O;

/// Results from the computer's side of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Display)]
#[display("games: {}  wins: {}  losses: {}  draws: {}", games, wins, losses, draws)]
pub struct Tally {
    games: usize,
    wins: usize,
    losses: usize,
    draws: usize,
}

impl Tally {
    fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome.winner() {
            Some(mark) if mark == COMPUTER => self.wins += 1,
            Some(_) => self.losses += 1,
            None => self.draws += 1,
        }
    }
}

fn opponent_selector(opponent: Opponent, seed: Option<u64>) -> Box<dyn MoveSelector> {
    match (opponent, seed) {
        (Opponent::Random, Some(seed)) => Box::new(RandomSelector::seeded(seed)),
        (Opponent::Random, None) => Box::new(RandomSelector::new()),
        (Opponent::Minimax, _) => Box::new(MinimaxSelector::new()),
    }
}

fn computer_selector(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn MoveSelector> {
    match seed {
        Some(seed) => difficulty.seeded_selector(seed),
        None => difficulty.selector(),
    }
}

/// Plays one game to the end.
fn play_game(
    difficulty: Difficulty,
    first_mover: Mark,
    computer: Box<dyn MoveSelector>,
    opponent: &mut dyn MoveSelector,
) -> Result<GameOutcome, MoveError> {
    let config = SessionConfig::computer(difficulty, COMPUTER, first_mover);
    let mut session = Session::with_selector(config, Some(computer), &mut NullObserver);
    loop {
        let outcome = match session.phase() {
            Phase::AwaitingHumanMove => {
                let pos = opponent.select(session.board(), session.turn())?;
                session.submit_human_move(pos, &mut NullObserver)?
            }
            Phase::AwaitingComputerMove => session.play_computer_move(&mut NullObserver)?.1,
            Phase::GameOver(outcome) => return Ok(outcome),
        };
        if outcome.is_terminal() {
            return Ok(outcome);
        }
    }
}

/// Runs `args.games` games and tallies them.
///
/// # Errors
///
/// Any [`MoveError`] from a game. Legal selectors never produce one.
#[instrument(
    skip_all,
    fields(games = args.games, opponent = %args.opponent, difficulty = %args.difficulty)
)]
pub fn run(args: &SimulateArgs) -> Result<Tally, MoveError> {
    let mut opponent = opponent_selector(args.opponent, args.seed);
    let mut tally = Tally::default();

    for game in 0..args.games {
        let first_mover = if game % 2 == 0 { Mark::X } else { Mark::O };
        let seed = args.seed.map(|s| s.wrapping_add(1 + game as u64));
        let computer = computer_selector(args.difficulty, seed);
        let outcome = play_game(args.difficulty, first_mover, computer, opponent.as_mut())?;
        debug!(game, %first_mover, %outcome, "Game finished");
        tally.record(outcome);
    }

    info!(%tally, "Simulation complete");
    Ok(tally)
}
