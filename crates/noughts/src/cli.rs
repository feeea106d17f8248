//! Command-line interface for noughts.

use clap::{Args, Parser, Subcommand, ValueEnum};
use noughts_engine::{Difficulty, Mark};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a friend or an unbeatable computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play(PlayArgs),

    /// Pit the computer against another selector and print the tally
    Simulate(SimulateArgs),
}

/// Options for `noughts play`. Anything left unset comes from the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Path to the config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Play the computer or a second human
    #[arg(long, value_enum)]
    pub mode: Option<ModeKind>,

    /// Computer strength (easy or hard)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Mark that moves first (x or o)
    #[arg(long)]
    pub first: Option<Mark>,

    /// Mark the computer plays (x or o)
    #[arg(long)]
    pub computer: Option<Mark>,

    /// Display name for the X seat
    #[arg(long)]
    pub player_x: Option<String>,

    /// Display name for the O seat
    #[arg(long)]
    pub player_o: Option<String>,
}

/// Options for `noughts simulate`.
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(short, long, default_value = "100")]
    pub games: usize,

    /// Seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Selector the computer plays against
    #[arg(long, value_enum, default_value = "random")]
    pub opponent: Opponent,

    /// Strength of the computer under test
    #[arg(short, long, default_value = "hard")]
    pub difficulty: Difficulty,
}

/// Opponent arrangement without its settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    /// One human against the computer.
    #[default]
    Computer,
    /// Two humans at one keyboard.
    Multiplayer,
}

/// Sparring partner for `simulate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Opponent {
    /// Uniformly random legal moves.
    Random,
    /// Perfect play.
    Minimax,
}
