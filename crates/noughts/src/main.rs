//! Noughts - tic-tac-toe in the terminal
//!
//! Play against a friend or the computer, or run headless self-play.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod simulate;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs, SimulateArgs};
use config::AppConfig;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_play(&args),
        Command::Simulate(args) => run_simulate(&args),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run an interactive game
fn run_play(args: &PlayArgs) -> Result<()> {
    let config = AppConfig::load_or_default(&args.config)?.with_overrides(args);

    // Log to a file so output does not interfere with the TUI
    let log_path = config.ui().log_file();
    let log_file = std::fs::File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(config = %args.config.display(), "Starting game");
    tui::run_tui(&config)
}

/// Run headless games and print the tally
fn run_simulate(args: &SimulateArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let tally = simulate::run(args)?;
    println!("{tally}");
    Ok(())
}
