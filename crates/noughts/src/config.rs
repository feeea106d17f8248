//! Game and UI settings loaded from `noughts.toml`.

use crate::cli::{ModeKind, PlayArgs};
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::{Difficulty, Mark, SessionConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Who plays and how.
    #[serde(default)]
    game: GameSettings,

    /// Terminal front end settings.
    #[serde(default)]
    ui: UiSettings,
}

/// The `[game]` table.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Computer or two-player game.
    #[serde(default)]
    mode: ModeKind,

    /// Computer strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// Mark that moves first.
    #[serde(default = "default_first_mover")]
    first_mover: Mark,

    /// Mark the computer plays in computer mode.
    #[serde(default = "default_computer_mark")]
    computer_mark: Mark,

    /// Name for the X seat. Blank keeps the mode's default.
    #[serde(default)]
    player_x: Option<String>,

    /// Name for the O seat. Blank keeps the mode's default.
    #[serde(default)]
    player_o: Option<String>,
}

/// The `[ui]` table.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct UiSettings {
    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Where tracing output goes while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_first_mover() -> Mark {
    Mark::X
}

fn default_computer_mark() -> Mark {
    Mark::O
}

fn default_think_delay_ms() -> u64 {
    400
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: ModeKind::default(),
            difficulty: Difficulty::default(),
            first_mover: default_first_mover(),
            computer_mark: default_computer_mark(),
            player_x: None,
            player_o: None,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            think_delay_ms: default_think_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = ?config.game.mode, difficulty = %config.game.difficulty, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Applies command-line flags on top of the file values.
    #[instrument(skip_all)]
    pub fn with_overrides(mut self, args: &PlayArgs) -> Self {
        let game = &mut self.game;
        if let Some(mode) = args.mode {
            game.mode = mode;
        }
        if let Some(difficulty) = args.difficulty {
            game.difficulty = difficulty;
        }
        if let Some(first) = args.first {
            game.first_mover = first;
        }
        if let Some(computer) = args.computer {
            game.computer_mark = computer;
        }
        if let Some(name) = &args.player_x {
            game.player_x = Some(name.clone());
        }
        if let Some(name) = &args.player_o {
            game.player_o = Some(name.clone());
        }
        debug!(game = ?self.game, "Applied command-line overrides");
        self
    }

    /// Session settings for a new game.
    pub fn session_config(&self) -> SessionConfig {
        let game = &self.game;
        let config = match game.mode {
            ModeKind::Computer => {
                SessionConfig::computer(game.difficulty, game.computer_mark, game.first_mover)
            }
            ModeKind::Multiplayer => SessionConfig::multiplayer(game.first_mover),
        };
        config.with_names(
            game.player_x.clone().unwrap_or_default(),
            game.player_o.clone().unwrap_or_default(),
        )
    }

    /// Pause before the computer's move.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.ui.think_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
