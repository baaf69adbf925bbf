//! Shared configuration for CLI commands

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, session::GameMode};

/// Defaults for `play` and `simulate`, optionally loaded from a JSON file.
///
/// Command-line flags override whatever is set here.
///
/// # Examples
///
/// ```
/// use tictactoe::{cli::config::PlayConfig, session::GameMode};
///
/// let config = PlayConfig::default()
///     .with_mode(GameMode::RandomVsMinimax)
///     .with_seed(42)
///     .with_games(10);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Pairing of players
    pub mode: GameMode,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Number of simulated games
    pub games: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::MinimaxVsMinimax,
            seed: None,
            games: 100,
        }
    }
}

impl PlayConfig {
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Load configuration from a JSON file; missing fields keep defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config '{}'", path.display()),
            source,
        })?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
