//! Game settings loaded from a TOML file

use std::path::Path;

use log::warn;

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

/// Per-game settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Search depth in plies for the computer's moves
    pub depth: u8,
    /// Whether the computer (White) opens at the center
    pub ai_starts: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            depth: 3,
            ai_starts: true,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.depth == 0 {
            return Err(ConfigError::Validation("depth must be > 0".into()));
        }
        Ok(())
    }
}
