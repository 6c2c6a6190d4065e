//! Error types for game play and configuration

use std::path::PathBuf;

use crate::board::Pos;

/// Errors returned by the game controller when a move cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game is over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("AI is thinking")]
    AiThinking,

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("AI worker stopped without returning a move")]
    AiUnavailable,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        assert_eq!(
            GameError::Occupied(Pos::new(3, 4)).to_string(),
            "cell (3, 4) is already occupied"
        );
        let err = GameError::OutOfBounds {
            row: 20,
            col: 1,
            size: 19,
        };
        assert_eq!(err.to_string(), "(20, 1) is outside the 19x19 board");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("depth must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: depth must be > 0");
    }
}
