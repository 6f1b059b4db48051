use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::GameError;

/// Largest board side accepted; keeps every coordinate well inside `i32`
pub const MAX_BOARD_SIDE: usize = 1024;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Extent of the `x` axis, in cells
    pub board_height: usize,
    /// Extent of the `y` axis, in cells
    pub board_width: usize,
    /// Initial length of the snake, head included
    pub initial_snake_length: usize,
    /// Apples kept on the board at all times
    pub n_apples: usize,
    /// Points added per apple eaten
    pub score_multiplier: u32,
    /// Margin of cells along each edge where nothing is spawned
    pub spawn_buffer: usize,
    /// Random draws tried before the free-cell search falls back to a scan
    pub max_spawn_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_height: 30,
            board_width: 30,
            initial_snake_length: 3,
            n_apples: 1,
            score_multiplier: 1,
            spawn_buffer: 1,
            max_spawn_attempts: 1000,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board size
    pub fn new(board_height: usize, board_width: usize) -> Self {
        Self {
            board_height,
            board_width,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Check that a game can actually be set up with these values.
    ///
    /// The snake spawns at least `spawn_buffer + initial_snake_length` cells
    /// away from every edge, so each side of the board needs room for that
    /// margin twice plus the head itself.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_height == 0 || self.board_width == 0 {
            return Err(GameError::InvalidConfig(format!(
                "board must be at least 1x1, got {}x{}",
                self.board_height, self.board_width
            )));
        }

        if self.board_height > MAX_BOARD_SIDE || self.board_width > MAX_BOARD_SIDE {
            return Err(GameError::InvalidConfig(format!(
                "board sides are limited to {}, got {}x{}",
                MAX_BOARD_SIDE, self.board_height, self.board_width
            )));
        }

        if self.initial_snake_length == 0 {
            return Err(GameError::InvalidConfig(
                "initial_snake_length must be at least 1".to_string(),
            ));
        }

        if self.n_apples == 0 {
            return Err(GameError::InvalidConfig(
                "n_apples must be at least 1".to_string(),
            ));
        }

        let needed = 2 * (self.spawn_buffer + self.initial_snake_length) + 1;
        if self.board_height < needed || self.board_width < needed {
            return Err(GameError::InvalidConfig(format!(
                "a snake of length {} with spawn buffer {} needs a board of at least {}x{}, got {}x{}",
                self.initial_snake_length,
                self.spawn_buffer,
                needed,
                needed,
                self.board_height,
                self.board_width
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_height, 30);
        assert_eq!(config.board_width, 30);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.n_apples, 1);
        assert_eq!(config.score_multiplier, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 20);
        assert_eq!(config.board_height, 15);
        assert_eq!(config.board_width, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_small_config_is_valid() {
        assert!(GameConfig::small().validate().is_ok());
    }

    #[test]
    fn test_rejects_board_too_small_for_snake() {
        let config = GameConfig::new(8, 10);
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_board() {
        assert!(GameConfig::new(MAX_BOARD_SIDE, MAX_BOARD_SIDE).validate().is_ok());
        assert!(matches!(
            GameConfig::new(MAX_BOARD_SIDE + 1, 30).validate(),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(GameConfig::new(30, usize::MAX).validate().is_err());
    }

    #[test]
    fn test_rejects_zero_apples() {
        let config = GameConfig {
            n_apples: 0,
            ..GameConfig::small()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "board_height": 12, "n_apples": 3 }}"#).unwrap();

        let config = GameConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.board_height, 12);
        assert_eq!(config.board_width, 30);
        assert_eq!(config.n_apples, 3);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(GameConfig::from_json_file(file.path()).is_err());
    }
}
