use thiserror::Error;

/// Errors raised while setting up or advancing a game
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The spawn region has no empty cell left
    #[error("no free cell left in the spawn region")]
    BoardFull,
}
