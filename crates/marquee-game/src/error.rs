//! Game configuration errors.

use thiserror::Error;

/// Errors raised before a game starts publishing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Winning threshold must be at least 1
    #[error("winning threshold must be at least 1, got {threshold}")]
    InvalidThreshold {
        /// The rejected threshold
        threshold: usize,
    },

    /// No composers to build collectors for
    #[error("no composers to play the game with")]
    NoComposers,
}

/// Result type for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
