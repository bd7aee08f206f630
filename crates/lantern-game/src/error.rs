//! Error types for the turn controller.

use thiserror::Error;

/// Result type for session operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can end a session abnormally.
///
/// Ordinary gameplay failures (unknown verbs, missing items, blocked exits)
/// are reported to the player and never reach this type.
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading input, writing output, or reading a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The world could not be built or loaded.
    #[error(transparent)]
    World(#[from] lantern_core::WorldError),
}
