use crate::direction::Direction;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors raised while building or loading a world.
///
/// These are mistakes in world content, so they surface at construction time
/// rather than when a player first walks through a broken exit.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The builder was asked to produce a world with no locations.
    #[error("world has no locations")]
    EmptyWorld,

    /// An exit names a location that was never declared.
    #[error("exit {direction} from \"{from}\" leads to unknown location \"{target}\"")]
    UnknownTarget {
        /// Key of the location owning the exit.
        from: String,
        /// Direction of the exit.
        direction: Direction,
        /// The unresolved target key.
        target: String,
    },

    /// The designated start location was never declared.
    #[error("start location \"{0}\" is not declared")]
    UnknownStart(String),

    /// A direction word in a world file is not a known direction.
    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    /// A world file could not be parsed.
    #[error("invalid world file: {0}")]
    Format(#[from] serde_json::Error),

    /// A world file could not be read.
    #[error("cannot read world file: {0}")]
    Io(#[from] std::io::Error),
}
