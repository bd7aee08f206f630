//! Turn controller for Lantern.
//!
//! A [`Game`] renders the current location, reads one line from a
//! [`Console`], and dispatches it to one of a fixed set of verbs. Handlers can
//! finish normally, abort the current turn, or quit the session.

/// Verbs and input tokenisation.
pub mod command;
/// Game configuration.
pub mod config;
/// Line-based input and output.
pub mod console;
/// Error types for the turn controller.
pub mod error;
/// The turn controller and its command handlers.
pub mod game;

/// Re-export command parsing types.
pub use command::{Tokens, Verb, suggest_verb};
/// Re-export configuration types.
pub use config::GameConfig;
/// Re-export console types.
pub use console::{Console, LineConsole};
/// Re-export error types.
pub use error::{GameError, GameResult};
/// Re-export the turn controller.
pub use game::{Game, TurnOutcome};
