//! Core types for Lantern: the location graph, inventories, and the world builder.
//!
//! A [`World`] is an arena of [`Location`]s addressed by [`LocationId`]. Worlds
//! are declared through [`WorldBuilder`], which lets exits name locations that
//! have not been declared yet and resolves every reference in a second pass.

/// Attack handlers and the context they run in.
pub mod attack;
/// Fluent world construction with deferred exit targets.
pub mod builder;
/// Direction symbols used by exits.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Directed, conditionally-enabled edges between locations.
pub mod exit;
/// Per-turn control flow signals.
pub mod flow;
/// The inventory capability shared by locations and players.
pub mod inventory;
/// JSON world files compiled through the builder.
pub mod loader;
/// Locations (nodes of the world graph).
pub mod location;
/// The player entity.
pub mod player;
/// Buffered output lines produced during a turn.
pub mod transcript;
/// The world arena.
pub mod world;

/// Re-export attack handler types.
pub use attack::{AttackContext, AttackHandler};
/// Re-export world builder types.
pub use builder::{ExitBuilder, ExitDraft, LocationBuilder, WorldBuilder};
/// Re-export the direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export exit types.
pub use exit::{Exit, ExitCondition};
/// Re-export turn control flow types.
pub use flow::{Interrupt, TurnResult};
/// Re-export inventory types.
pub use inventory::{Holder, Inventory, ItemTag, indefinite_article};
/// Re-export location types.
pub use location::{Location, LocationId};
/// Re-export the player.
pub use player::Player;
/// Re-export the output buffer.
pub use transcript::Transcript;
/// Re-export world model types.
pub use world::{BuildWarning, World};
