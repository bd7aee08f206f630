//! JSON world files.
//!
//! A world file is a declarative description of a world. Loading compiles it
//! through [`WorldBuilder`], so a file gets exactly the same checks as a world
//! declared in code.
//!
//! ```json
//! {
//!   "title": "Tiny",
//!   "start": "hall",
//!   "locations": [
//!     { "id": "hall", "name": "Hall", "items": ["lamp"],
//!       "exits": [{ "direction": "north", "to": "vault", "unless_item": "gate",
//!                   "blocked": "A gate bars the way." }] },
//!     { "id": "vault", "exits": [{ "direction": "s", "to": "hall" }] }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::attack::AttackContext;
use crate::builder::WorldBuilder;
use crate::direction::Direction;
use crate::error::WorldResult;
use crate::flow::{Interrupt, TurnResult};
use crate::inventory::{Holder, ItemTag, indefinite_article};
use crate::world::World;

/// Top level of a world file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldFile {
    /// Optional title shown when the game starts.
    #[serde(default)]
    pub title: Option<String>,
    /// Key of the start location; defaults to the first one listed.
    #[serde(default)]
    pub start: Option<String>,
    /// The locations, in declaration order.
    pub locations: Vec<LocationFile>,
}

/// One location in a world file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationFile {
    /// Unique key other locations use to refer to this one.
    pub id: String,
    /// Display name; defaults to the key.
    #[serde(default)]
    pub name: Option<String>,
    /// Description text.
    #[serde(default)]
    pub description: String,
    /// Items lying here at the start.
    #[serde(default)]
    pub items: Vec<ItemTag>,
    /// Outgoing exits.
    #[serde(default)]
    pub exits: Vec<ExitFile>,
    /// How the location reacts to `attack`.
    #[serde(default)]
    pub attack: Option<AttackRule>,
}

/// One exit in a world file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExitFile {
    /// Direction of travel.
    pub direction: Direction,
    /// Key of the destination.
    pub to: String,
    /// The exit is closed while this item lies in the owning location.
    #[serde(default)]
    pub unless_item: Option<ItemTag>,
    /// The exit is open only while this item lies in the owning location.
    #[serde(default)]
    pub if_item: Option<ItemTag>,
    /// Text shown when the exit is closed.
    #[serde(default)]
    pub blocked: Option<String>,
}

/// Declarative reaction to `attack <target> [with <instrument>]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttackRule {
    /// What has to be attacked.
    pub target: ItemTag,
    /// Instrument the attack needs, if any.
    #[serde(default)]
    pub with: Option<ItemTag>,
    /// Text shown when the attack succeeds.
    pub success: String,
    /// Text shown when the right target is attacked the wrong way.
    #[serde(default)]
    pub failure: Option<String>,
    /// Item removed from the location when the attack succeeds.
    #[serde(default)]
    pub removes: Option<ItemTag>,
    /// Whether a successful attack ends the session.
    #[serde(default)]
    pub ends_game: bool,
}

impl AttackRule {
    fn apply(&self, ctx: &mut AttackContext<'_>) -> TurnResult {
        if !ctx.target_is(self.target.as_str()) {
            let target = ctx.target();
            ctx.say(format!(
                "You don't see {} {target} here.",
                indefinite_article(target)
            ));
            return Ok(());
        }
        if self.with.is_some() && self.with.as_ref() != ctx.instrument() {
            ctx.say(
                self.failure
                    .clone()
                    .unwrap_or_else(|| "That doesn't seem to work.".to_string()),
            );
            return Ok(());
        }
        if let Some(removed) = &self.removes {
            ctx.location_mut().remove_item(removed.as_str());
        }
        ctx.say(self.success.clone());
        if self.ends_game {
            return Err(Interrupt::Quit);
        }
        Ok(())
    }
}

impl WorldFile {
    /// Parse a world file from JSON text.
    pub fn from_json(text: &str) -> WorldResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Compile the file into a world.
    pub fn into_world(self) -> WorldResult<World> {
        let mut builder = WorldBuilder::new();
        if let Some(title) = self.title {
            builder.title(title);
        }
        if let Some(start) = self.start {
            builder.start(start);
        }

        for loc in self.locations {
            let draft = builder.location(loc.id);
            if let Some(name) = loc.name {
                draft.name(name);
            }
            draft.description(loc.description);
            for item in loc.items {
                draft.item(item);
            }
            for exit in loc.exits {
                let mut added = draft.exit(exit.direction).to(exit.to);
                match (exit.unless_item, exit.if_item) {
                    (Some(absent), Some(present)) => {
                        added = added.when(move |here| {
                            !here.has_item(absent.as_str()) && here.has_item(present.as_str())
                        });
                    }
                    (Some(absent), None) => {
                        added = added.when(move |here| !here.has_item(absent.as_str()));
                    }
                    (None, Some(present)) => {
                        added = added.when(move |here| here.has_item(present.as_str()));
                    }
                    (None, None) => {}
                }
                if let Some(message) = exit.blocked {
                    added.otherwise(message);
                }
            }
            if let Some(rule) = loc.attack {
                draft.attack(move |ctx| rule.apply(ctx));
            }
        }

        builder.build()
    }
}

/// Parse and build a world from JSON text.
pub fn from_json(text: &str) -> WorldResult<World> {
    WorldFile::from_json(text)?.into_world()
}

/// Read, parse, and build a world from a JSON file.
pub fn load(path: &Path) -> WorldResult<World> {
    let text = std::fs::read_to_string(path)?;
    let world = from_json(&text)?;
    info!(path = %path.display(), locations = world.len(), "world loaded");
    Ok(world)
}
