//! Fluent world construction.
//!
//! Locations are declared by key, and exits name their destination by key
//! too. Nothing is resolved while declaring, so a location may point at one
//! that is declared later (or at one that points back at it).
//! [`WorldBuilder::build`] resolves every key into a [`LocationId`] in one
//! pass and refuses to produce a world with dangling references.
//!
//! ```
//! use lantern_core::{Direction, Holder, WorldBuilder};
//!
//! let mut builder = WorldBuilder::new();
//! builder
//!     .location("clearing")
//!     .name("Clearing")
//!     .exit(Direction::North)
//!     .to("forest");
//! builder
//!     .location("forest")
//!     .name("Forest")
//!     .item("twig")
//!     .exit(Direction::South)
//!     .to("clearing")
//!     .when(|here| !here.has_item("bramble"));
//!
//! let world = builder.build().unwrap();
//! assert_eq!(world.len(), 2);
//! ```

use std::collections::{HashMap, HashSet};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::attack::{AttackContext, AttackHandler};
use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::exit::{Exit, ExitCondition};
use crate::flow::TurnResult;
use crate::inventory::{Inventory, ItemTag};
use crate::location::{Location, LocationId};
use crate::world::{BuildWarning, World};

/// Collects location declarations and builds a [`World`] from them.
#[derive(Default)]
pub struct WorldBuilder {
    title: Option<String>,
    start: Option<String>,
    locations: Vec<LocationBuilder>,
    by_key: HashMap<String, usize>,
}

impl WorldBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the world's title.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Designate the start location. Defaults to the first one declared.
    pub fn start(&mut self, key: impl Into<String>) -> &mut Self {
        self.start = Some(key.into());
        self
    }

    /// Declare a location, or reopen one declared earlier under the same key.
    pub fn location(&mut self, key: impl Into<String>) -> &mut LocationBuilder {
        let key = key.into();
        let index = match self.by_key.get(&key) {
            Some(&index) => index,
            None => {
                let index = self.locations.len();
                self.by_key.insert(key.clone(), index);
                self.locations.push(LocationBuilder::new(key));
                index
            }
        };
        &mut self.locations[index]
    }

    /// Resolve every exit target and produce the world.
    pub fn build(self) -> WorldResult<World> {
        if self.locations.is_empty() {
            return Err(WorldError::EmptyWorld);
        }

        let start = match &self.start {
            Some(key) => self
                .by_key
                .get(key)
                .copied()
                .map(LocationId)
                .ok_or_else(|| WorldError::UnknownStart(key.clone()))?,
            None => LocationId(0),
        };

        let mut warnings = Vec::new();
        let mut locations = Vec::with_capacity(self.locations.len());
        for draft in self.locations {
            let mut seen = HashSet::new();
            let mut exits = Vec::with_capacity(draft.exits.len());
            for pending in draft.exits {
                let target = self.by_key.get(&pending.target).copied().ok_or_else(|| {
                    WorldError::UnknownTarget {
                        from: draft.key.clone(),
                        direction: pending.direction,
                        target: pending.target.clone(),
                    }
                })?;
                if !seen.insert(pending.direction) {
                    warn!(
                        location = %draft.key,
                        direction = %pending.direction,
                        "duplicate exit direction; only the first is reachable"
                    );
                    warnings.push(BuildWarning::DuplicateExit {
                        location: draft.key.clone(),
                        direction: pending.direction,
                    });
                }
                exits.push(Exit::new(
                    pending.direction,
                    LocationId(target),
                    pending.condition,
                    pending.blocked_message,
                ));
            }

            let name = draft.name.unwrap_or_else(|| draft.key.clone());
            locations.push(Location::new(
                draft.key,
                name,
                draft.description,
                exits,
                draft.items,
                draft.attack,
            ));
        }

        debug!(locations = locations.len(), start = %start, "world built");
        Ok(World::new(self.title, locations, start, warnings))
    }
}

struct PendingExit {
    direction: Direction,
    target: String,
    condition: Option<ExitCondition>,
    blocked_message: Option<String>,
}

/// Declaration of a single location.
pub struct LocationBuilder {
    key: String,
    name: Option<String>,
    description: String,
    items: Inventory,
    exits: Vec<PendingExit>,
    attack: Option<AttackHandler>,
}

impl LocationBuilder {
    fn new(key: String) -> Self {
        Self {
            key,
            name: None,
            description: String::new(),
            items: Inventory::new(),
            exits: Vec::new(),
            attack: None,
        }
    }

    /// Set the display name. Defaults to the key.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    pub fn description(&mut self, text: impl Into<String>) -> &mut Self {
        self.description = text.into();
        self
    }

    /// Place an item here. May be called repeatedly.
    pub fn item(&mut self, tag: impl Into<ItemTag>) -> &mut Self {
        self.items.push(tag);
        self
    }

    /// Install the attack handler. It is stored, not run.
    pub fn attack(
        &mut self,
        handler: impl Fn(&mut AttackContext<'_>) -> TurnResult + 'static,
    ) -> &mut Self {
        self.attack = Some(Rc::new(handler));
        self
    }

    /// Start declaring an exit. Must be finished with [`ExitBuilder::to`].
    pub fn exit(&mut self, direction: Direction) -> ExitBuilder<'_> {
        ExitBuilder {
            location: self,
            direction,
        }
    }
}

/// An exit with a direction but no destination yet.
#[must_use = "an exit is only added once `to` is called"]
pub struct ExitBuilder<'a> {
    location: &'a mut LocationBuilder,
    direction: Direction,
}

impl<'a> ExitBuilder<'a> {
    /// Set the destination key and add the exit to its location.
    ///
    /// The key is resolved by [`WorldBuilder::build`], so it may name a
    /// location that has not been declared yet.
    pub fn to(self, target: impl Into<String>) -> ExitDraft<'a> {
        let index = self.location.exits.len();
        self.location.exits.push(PendingExit {
            direction: self.direction,
            target: target.into(),
            condition: None,
            blocked_message: None,
        });
        ExitDraft {
            location: self.location,
            index,
        }
    }
}

/// An exit that has been added; its condition may still be set.
///
/// Dereferences to the owning [`LocationBuilder`] so a declaration chain can
/// carry on after the exit.
pub struct ExitDraft<'a> {
    location: &'a mut LocationBuilder,
    index: usize,
}

impl<'a> ExitDraft<'a> {
    /// Only allow passage while `predicate` holds for the owning location.
    pub fn when(self, predicate: impl Fn(&Location) -> bool + 'static) -> Self {
        self.location.exits[self.index].condition = Some(Rc::new(predicate));
        self
    }

    /// Text shown instead of the generic refusal when the exit is closed.
    pub fn otherwise(self, message: impl Into<String>) -> Self {
        self.location.exits[self.index].blocked_message = Some(message.into());
        self
    }

    /// Return to the owning location's builder.
    pub fn done(self) -> &'a mut LocationBuilder {
        self.location
    }
}

impl Deref for ExitDraft<'_> {
    type Target = LocationBuilder;

    fn deref(&self) -> &LocationBuilder {
        self.location
    }
}

impl DerefMut for ExitDraft<'_> {
    fn deref_mut(&mut self) -> &mut LocationBuilder {
        self.location
    }
}
