use std::fmt;

use crate::attack::AttackHandler;
use crate::direction::Direction;
use crate::exit::Exit;
use crate::inventory::{Holder, Inventory};

/// Handle of a location inside its [`World`](crate::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub(crate) usize);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the world graph.
///
/// Cloning a location clones its exits and its items; the clone shares
/// nothing mutable with the original.
#[derive(Clone)]
pub struct Location {
    key: String,
    name: String,
    description: String,
    exits: Vec<Exit>,
    items: Inventory,
    attack: Option<AttackHandler>,
}

impl Location {
    pub(crate) fn new(
        key: String,
        name: String,
        description: String,
        exits: Vec<Exit>,
        items: Inventory,
        attack: Option<AttackHandler>,
    ) -> Self {
        Self {
            key,
            name,
            description,
            exits,
            items,
            attack,
        }
    }

    /// The key the location was declared under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Outgoing exits in declaration order.
    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// The first exit pointing in `direction`.
    ///
    /// Later exits with the same direction are unreachable.
    pub fn exit_towards(&self, direction: Direction) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction() == direction)
    }

    /// The location's attack handler, if it has one.
    pub fn attack_handler(&self) -> Option<AttackHandler> {
        self.attack.clone()
    }
}

impl Holder for Location {
    fn inventory(&self) -> &Inventory {
        &self.items
    }

    fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.items
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Location")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("exits", &self.exits)
            .field("items", &self.items)
            .field("attack", &self.attack.is_some())
            .finish()
    }
}
