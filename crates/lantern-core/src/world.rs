use std::fmt;
use std::ops::{Index, IndexMut};

use crate::direction::Direction;
use crate::location::{Location, LocationId};

/// Non-fatal problem noticed while building a world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
    /// A location has more than one exit in the same direction. Only the first
    /// one declared can ever be taken.
    DuplicateExit {
        /// Key of the offending location.
        location: String,
        /// The repeated direction.
        direction: Direction,
    },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateExit {
                location,
                direction,
            } => write!(
                f,
                "\"{location}\" has more than one exit {direction}; only the first is reachable"
            ),
        }
    }
}

/// The world graph. Owns every location; exits refer to each other by
/// [`LocationId`].
///
/// Built once through [`WorldBuilder`](crate::WorldBuilder). Locations are
/// never added or removed afterwards, so ids handed out by a world stay valid
/// for its whole life.
#[derive(Debug, Clone)]
pub struct World {
    title: Option<String>,
    locations: Vec<Location>,
    start: LocationId,
    warnings: Vec<BuildWarning>,
}

impl World {
    pub(crate) fn new(
        title: Option<String>,
        locations: Vec<Location>,
        start: LocationId,
        warnings: Vec<BuildWarning>,
    ) -> Self {
        Self {
            title,
            locations,
            start,
            warnings,
        }
    }

    /// Optional title of the world.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The designated start location.
    pub fn start(&self) -> LocationId {
        self.start
    }

    /// Find a location id by its declaration key.
    pub fn find_by_key(&self, key: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .position(|l| l.key() == key)
            .map(LocationId)
    }

    /// Iterate over all locations with their ids.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, l)| (LocationId(i), l))
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always false for a built world; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Warnings collected during construction.
    pub fn warnings(&self) -> &[BuildWarning] {
        &self.warnings
    }
}

/// Panics if `id` came from a different world.
impl Index<LocationId> for World {
    type Output = Location;

    fn index(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }
}

/// Panics if `id` came from a different world.
impl IndexMut<LocationId> for World {
    fn index_mut(&mut self, id: LocationId) -> &mut Location {
        &mut self.locations[id.0]
    }
}
