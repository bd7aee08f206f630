use std::fmt;
use std::rc::Rc;

use crate::direction::Direction;
use crate::location::{Location, LocationId};

/// Predicate deciding whether an exit can be used right now.
///
/// It receives the location that owns the exit, so it can look at that
/// location's items (an obstacle lying in the way, say).
pub type ExitCondition = Rc<dyn Fn(&Location) -> bool>;

/// A directed edge from one location to another.
#[derive(Clone)]
pub struct Exit {
    direction: Direction,
    target: LocationId,
    condition: Option<ExitCondition>,
    blocked_message: Option<String>,
}

impl Exit {
    pub(crate) fn new(
        direction: Direction,
        target: LocationId,
        condition: Option<ExitCondition>,
        blocked_message: Option<String>,
    ) -> Self {
        Self {
            direction,
            target,
            condition,
            blocked_message,
        }
    }

    /// The direction this exit points in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The destination location.
    pub fn target(&self) -> LocationId {
        self.target
    }

    /// Evaluate the exit's condition against its owning location.
    ///
    /// The condition runs on every call; its answer is never cached.
    pub fn is_open(&self, here: &Location) -> bool {
        self.condition.as_ref().is_none_or(|cond| cond(here))
    }

    /// Whether the exit has a condition at all.
    pub fn is_conditional(&self) -> bool {
        self.condition.is_some()
    }

    /// Custom text shown when the condition fails.
    pub fn blocked_message(&self) -> Option<&str> {
        self.blocked_message.as_deref()
    }
}

impl fmt::Debug for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exit")
            .field("direction", &self.direction)
            .field("target", &self.target)
            .field("conditional", &self.is_conditional())
            .field("blocked_message", &self.blocked_message)
            .finish()
    }
}
