use std::rc::Rc;

use crate::flow::TurnResult;
use crate::inventory::ItemTag;
use crate::location::Location;
use crate::transcript::Transcript;

/// Location-specific reaction to the `attack` verb.
///
/// The handler may report through [`AttackContext::say`], change the location
/// (remove a defeated obstacle, for instance), and end the turn or the session
/// by returning an [`Interrupt`](crate::Interrupt).
pub type AttackHandler = Rc<dyn Fn(&mut AttackContext<'_>) -> TurnResult>;

/// Everything an attack handler may see or touch.
pub struct AttackContext<'a> {
    location: &'a mut Location,
    target: &'a str,
    instrument: Option<&'a ItemTag>,
    transcript: &'a mut Transcript,
}

impl<'a> AttackContext<'a> {
    /// Bundle the pieces of an attack.
    pub fn new(
        location: &'a mut Location,
        target: &'a str,
        instrument: Option<&'a ItemTag>,
        transcript: &'a mut Transcript,
    ) -> Self {
        Self {
            location,
            target,
            instrument,
            transcript,
        }
    }

    /// The word the player used for the target.
    pub fn target(&self) -> &'a str {
        self.target
    }

    /// Case-insensitive comparison of the target against a tag.
    pub fn target_is(&self, tag: &str) -> bool {
        ItemTag::new(self.target) == ItemTag::new(tag)
    }

    /// The item the player attacks with, if one was named.
    ///
    /// The player is known to carry it.
    pub fn instrument(&self) -> Option<&'a ItemTag> {
        self.instrument
    }

    /// The location where the attack happens.
    pub fn location(&self) -> &Location {
        &*self.location
    }

    /// Mutable access to the location where the attack happens.
    pub fn location_mut(&mut self) -> &mut Location {
        &mut *self.location
    }

    /// Report a line to the player.
    pub fn say(&mut self, line: impl Into<String>) {
        self.transcript.say(line);
    }
}
