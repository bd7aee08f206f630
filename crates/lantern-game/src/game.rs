//! The turn controller.

use lantern_core::{
    AttackContext, Direction, Holder, Interrupt, ItemTag, Location, LocationId, Player,
    Transcript, TurnResult, World,
};
use tracing::{debug, info};

use crate::command::{Tokens, Verb, suggest_verb};
use crate::config::GameConfig;
use crate::console::Console;
use crate::error::GameResult;

const HELP_TEXT: &[&str] = &[
    "Commands:",
    "  go <direction>                 move north, south, east, west, up, down...",
    "  take <item>                    pick something up",
    "  drop <item>                    put something down",
    "  inv                            list what you are carrying",
    "  attack <target> [with <item>]  fight something",
    "  help                           show this summary",
    "  quit                           end the game",
];

/// How a single turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The handler ran to completion.
    Completed,
    /// The handler cut the turn short; the session goes on.
    Aborted,
    /// The session is over.
    Quit,
}

/// A play session: the world, the player, and where the player stands.
pub struct Game {
    world: World,
    player: Player,
    current: LocationId,
    config: GameConfig,
    transcript: Transcript,
    finished: bool,
}

impl Game {
    /// Start a session at the world's start location.
    pub fn new(world: World, player: Player, config: GameConfig) -> Self {
        let current = world.start();
        Self {
            world,
            player,
            current,
            config,
            transcript: Transcript::new(),
            finished: false,
        }
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Where the player currently stands.
    pub fn current(&self) -> LocationId {
        self.current
    }

    /// The location the player currently stands in.
    pub fn current_location(&self) -> &Location {
        &self.world[self.current]
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether the session has been quit.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Output produced since the last call, oldest first.
    pub fn take_output(&mut self) -> Vec<String> {
        self.transcript.drain()
    }

    /// Run turns until the player quits or input runs out.
    pub fn play<C: Console>(&mut self, console: &mut C) -> GameResult<()> {
        info!(start = %self.current_location().key(), "session started");
        if self.config.banner
            && let Some(title) = self.world.title()
        {
            console.write_line(title)?;
            console.write_line("")?;
        }

        while !self.finished {
            self.render();
            self.flush(console)?;
            console.prompt(&self.config.prompt)?;
            let Some(line) = console.read_line()? else {
                debug!("end of input");
                self.finished = true;
                break;
            };
            self.turn(&line);
            self.flush(console)?;
        }

        info!("session ended");
        Ok(())
    }

    /// Describe the current location: name, description, items, and exits.
    pub fn render(&mut self) {
        let here = &self.world[self.current];
        self.transcript.say(format!("== {} ==", here.name()));
        if !here.description().is_empty() {
            self.transcript.say(here.description());
        }
        for item in here.inventory().iter() {
            self.transcript.say(format!("There is a {item} here."));
        }
        if self.config.show_exits && !here.exits().is_empty() {
            let directions: Vec<&str> = here.exits().iter().map(|e| e.direction().name()).collect();
            self.transcript.say(format!("Exits: {}", directions.join(", ")));
        }
    }

    /// Interpret one line of input.
    ///
    /// Once the session has been quit, further lines are ignored.
    pub fn turn(&mut self, line: &str) -> TurnOutcome {
        if self.finished {
            return TurnOutcome::Quit;
        }
        let result = match Tokens::parse(line) {
            Some(tokens) => self.dispatch(&tokens),
            None => Ok(()),
        };
        match result {
            Ok(()) => TurnOutcome::Completed,
            Err(Interrupt::AbortTurn) => TurnOutcome::Aborted,
            Err(Interrupt::Quit) => {
                self.finished = true;
                TurnOutcome::Quit
            }
        }
    }

    fn flush<C: Console>(&mut self, console: &mut C) -> GameResult<()> {
        for line in self.transcript.drain() {
            console.write_line(&line)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, tokens: &Tokens) -> TurnResult {
        let Some(verb) = Verb::parse(tokens.verb()) else {
            self.transcript.say("I don't know how to do that.");
            if self.config.suggest_verbs
                && let Some(suggestion) = suggest_verb(tokens.verb())
            {
                self.transcript.say(format!("(Did you mean \"{suggestion}\"?)"));
            }
            return Ok(());
        };

        match verb {
            Verb::Go => self.go(tokens.arg(0)),
            Verb::Take => self.take(tokens.arg(0)),
            Verb::Drop => self.drop_item(tokens.arg(0)),
            Verb::Inventory => self.inventory(),
            Verb::Attack => self.attack(tokens.arg(0), tokens.arg(1), tokens.arg(2)),
            Verb::Help => self.help(),
            Verb::Quit => self.quit(),
        }
    }

    /// Unwrap an argument, or prompt for it and abort the turn.
    fn require<'t>(&mut self, arg: Option<&'t str>, prompt: &str) -> Result<&'t str, Interrupt> {
        arg.ok_or_else(|| {
            self.transcript.say(prompt);
            Interrupt::AbortTurn
        })
    }

    fn go(&mut self, direction: Option<&str>) -> TurnResult {
        let word = self.require(direction, "Go where?")?;
        let here = &self.world[self.current];
        let exit = Direction::parse(word).and_then(|dir| here.exit_towards(dir));

        let Some(exit) = exit else {
            self.transcript.say("There is nothing in that direction.");
            return Ok(());
        };
        if !exit.is_open(here) {
            let message = exit.blocked_message().unwrap_or("You can't go that way.");
            self.transcript.say(message);
            return Ok(());
        }

        let target = exit.target();
        debug!(
            from = %here.key(),
            to = %self.world[target].key(),
            direction = %exit.direction(),
            "player moved"
        );
        self.current = target;
        Ok(())
    }

    fn take(&mut self, item: Option<&str>) -> TurnResult {
        let word = self.require(item, "Take what?")?;
        let tag = ItemTag::new(word);
        if self.world[self.current].remove_item(tag.as_str()) {
            debug!(item = %tag, "item taken");
            self.transcript.say(format!("You take the {tag}."));
            self.player.add_item(tag);
        } else {
            self.transcript.say(format!("You don't see {} {tag} here.", tag.article()));
        }
        Ok(())
    }

    fn drop_item(&mut self, item: Option<&str>) -> TurnResult {
        let word = self.require(item, "Drop what?")?;
        let tag = ItemTag::new(word);
        if self.player.remove_item(tag.as_str()) {
            debug!(item = %tag, "item dropped");
            self.transcript.say(format!("You drop the {tag}."));
            self.world[self.current].add_item(tag);
        } else {
            self.transcript.say(format!("You don't have {} {tag}.", tag.article()));
        }
        Ok(())
    }

    fn inventory(&mut self) -> TurnResult {
        self.transcript.say("You are carrying:");
        if self.player.inventory().is_empty() {
            self.transcript.say("  (None)");
        }
        for item in self.player.inventory().iter() {
            self.transcript.say(format!("  {item}"));
        }
        Ok(())
    }

    fn attack(
        &mut self,
        target: Option<&str>,
        connector: Option<&str>,
        instrument: Option<&str>,
    ) -> TurnResult {
        let target = self.require(target, "Attack what?")?;
        let instrument = match connector {
            Some(word) if word.eq_ignore_ascii_case("with") => {
                Some(ItemTag::new(self.require(instrument, "Attack with what?")?))
            }
            _ => None,
        };

        if let Some(tool) = &instrument
            && !self.player.has_item(tool.as_str())
        {
            self.transcript.say(format!("You don't have {} {tool}.", tool.article()));
            return Err(Interrupt::AbortTurn);
        }

        let here = &mut self.world[self.current];
        let Some(handler) = here.attack_handler() else {
            self.transcript.say("There is nothing here worth fighting.");
            return Ok(());
        };
        let mut ctx = AttackContext::new(here, target, instrument.as_ref(), &mut self.transcript);
        handler(&mut ctx)
    }

    fn help(&mut self) -> TurnResult {
        for line in HELP_TEXT {
            self.transcript.say(*line);
        }
        Ok(())
    }

    fn quit(&mut self) -> TurnResult {
        self.transcript.say("Goodbye.");
        Err(Interrupt::Quit)
    }
}
