//! The world played when no world file is given.

use lantern_core::{Direction, Holder, Interrupt, World, WorldBuilder, WorldResult};

/// Build the demo world: a clearing, a forest with a boulder in the way, and
/// a cave with a troll.
pub fn world() -> WorldResult<World> {
    let mut b = WorldBuilder::new();
    b.title("The Lantern Woods");

    b.location("clearing")
        .name("Clearing")
        .description("A sunlit clearing ringed by birches. A trail leads north.")
        .item("twig")
        .item("hammer")
        .exit(Direction::North)
        .to("forest");

    b.location("forest")
        .name("Forest")
        .description("Tall pines crowd a narrow trail that bends east.")
        .item("boulder")
        .exit(Direction::South)
        .to("clearing")
        .exit(Direction::East)
        .to("cave")
        .when(|here| !here.has_item("boulder"))
        .otherwise("A boulder blocks the trail east.")
        .done()
        .attack(|ctx| {
            if !ctx.target_is("boulder") || !ctx.location().has_item("boulder") {
                ctx.say("You flail at the trees. They do not notice.");
                return Ok(());
            }
            match ctx.instrument().map(|t| t.as_str()) {
                Some("hammer") => {
                    ctx.location_mut().remove_item("boulder");
                    ctx.say("You smash the boulder to gravel. The way east is clear.");
                }
                Some(_) => ctx.say("That won't make a dent."),
                None => ctx.say("Your fists are no match for a boulder."),
            }
            Ok(())
        });

    b.location("cave")
        .name("Cave")
        .description("A damp cave. Something large breathes in the dark.")
        .item("troll")
        .exit(Direction::West)
        .to("forest")
        .attack(|ctx| {
            if !ctx.target_is("troll") || !ctx.location().has_item("troll") {
                ctx.say("You swing at shadows.");
                return Ok(());
            }
            match ctx.instrument().map(|t| t.as_str()) {
                Some("hammer") => {
                    ctx.location_mut().remove_item("troll");
                    ctx.say("One blow of the hammer and the troll flees. You win!");
                    Err(Interrupt::Quit)
                }
                Some("twig") => {
                    ctx.say("The troll laughs at your twig.");
                    Ok(())
                }
                _ => {
                    ctx.say("The troll swats you back out of the cave.");
                    Err(Interrupt::AbortTurn)
                }
            }
        });

    b.build()
}

#[cfg(test)]
mod tests {
    use lantern_core::Player;
    use lantern_game::{Game, GameConfig, TurnOutcome};

    use super::*;

    #[test]
    fn demo_world_builds_cleanly() {
        let world = world().unwrap();
        assert_eq!(world.len(), 3);
        assert!(world.warnings().is_empty());
        assert_eq!(world[world.start()].name(), "Clearing");
        assert_eq!(world.title(), Some("The Lantern Woods"));
    }

    fn game() -> Game {
        let config = GameConfig::default().with_banner(false);
        Game::new(world().unwrap(), Player::carrying(["hammer"]), config)
    }

    #[test]
    fn troll_swats_unarmed_attacks_and_turn_ends() {
        let mut game = game();
        let cave = game.world().find_by_key("cave").unwrap();
        for line in ["go north", "attack boulder with hammer", "go east"] {
            assert_eq!(game.turn(line), TurnOutcome::Completed, "{line}");
        }
        assert_eq!(game.current(), cave);
        game.take_output();

        assert_eq!(game.turn("attack troll"), TurnOutcome::Aborted);
        assert_eq!(
            game.take_output(),
            ["The troll swats you back out of the cave."]
        );
        assert!(!game.is_finished());
        assert!(game.current_location().has_item("troll"));

        assert_eq!(game.turn("attack troll with hammer"), TurnOutcome::Quit);
        assert!(game.take_output()[0].ends_with("You win!"));
        assert!(game.is_finished());
    }

    #[test]
    fn boulder_blocks_the_cave() {
        let mut world = world().unwrap();
        let forest = world.find_by_key("forest").unwrap();
        let east = world[forest].exit_towards(Direction::East).unwrap().clone();
        assert!(!east.is_open(&world[forest]));
        world[forest].remove_item("boulder");
        assert!(east.is_open(&world[forest]));
    }
}
