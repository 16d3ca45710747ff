//! The built-in adventure: light the beacon at the top of the lighthouse.

use wf_core::{
    Condition, Conversation, CoreResult, CustomCommand, Description, Direction, Exit, Instruction,
    InteractionEffect, InteractionResult, Item, NonPlayableCharacter, Overworld, Paragraph,
    PlayableCharacter, Reaction, Region, Response, Room, World,
};
use wf_fiction::{EndCheckResult, GameInfo};

/// Knowledge flag set once the beacon is lit.
const BEACON_LIT: &str = "beacon lit";

/// Title information for the adventure.
pub fn info() -> GameInfo {
    GameInfo::new(
        "The Last Keeper",
        "The lighthouse has been dark for a week. Ships are due before dawn.",
        "Wayfarer",
    )
}

/// Build the adventure's world.
pub fn world() -> CoreResult<World> {
    let mut coast = Region::new("Lighthouse Point", "A spit of rock and a tall white tower.");
    coast.add_room(shore(), 0, 0, 0)?;
    coast.add_room(jetty(), 1, 0, 0)?;
    coast.add_room(cottage(), 0, 1, 0)?;
    coast.add_room(lantern_room(), 0, 1, 1)?;

    let mut overworld = Overworld::new("The Coast", "Grey sea in every direction.");
    overworld.add_region(coast)?;

    let player = PlayableCharacter::new("Keeper", "Salt-stained and short on sleep.")
        .with_command(CustomCommand::new(
            "whistle",
            "Whistle a tune, optionally naming it.",
            |_, args| {
                if args.is_empty() {
                    Reaction::ok("You whistle a tuneless sea shanty.")
                } else {
                    Reaction::ok(format!("You whistle \"{}\".", args.join(" ")))
                }
            },
        ));

    Ok(World::new(overworld, player))
}

/// The adventure is won once the beacon burns.
pub fn beacon_lit(world: &World) -> EndCheckResult {
    if world.player.has_knowledge(BEACON_LIT) {
        EndCheckResult::ended(
            "The Beacon Burns",
            "Far out on the water, a ship turns towards home.",
        )
    } else {
        EndCheckResult::not_ended()
    }
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

fn shore() -> Room {
    Room::new(
        "Shore",
        "Shingle crunches underfoot. The tower looms to the north and a jetty runs east.",
    )
    .with_exit(Exit::new(Direction::North))
    .with_exit(Exit::new(Direction::East))
    .with_item(
        Item::new("Driftwood", "A bleached length of wood, light and dry.").with_takeable(true),
    )
}

fn jetty() -> Room {
    Room::new("Jetty", "Planks slick with spray. Nets are piled at the far end.")
        .with_exit(Exit::new(Direction::West))
        .with_item(Item::new("Nets", "Knotted, torn, and smelling of fish."))
        .with_character(
            NonPlayableCharacter::new("Fisher", "An old fisher mending a net.")
                .with_conversation(fisher_conversation()),
        )
}

fn cottage() -> Room {
    Room::new(
        "Cottage",
        Description::conditional(
            Condition::ExitLocked {
                room: "Cottage".to_string(),
                direction: Direction::Up,
            },
            "The keeper's cottage, built into the tower's base. A hatch in the ceiling is locked tight.",
            "The keeper's cottage, built into the tower's base. The hatch in the ceiling stands open.",
        ),
    )
    .with_exit(Exit::new(Direction::South))
    .with_exit(
        Exit::new(Direction::Up)
            .with_locked(true)
            .with_description("An iron hatch with a keyhole.")
            .with_interaction(|item, world| {
                if !item.identifier.matches("key") {
                    return InteractionResult::no_effect();
                }
                match world
                    .current_region_mut()
                    .map(|region| region.unlock_door_pair(Direction::Up))
                {
                    Some(true) => InteractionResult::new(
                        InteractionEffect::SelfContained,
                        "The key grinds round and the hatch swings open.",
                    ),
                    _ => InteractionResult::no_effect(),
                }
            }),
    )
}

fn lantern_room() -> Room {
    Room::new(
        "Lantern Room",
        "Glass on every side and a great brass lamp, cold and dark.",
    )
    .with_exit(Exit::new(Direction::Down).with_locked(true))
    .with_item(Item::new("Lamp", "Its wick is trimmed and its oil is full."))
    .with_command(CustomCommand::new(
        "light lamp",
        "Light the great lamp.",
        |world, _| {
            world.player.set_knowledge(BEACON_LIT, true);
            Reaction::ok("The wick catches and the lens throws light across the sea.")
        },
    ))
}

// ---------------------------------------------------------------------------
// Conversations
// ---------------------------------------------------------------------------

fn fisher_conversation() -> Conversation {
    Conversation::new(vec![
        Paragraph::new("Evening. You'll be the new keeper, then?")
            .with_response(Response::new("I am."))
            .with_response(
                Response::new("Who's asking?").with_instruction(Instruction::ToName("who".into())),
            ),
        Paragraph::new("Then you'll want this. The hatch has been stuck since the old keeper left.")
            .with_name("key")
            .with_instruction(Instruction::End)
            .with_action(|world| {
                world
                    .player
                    .add_item(Item::new("Key", "A heavy iron key, rough with rust."));
            }),
        Paragraph::new("Just someone who'd like to see the light burning again.")
            .with_name("who")
            .with_instruction(Instruction::ToName("key".into())),
    ])
}
