//! Per-variant execution of commands.

use tracing::debug;
use wf_core::{
    Direction, Examinable, Identifier, Interaction, InteractionEffect, InteractionResult, Reaction,
    World,
};

use super::{ConversationCommand, FrameCommand, GameCommand, GlobalCommand, ItemRef, Target};
use crate::game::{DisplayMode, Game};

const NO_ROOM: &str = "You are nowhere.";

pub(super) fn global(command: GlobalCommand, game: &mut Game) -> Reaction {
    match command {
        GlobalCommand::About => game.show_overlay(DisplayMode::About),
        GlobalCommand::Help => game.show_overlay(DisplayMode::Help),
        GlobalCommand::Map => game.show_overlay(DisplayMode::Map),
        GlobalCommand::Exit => {
            game.exit();
            Reaction::internal("Goodbye.")
        }
        GlobalCommand::New => match game.restart() {
            Ok(()) => Reaction::internal("A new game begins."),
            Err(e) => Reaction::error(e.to_string()),
        },
    }
}

pub(super) fn frame(command: FrameCommand, game: &mut Game) -> Reaction {
    let config = game.config_mut();
    let message = match command {
        FrameCommand::CommandsOn => {
            config.show_command_list = true;
            "Commands shown."
        }
        FrameCommand::CommandsOff => {
            config.show_command_list = false;
            "Commands hidden."
        }
        FrameCommand::KeyOn => {
            config.show_key = true;
            "Key shown."
        }
        FrameCommand::KeyOff => {
            config.show_key = false;
            "Key hidden."
        }
    };
    Reaction::internal(message)
}

pub(super) fn conversation(command: ConversationCommand, game: &mut Game) -> Reaction {
    let result = match command {
        ConversationCommand::Next => game.advance_conversation(),
        ConversationCommand::Respond(index) => game.respond(index),
        ConversationCommand::End => game
            .end_conversation()
            .map(|name| Reaction::internal(format!("You stop talking to {name}."))),
    };
    result.unwrap_or_else(|e| Reaction::error(e.to_string()))
}

pub(super) fn world_action(command: &GameCommand, game: &mut Game) -> Reaction {
    debug!(?command, "executing");
    match command {
        GameCommand::Talk(name) => game.start_conversation(name),
        GameCommand::Unactionable(reason) => Reaction::error(reason.clone()),
        GameCommand::Move(direction) => travel(game.world_mut(), *direction),
        GameCommand::Examine(target) => examine(game.world(), target),
        GameCommand::Take(name) => take(game.world_mut(), name),
        GameCommand::TakeAll => take_all(game.world_mut()),
        GameCommand::Drop(name) => drop_item(game.world_mut(), name),
        GameCommand::UseOn { item, target } => use_on(game.world_mut(), item, target),
    }
}

fn travel(world: &mut World, direction: Direction) -> Reaction {
    let Some(room) = world.current_room() else {
        return Reaction::error(NO_ROOM);
    };

    match room.find_exit(direction) {
        None => return Reaction::error(format!("There is no exit to the {direction}.")),
        Some(exit) if exit.is_locked() => {
            return Reaction::error(format!("The {direction} exit is locked."));
        }
        Some(_) => {}
    }

    let moved = world
        .current_region_mut()
        .is_some_and(|region| region.travel(direction));
    if moved {
        Reaction::ok(format!("You move {direction}."))
    } else {
        Reaction::error(format!("You cannot move {direction}."))
    }
}

fn examine(world: &World, target: &Target) -> Reaction {
    let text = match target {
        Target::PlayerItem(name) => world.player.find_visible_item(name.name()).map(|i| i.examine(world)),
        Target::RoomItem(name) => world
            .current_room()
            .and_then(|r| r.find_visible_item(name.name()))
            .map(|i| i.examine(world)),
        Target::Character(name) => world
            .current_room()
            .and_then(|r| r.find_character(name.name()))
            .map(|c| c.examine(world)),
        Target::Exit(direction) => world
            .current_room()
            .and_then(|r| r.find_exit(*direction))
            .map(|e| e.examine(world)),
        Target::Player => Some(world.player.examine(world)),
        Target::Room => world.current_room().map(|r| r.examine(world)),
        Target::Region => world.current_region().map(|r| r.examine(world)),
        Target::Overworld => Some(world.overworld.examine(world)),
    };

    match text {
        Some(text) => Reaction::ok(text),
        None => Reaction::error(format!("There is no {target} here.")),
    }
}

fn take(world: &mut World, name: &Identifier) -> Reaction {
    let Some(room) = world.current_room_mut() else {
        return Reaction::error(NO_ROOM);
    };

    if let Some(item) = room.take_item(name.name()) {
        let message = format!("Took {}.", item.identifier);
        world.player.add_item(item);
        return Reaction::ok(message);
    }
    if room.find_visible_item(name.name()).is_some() {
        Reaction::error(format!("You cannot take {name}."))
    } else {
        Reaction::error(format!("There is no {name} here."))
    }
}

fn take_all(world: &mut World) -> Reaction {
    let Some(room) = world.current_room_mut() else {
        return Reaction::error(NO_ROOM);
    };

    let names: Vec<String> = room
        .items()
        .iter()
        .filter(|i| i.is_takeable && i.is_player_visible)
        .map(|i| i.identifier.name().to_string())
        .collect();
    if names.is_empty() {
        return Reaction::error(format!("There is nothing to take in {}.", room.identifier));
    }

    let taken: Vec<_> = names.iter().filter_map(|n| room.take_item(n)).collect();
    for item in taken {
        world.player.add_item(item);
    }
    Reaction::ok(format!("Took {}.", names.join(", ")))
}

fn drop_item(world: &mut World, name: &Identifier) -> Reaction {
    if world.current_room().is_none() {
        return Reaction::error(NO_ROOM);
    }
    let Some(item) = world.player.remove_visible_item(name.name()) else {
        return Reaction::error(format!("You do not have {name}."));
    };

    let message = format!("Dropped {}.", item.identifier);
    if let Some(room) = world.current_room_mut() {
        room.add_item(item);
    }
    Reaction::ok(message)
}

fn interaction_of(world: &World, target: &Target) -> Option<Interaction> {
    let room = world.current_room();
    match target {
        Target::PlayerItem(name) => world
            .player
            .find_visible_item(name.name())
            .and_then(|i| i.interaction.clone()),
        Target::RoomItem(name) => room
            .and_then(|r| r.find_visible_item(name.name()))
            .and_then(|i| i.interaction.clone()),
        Target::Character(name) => room
            .and_then(|r| r.find_character(name.name()))
            .and_then(|c| c.interaction.clone()),
        Target::Exit(direction) => room
            .and_then(|r| r.find_exit(*direction))
            .and_then(|e| e.interaction.clone()),
        Target::Player => world.player.interaction.clone(),
        Target::Room => room.and_then(|r| r.interaction.clone()),
        Target::Region | Target::Overworld => None,
    }
}

fn use_on(world: &mut World, item: &ItemRef, target: &Target) -> Reaction {
    let used = match item {
        ItemRef::Player(name) => world.player.find_visible_item(name.name()).cloned(),
        ItemRef::Room(name) => world
            .current_room()
            .and_then(|r| r.find_visible_item(name.name()))
            .cloned(),
    };
    let Some(used) = used else {
        return Reaction::error(format!("There is no {} to use.", item.identifier()));
    };

    let result = match interaction_of(world, target) {
        Some(interaction) => interaction.interact(&used, world),
        None => InteractionResult::no_effect(),
    };
    debug!(item = %used.identifier, %target, effect = ?result.effect, "used item");

    match result.effect {
        InteractionEffect::NoEffect => Reaction::error(result.description),
        InteractionEffect::SelfContained => Reaction::ok(result.description),
        InteractionEffect::ItemUsedUp => {
            remove_item(world, item);
            Reaction::ok(result.description)
        }
        InteractionEffect::TargetUsedUp => {
            remove_target(world, target);
            Reaction::ok(result.description)
        }
        InteractionEffect::Fatal => {
            world.player.kill();
            Reaction::fatal(result.description)
        }
    }
}

fn remove_item(world: &mut World, item: &ItemRef) {
    match item {
        ItemRef::Player(name) => {
            world.player.remove_visible_item(name.name());
        }
        ItemRef::Room(name) => {
            if let Some(room) = world.current_room_mut() {
                room.remove_visible_item(name.name());
            }
        }
    }
}

fn remove_target(world: &mut World, target: &Target) {
    match target {
        Target::PlayerItem(name) => {
            world.player.remove_visible_item(name.name());
        }
        Target::RoomItem(name) => {
            if let Some(room) = world.current_room_mut() {
                room.remove_visible_item(name.name());
            }
        }
        Target::Character(name) => {
            if let Some(room) = world.current_room_mut() {
                room.remove_character(name.name());
            }
        }
        Target::Exit(_) | Target::Player | Target::Room | Target::Region | Target::Overworld => {
            debug!(%target, "target cannot be used up");
        }
    }
}
