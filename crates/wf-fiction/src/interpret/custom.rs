//! Commands declared by the entities the player can see.

use wf_core::{CommandBearer, CommandHelp, CustomCommand, Examinable, World};

use super::{Context, Interpreter};
use crate::command::Command;

/// Commands of every currently visible command bearer: the player, the
/// room, the region, the overworld, and the visible items, characters and
/// exits around the player.
fn available_commands(world: &World) -> Vec<&CustomCommand> {
    let mut commands: Vec<&CustomCommand> = Vec::new();
    commands.extend(world.player.commands());
    commands.extend(
        world
            .player
            .items()
            .iter()
            .filter(|i| i.is_player_visible())
            .flat_map(|i| i.commands()),
    );

    if let Some(room) = world.current_room() {
        commands.extend(room.commands());
        commands.extend(
            room.items()
                .iter()
                .filter(|i| i.is_player_visible())
                .flat_map(|i| i.commands()),
        );
        commands.extend(
            room.characters()
                .iter()
                .filter(|c| c.is_player_visible())
                .flat_map(|c| c.commands()),
        );
        commands.extend(
            room.exits()
                .iter()
                .filter(|e| e.is_player_visible())
                .flat_map(|e| e.commands()),
        );
    }

    if let Some(region) = world.current_region() {
        commands.extend(region.commands());
    }
    commands.extend(world.overworld.commands());
    commands
}

/// Matches input against the text of commands declared on visible entities.
///
/// An exact match (ignoring case) wins. Failing that, input that starts with
/// a command's text passes the remaining words as arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomInterpreter;

impl Interpreter for CustomInterpreter {
    fn interpret(&self, input: &str, context: &Context<'_>) -> Option<Command> {
        let commands = available_commands(context.world);

        if let Some(command) = commands.iter().find(|c| c.matches(input)) {
            return Some(Command::Custom {
                command: (*command).clone(),
                args: Vec::new(),
            });
        }

        commands.iter().find_map(|c| {
            c.arguments(input).map(|args| Command::Custom {
                command: (*c).clone(),
                args,
            })
        })
    }

    fn supported_commands(&self) -> Vec<CommandHelp> {
        Vec::new()
    }

    fn contextual_commands(&self, context: &Context<'_>) -> Vec<CommandHelp> {
        available_commands(context.world)
            .into_iter()
            .filter(|c| c.is_player_visible)
            .map(|c| c.help.clone())
            .collect()
    }
}
