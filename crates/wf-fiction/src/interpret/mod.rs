//! Interpreters: grammar recognisers that turn raw input into commands.
//!
//! Each interpreter owns one sublanguage and either recognises the input or
//! declines. An [`InterpreterChain`] tries its interpreters in order and the
//! first match wins.

mod conversation;
mod custom;
mod frame;
mod game;
mod global;
mod resolve;

use tracing::debug;
use wf_core::{CommandHelp, Conversation, World};

use crate::command::Command;
use crate::error::{FictionError, FictionResult};

pub use conversation::ConversationInterpreter;
pub use custom::CustomInterpreter;
pub use frame::FrameInterpreter;
pub use game::GameInterpreter;
pub use global::GlobalInterpreter;
pub use resolve::{resolve_item, resolve_target, suggest};

/// What an interpreter may look at while deciding.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// The world.
    pub world: &'a World,
    /// The conversation in progress, if any.
    pub conversation: Option<&'a Conversation>,
}

impl<'a> Context<'a> {
    /// A context with no conversation in progress.
    pub fn new(world: &'a World) -> Self {
        Self {
            world,
            conversation: None,
        }
    }

    /// Set the conversation in progress.
    pub fn with_conversation(mut self, conversation: &'a Conversation) -> Self {
        self.conversation = Some(conversation);
        self
    }
}

/// A recogniser for one sublanguage of player input.
pub trait Interpreter {
    /// Turn input into a command, or decline with `None`.
    fn interpret(&self, input: &str, context: &Context<'_>) -> Option<Command>;

    /// Every command this interpreter understands.
    fn supported_commands(&self) -> Vec<CommandHelp>;

    /// The commands that make sense right now.
    fn contextual_commands(&self, _context: &Context<'_>) -> Vec<CommandHelp> {
        self.supported_commands()
    }
}

/// An ordered list of interpreters. The first to recognise the input wins.
#[derive(Default)]
pub struct InterpreterChain {
    interpreters: Vec<Box<dyn Interpreter>>,
}

impl InterpreterChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interpreter.
    pub fn with(mut self, interpreter: impl Interpreter + 'static) -> Self {
        self.interpreters.push(Box::new(interpreter));
        self
    }

    /// The chain used while exploring: global, frame, game, then custom commands.
    pub fn scene() -> Self {
        Self::new()
            .with(GlobalInterpreter)
            .with(FrameInterpreter)
            .with(GameInterpreter)
            .with(CustomInterpreter)
    }

    /// The chain used mid-conversation. Conversation input comes first and
    /// world actions are unavailable.
    pub fn conversation() -> Self {
        Self::new()
            .with(ConversationInterpreter)
            .with(GlobalInterpreter)
            .with(FrameInterpreter)
    }

    /// Interpret input, failing with [`FictionError::UnknownCommand`] when
    /// every interpreter declines.
    pub fn interpret(&self, input: &str, context: &Context<'_>) -> FictionResult<Command> {
        let command = self
            .interpreters
            .iter()
            .find_map(|interpreter| interpreter.interpret(input, context));

        match command {
            Some(command) => {
                debug!(input, ?command, "interpreted");
                Ok(command)
            }
            None => {
                debug!(input, "no interpreter matched");
                Err(FictionError::UnknownCommand(input.trim().to_string()))
            }
        }
    }

    /// Every command the chain understands.
    pub fn supported_commands(&self) -> Vec<CommandHelp> {
        self.interpreters
            .iter()
            .flat_map(|i| i.supported_commands())
            .collect()
    }

    /// The commands that make sense right now.
    pub fn contextual_commands(&self, context: &Context<'_>) -> Vec<CommandHelp> {
        self.interpreters
            .iter()
            .flat_map(|i| i.contextual_commands(context))
            .collect()
    }
}

/// Split input at the first run of whitespace into a lowercase verb and the
/// trimmed remainder.
pub(crate) fn split_verb(input: &str) -> (String, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((verb, noun)) => (verb.to_lowercase(), noun.trim()),
        None => (input.to_lowercase(), ""),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use wf_core::{
        Direction, Exit, Item, NonPlayableCharacter, Overworld, PlayableCharacter, Region, Room,
        World,
    };

    /// Hall (0,0,0) with an open east exit to Kitchen (1,0,0) and a locked
    /// north exit to Vault (0,1,0).
    pub fn world() -> World {
        let mut region = Region::new("Manor", "A crumbling manor.");
        region
            .add_room(
                Room::new("Hall", "A draughty hall.")
                    .with_exit(Exit::new(Direction::East))
                    .with_exit(Exit::new(Direction::North).with_locked(true))
                    .with_item(Item::new("Lamp", "A brass lamp.").with_takeable(true))
                    .with_item(Item::new("Statue", "Far too heavy."))
                    .with_item(Item::new("Coin", "A hidden coin.").with_visibility(false))
                    .with_character(NonPlayableCharacter::new("Butler", "Stiff and formal.")),
                0,
                0,
                0,
            )
            .unwrap();
        region
            .add_room(
                Room::new("Kitchen", "Pots and pans.").with_exit(Exit::new(Direction::West)),
                1,
                0,
                0,
            )
            .unwrap();
        region
            .add_room(
                Room::new("Vault", "Gold glitters.").with_exit(Exit::new(Direction::South)),
                0,
                1,
                0,
            )
            .unwrap();

        let mut overworld = Overworld::new("Earth", "The whole world.");
        overworld.add_region(region).unwrap();

        let player = PlayableCharacter::new("Ada", "A curious soul.")
            .with_item(Item::new("Key", "A small iron key."));
        World::new(overworld, player)
    }
}
