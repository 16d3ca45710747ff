//! The commands a player can issue, and how each one is carried out.
//!
//! Interpreters produce a [`Command`]; [`Command::invoke`] executes it
//! against a [`Game`]. The two steps are separate so that interpretation
//! never touches game state.

mod execute;

use std::fmt;

use wf_core::{CustomCommand, Direction, Identifier, Reaction};

use crate::game::Game;

/// Something an examine or use command is aimed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// An item the player carries.
    PlayerItem(Identifier),
    /// An item in the current room.
    RoomItem(Identifier),
    /// A character in the current room.
    Character(Identifier),
    /// An exit of the current room.
    Exit(Direction),
    /// The player.
    Player,
    /// The current room.
    Room,
    /// The current region.
    Region,
    /// The overworld.
    Overworld,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::PlayerItem(id) | Target::RoomItem(id) | Target::Character(id) => {
                write!(f, "{id}")
            }
            Target::Exit(direction) => write!(f, "the {direction} exit"),
            Target::Player => f.write_str("yourself"),
            Target::Room => f.write_str("the room"),
            Target::Region => f.write_str("the region"),
            Target::Overworld => f.write_str("the world"),
        }
    }
}

/// An item named in a use command, and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    /// In the player's inventory.
    Player(Identifier),
    /// In the current room.
    Room(Identifier),
}

impl ItemRef {
    /// The item's name.
    pub fn identifier(&self) -> &Identifier {
        match self {
            ItemRef::Player(id) | ItemRef::Room(id) => id,
        }
    }
}

/// Commands that work the same in every game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalCommand {
    /// Show the about frame.
    About,
    /// Quit without an end frame.
    Exit,
    /// Show the help frame.
    Help,
    /// Show the map frame.
    Map,
    /// Start over from the beginning.
    New,
}

/// Commands that change what frames show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameCommand {
    /// Show the command list.
    CommandsOn,
    /// Hide the command list.
    CommandsOff,
    /// Show the map key.
    KeyOn,
    /// Hide the map key.
    KeyOff,
}

/// Commands that act on the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// Walk through an exit.
    Move(Direction),
    /// Look at something.
    Examine(Target),
    /// Pick up a room item.
    Take(Identifier),
    /// Pick up every visible takeable room item.
    TakeAll,
    /// Put down a carried item.
    Drop(Identifier),
    /// Start a conversation with a character.
    Talk(Identifier),
    /// Use an item on a target.
    UseOn {
        /// The item being used.
        item: ItemRef,
        /// What it is used on.
        target: Target,
    },
    /// The input was understood but cannot be carried out.
    Unactionable(String),
}

/// Commands available while a conversation is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationCommand {
    /// Continue without responding.
    Next,
    /// Pick a response by zero-based index.
    Respond(usize),
    /// Walk away.
    End,
}

/// A fully interpreted player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A global command.
    Global(GlobalCommand),
    /// A display toggle.
    Frame(FrameCommand),
    /// A world action.
    Game(GameCommand),
    /// A conversation move.
    Conversation(ConversationCommand),
    /// A command declared by an entity.
    Custom {
        /// The declared command.
        command: CustomCommand,
        /// Words that followed the command text.
        args: Vec<String>,
    },
}

impl Command {
    /// Carry the command out.
    pub fn invoke(&self, game: &mut Game) -> Reaction {
        match self {
            Command::Global(command) => execute::global(*command, game),
            Command::Frame(command) => execute::frame(*command, game),
            Command::Game(command) => execute::world_action(command, game),
            Command::Conversation(command) => execute::conversation(*command, game),
            Command::Custom { command, args } => command.invoke(game.world_mut(), args),
        }
    }
}

impl From<GlobalCommand> for Command {
    fn from(command: GlobalCommand) -> Self {
        Command::Global(command)
    }
}

impl From<FrameCommand> for Command {
    fn from(command: FrameCommand) -> Self {
        Command::Frame(command)
    }
}

impl From<GameCommand> for Command {
    fn from(command: GameCommand) -> Self {
        Command::Game(command)
    }
}

impl From<ConversationCommand> for Command {
    fn from(command: ConversationCommand) -> Self {
        Command::Conversation(command)
    }
}
