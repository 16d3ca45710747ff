//! Core types for Wayfarer: rooms, regions, characters, items, and
//! conversations.
//!
//! Everything here is plain data plus the operations that keep it
//! consistent. A [`World`] is built programmatically before play starts and
//! is then mutated only by the commands of the fiction engine.

/// Non-player and player characters.
pub mod character;
/// Conditions and the descriptions they drive.
pub mod condition;
/// Branching dialogue.
pub mod conversation;
/// Commands attached to entities.
pub mod custom;
/// The six directions of travel.
pub mod direction;
/// The examinable capability shared by entities.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Case-insensitive names.
pub mod identifier;
/// Using items on things.
pub mod interaction;
/// Items.
pub mod item;
/// Outcomes of executing commands.
pub mod reaction;
/// Rooms, exits, regions, and the overworld.
pub mod spatial;
/// The world aggregate.
pub mod world;

/// Re-export character types.
pub use character::{NonPlayableCharacter, PlayableCharacter};
/// Re-export condition types.
pub use condition::{Condition, Description};
/// Re-export conversation types.
pub use conversation::{
    Conversation, Instruction, LogEntry, Paragraph, ParagraphAction, Participant, PlayHead,
    Response, Step,
};
/// Re-export custom command types.
pub use custom::{CommandBearer, CommandHandler, CommandHelp, CustomCommand};
pub use direction::Direction;
pub use entity::Examinable;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
pub use identifier::Identifier;
/// Re-export interaction types.
pub use interaction::{Interaction, InteractionEffect, InteractionHandler, InteractionResult};
pub use item::Item;
/// Re-export reaction types.
pub use reaction::{Reaction, ReactionKind};
/// Re-export spatial types.
pub use spatial::{Exit, Overworld, Point3D, Region, Room, ViewPoint};
pub use world::World;
