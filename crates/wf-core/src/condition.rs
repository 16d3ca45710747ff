//! Predicates over world state, and descriptions that depend on them.

use crate::direction::Direction;
use crate::world::World;

/// A condition that can be evaluated against the world.
///
/// Conditions name the things they depend on rather than capturing them, so
/// evaluating one never observes anything the author did not ask about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Condition {
    /// Check if the player carries an item.
    PlayerHasItem {
        /// Item name.
        item: String,
    },
    /// Check if the player is standing in a room.
    PlayerInRoom {
        /// Room name.
        room: String,
    },
    /// Check if a room has been visited.
    RoomVisited {
        /// Room name.
        room: String,
    },
    /// Check if a room's exit is locked.
    ExitLocked {
        /// Room name.
        room: String,
        /// Which exit.
        direction: Direction,
    },
    /// Check if a character is alive.
    CharacterAlive {
        /// Character name.
        character: String,
    },
    /// Check if the player has a knowledge flag set.
    Knowledge {
        /// Knowledge key.
        key: String,
    },
    /// Logical NOT.
    Not(Box<Condition>),
    /// Logical AND.
    And(Vec<Condition>),
    /// Logical OR.
    Or(Vec<Condition>),
    /// Always true.
    #[default]
    Always,
}

impl Condition {
    /// Evaluate the condition against the current state.
    pub fn evaluate(&self, world: &World) -> bool {
        match self {
            Condition::PlayerHasItem { item } => world.player.has_item(item),
            Condition::PlayerInRoom { room } => world
                .current_room()
                .is_some_and(|r| r.identifier.matches(room)),
            Condition::RoomVisited { room } => {
                world.find_room(room).is_some_and(|r| r.has_been_visited)
            }
            Condition::ExitLocked { room, direction } => world
                .find_room(room)
                .and_then(|r| r.find_exit(*direction))
                .is_some_and(|e| e.is_locked()),
            Condition::CharacterAlive { character } => world
                .find_character_anywhere(character)
                .is_some_and(|c| c.is_alive),
            Condition::Knowledge { key } => world.player.has_knowledge(key),
            Condition::Not(inner) => !inner.evaluate(world),
            Condition::And(conditions) => conditions.iter().all(|c| c.evaluate(world)),
            Condition::Or(conditions) => conditions.iter().any(|c| c.evaluate(world)),
            Condition::Always => true,
        }
    }
}

/// Text describing an entity, optionally chosen by a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// Fixed text.
    Static(String),
    /// Text that depends on the world.
    Conditional {
        /// The deciding condition.
        condition: Condition,
        /// Text while the condition holds.
        when_true: String,
        /// Text otherwise.
        when_false: String,
    },
}

impl Description {
    /// Create a conditional description.
    pub fn conditional(
        condition: Condition,
        when_true: impl Into<String>,
        when_false: impl Into<String>,
    ) -> Self {
        Self::Conditional {
            condition,
            when_true: when_true.into(),
            when_false: when_false.into(),
        }
    }

    /// Produce the text for the current world.
    pub fn render(&self, world: &World) -> String {
        match self {
            Description::Static(text) => text.clone(),
            Description::Conditional {
                condition,
                when_true,
                when_false,
            } => {
                if condition.evaluate(world) {
                    when_true.clone()
                } else {
                    when_false.clone()
                }
            }
        }
    }
}

impl Default for Description {
    fn default() -> Self {
        Self::Static(String::new())
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Self::Static(text.to_string())
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Self::Static(text)
    }
}
