use crate::character::NonPlayableCharacter;
use crate::condition::Description;
use crate::custom::{CommandBearer, CustomCommand};
use crate::direction::Direction;
use crate::entity::Examinable;
use crate::identifier::Identifier;
use crate::interaction::{Interaction, InteractionResult};
use crate::item::{self, Item};
use crate::spatial::Exit;
use crate::world::World;

/// A single location. Holds at most one exit per direction.
#[derive(Debug, Clone)]
pub struct Room {
    /// Room name.
    pub identifier: Identifier,
    /// Room description.
    pub description: Description,
    /// The side the player last came in through.
    pub entered_from: Option<Direction>,
    /// Whether the player has been here.
    pub has_been_visited: bool,
    /// Reaction to items being used on the room itself.
    pub interaction: Option<Interaction>,
    /// Commands available while standing in the room.
    pub commands: Vec<CustomCommand>,
    exits: Vec<Exit>,
    items: Vec<Item>,
    characters: Vec<NonPlayableCharacter>,
}

impl Room {
    /// Create an empty, unvisited room.
    pub fn new(name: impl Into<Identifier>, description: impl Into<Description>) -> Self {
        Self {
            identifier: name.into(),
            description: description.into(),
            entered_from: None,
            has_been_visited: false,
            interaction: None,
            commands: Vec::new(),
            exits: Vec::new(),
            items: Vec::new(),
            characters: Vec::new(),
        }
    }

    /// Add an exit, replacing any exit already on that side.
    pub fn with_exit(mut self, exit: Exit) -> Self {
        self.add_exit(exit);
        self
    }

    /// Add an item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.add_item(item);
        self
    }

    /// Add a character.
    pub fn with_character(mut self, character: NonPlayableCharacter) -> Self {
        self.add_character(character);
        self
    }

    /// Set the interaction.
    pub fn with_interaction(
        mut self,
        handler: impl Fn(&Item, &mut World) -> InteractionResult + 'static,
    ) -> Self {
        self.interaction = Some(Interaction::new(handler));
        self
    }

    /// Add a custom command.
    pub fn with_command(mut self, command: CustomCommand) -> Self {
        self.commands.push(command);
        self
    }

    // -----------------------------------------------------------------------
    // Exits
    // -----------------------------------------------------------------------

    /// Add an exit, replacing any exit already on that side.
    pub fn add_exit(&mut self, exit: Exit) {
        self.exits.retain(|e| e.direction != exit.direction);
        self.exits.push(exit);
    }

    /// All exits.
    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// The exit on the given side, if any.
    pub fn find_exit(&self, direction: Direction) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }

    /// Mutable access to the exit on the given side.
    pub fn find_exit_mut(&mut self, direction: Direction) -> Option<&mut Exit> {
        self.exits.iter_mut().find(|e| e.direction == direction)
    }

    /// Return `true` if an unlocked exit leads out this way.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.find_exit(direction).is_some_and(|e| !e.is_locked())
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// All items, visible or not.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Find an item by name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        item::find(&self.items, name)
    }

    /// Check if an item is here.
    pub fn contains_item(&self, name: &str) -> bool {
        item::position(&self.items, name).is_some()
    }

    /// Put an item in the room.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove an item from the room.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        item::remove(&mut self.items, name)
    }

    /// Find an item the player can see, skipping hidden ones of the same name.
    pub fn find_visible_item(&self, name: &str) -> Option<&Item> {
        item::find_visible(&self.items, name)
    }

    /// Remove an item the player can see.
    pub fn remove_visible_item(&mut self, name: &str) -> Option<Item> {
        item::remove_where(&mut self.items, name, |i| i.is_player_visible)
    }

    /// Remove an item the player can see and pick up.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        item::remove_where(&mut self.items, name, |i| {
            i.is_player_visible && i.is_takeable
        })
    }

    // -----------------------------------------------------------------------
    // Characters
    // -----------------------------------------------------------------------

    /// All characters, visible or not.
    pub fn characters(&self) -> &[NonPlayableCharacter] {
        &self.characters
    }

    /// Find a character by name.
    pub fn find_character(&self, name: &str) -> Option<&NonPlayableCharacter> {
        self.characters.iter().find(|c| c.identifier.matches(name))
    }

    /// Mutable access to a character by name.
    pub fn find_character_mut(&mut self, name: &str) -> Option<&mut NonPlayableCharacter> {
        self.characters.iter_mut().find(|c| c.identifier.matches(name))
    }

    /// Put a character in the room.
    pub fn add_character(&mut self, character: NonPlayableCharacter) {
        self.characters.push(character);
    }

    /// Remove a character from the room.
    pub fn remove_character(&mut self, name: &str) -> Option<NonPlayableCharacter> {
        let pos = self
            .characters
            .iter()
            .position(|c| c.identifier.matches(name))?;
        Some(self.characters.remove(pos))
    }
}

impl Examinable for Room {
    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn description(&self) -> &Description {
        &self.description
    }
}

impl CommandBearer for Room {
    fn commands(&self) -> &[CustomCommand] {
        &self.commands
    }
}
