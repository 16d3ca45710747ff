//! The player and the people they meet.

use std::collections::HashMap;

use crate::condition::Description;
use crate::conversation::Conversation;
use crate::custom::{CommandBearer, CustomCommand};
use crate::entity::Examinable;
use crate::identifier::Identifier;
use crate::interaction::{Interaction, InteractionResult};
use crate::item::{self, Item};
use crate::world::World;

/// The character the player controls.
#[derive(Debug, Clone)]
pub struct PlayableCharacter {
    /// The player's name.
    pub identifier: Identifier,
    /// The player's description.
    pub description: Description,
    /// Whether the player is alive.
    pub is_alive: bool,
    /// Knowledge flags (discovered facts).
    pub knowledge: HashMap<String, bool>,
    /// Reaction to items being used on the player.
    pub interaction: Option<Interaction>,
    /// Commands the player always has.
    pub commands: Vec<CustomCommand>,
    items: Vec<Item>,
}

impl PlayableCharacter {
    /// Create a living player with an empty inventory.
    pub fn new(name: impl Into<Identifier>, description: impl Into<Description>) -> Self {
        Self {
            identifier: name.into(),
            description: description.into(),
            is_alive: true,
            knowledge: HashMap::new(),
            interaction: None,
            commands: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Start with an item in the inventory.
    pub fn with_item(mut self, item: Item) -> Self {
        self.add_item(item);
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

    /// Items in the player's inventory.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Check if the player has an item.
    pub fn has_item(&self, name: &str) -> bool {
        item::position(&self.items, name).is_some()
    }

    /// Find an item in the inventory.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        item::find(&self.items, name)
    }

    /// Add an item to the inventory. Items with the same name stack up
    /// separately.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove an item from the inventory.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        item::remove(&mut self.items, name)
    }

    /// Find a carried item the player can see.
    pub fn find_visible_item(&self, name: &str) -> Option<&Item> {
        item::find_visible(&self.items, name)
    }

    /// Remove a carried item the player can see.
    pub fn remove_visible_item(&mut self, name: &str) -> Option<Item> {
        item::remove_where(&mut self.items, name, |i| i.is_player_visible)
    }

    /// Check if the player has a knowledge flag set.
    pub fn has_knowledge(&self, key: &str) -> bool {
        self.knowledge.get(key).copied().unwrap_or(false)
    }

    /// Set a knowledge flag.
    pub fn set_knowledge(&mut self, key: impl Into<String>, value: bool) {
        self.knowledge.insert(key.into(), value);
    }

    /// Kill the player.
    pub fn kill(&mut self) {
        self.is_alive = false;
    }
}

impl Examinable for PlayableCharacter {
    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn description(&self) -> &Description {
        &self.description
    }

    fn examine(&self, world: &World) -> String {
        let mut output = self.description.render(world);
        if output.is_empty() {
            output = format!("You are {}.", self.identifier);
        }

        let visible: Vec<&str> = self
            .items
            .iter()
            .filter(|i| i.is_player_visible)
            .map(|i| i.identifier.name())
            .collect();

        if visible.is_empty() {
            output.push_str(" You are carrying nothing.");
        } else {
            output.push_str(&format!(" You are carrying: {}.", visible.join(", ")));
        }
        output
    }
}

impl CommandBearer for PlayableCharacter {
    fn commands(&self) -> &[CustomCommand] {
        &self.commands
    }
}

/// A character the player can meet, talk to, and use items on.
#[derive(Debug, Clone)]
pub struct NonPlayableCharacter {
    /// Character name.
    pub identifier: Identifier,
    /// Character description.
    pub description: Description,
    /// Whether the character is alive. The dead do not talk.
    pub is_alive: bool,
    /// Whether the player can see the character.
    pub is_player_visible: bool,
    /// The character's dialogue, absent while it is being played.
    pub conversation: Option<Conversation>,
    /// Reaction to items being used on the character.
    pub interaction: Option<Interaction>,
    /// Commands the character offers.
    pub commands: Vec<CustomCommand>,
    items: Vec<Item>,
}

impl NonPlayableCharacter {
    /// Create a living, visible character with nothing to say.
    pub fn new(name: impl Into<Identifier>, description: impl Into<Description>) -> Self {
        Self {
            identifier: name.into(),
            description: description.into(),
            is_alive: true,
            is_player_visible: true,
            conversation: None,
            interaction: None,
            commands: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Give the character a conversation.
    pub fn with_conversation(mut self, conversation: Conversation) -> Self {
        self.conversation = Some(conversation);
        self
    }

    /// Set whether the character is visible.
    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.is_player_visible = visible;
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

    /// Give the character an item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Items the character holds.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Add an item to the character's belongings.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove an item from the character's belongings.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        item::remove(&mut self.items, name)
    }

    /// Kill the character.
    pub fn kill(&mut self) {
        self.is_alive = false;
    }
}

impl Examinable for NonPlayableCharacter {
    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn description(&self) -> &Description {
        &self.description
    }

    fn is_player_visible(&self) -> bool {
        self.is_player_visible
    }
}

impl CommandBearer for NonPlayableCharacter {
    fn commands(&self) -> &[CustomCommand] {
        &self.commands
    }
}
