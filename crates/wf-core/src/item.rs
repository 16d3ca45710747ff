//! Things that can be carried, dropped, and used.

use crate::condition::Description;
use crate::custom::{CommandBearer, CustomCommand};
use crate::entity::Examinable;
use crate::identifier::Identifier;
use crate::interaction::{Interaction, InteractionResult};
use crate::world::World;

/// An item in a room or an inventory.
#[derive(Debug, Clone)]
pub struct Item {
    /// Item name.
    pub identifier: Identifier,
    /// Item description.
    pub description: Description,
    /// Whether the player can pick the item up.
    pub is_takeable: bool,
    /// Whether the player can see the item.
    pub is_player_visible: bool,
    /// Reaction to other items being used on this one.
    pub interaction: Option<Interaction>,
    /// Commands the item offers.
    pub commands: Vec<CustomCommand>,
}

impl Item {
    /// Create a visible item that cannot be taken.
    pub fn new(name: impl Into<Identifier>, description: impl Into<Description>) -> Self {
        Self {
            identifier: name.into(),
            description: description.into(),
            is_takeable: false,
            is_player_visible: true,
            interaction: None,
            commands: Vec::new(),
        }
    }

    /// Set whether the item can be taken.
    pub fn with_takeable(mut self, takeable: bool) -> Self {
        self.is_takeable = takeable;
        self
    }

    /// Set whether the item is visible.
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
}

impl Examinable for Item {
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

impl CommandBearer for Item {
    fn commands(&self) -> &[CustomCommand] {
        &self.commands
    }
}

/// Position of the item named `name`.
pub(crate) fn position(items: &[Item], name: &str) -> Option<usize> {
    items.iter().position(|i| i.identifier.matches(name))
}

/// Find the item named `name`.
pub(crate) fn find<'a>(items: &'a [Item], name: &str) -> Option<&'a Item> {
    position(items, name).map(|idx| &items[idx])
}

/// Remove and return the item named `name`.
pub(crate) fn remove(items: &mut Vec<Item>, name: &str) -> Option<Item> {
    position(items, name).map(|idx| items.remove(idx))
}

/// Find the first visible item named `name`.
pub(crate) fn find_visible<'a>(items: &'a [Item], name: &str) -> Option<&'a Item> {
    items
        .iter()
        .find(|i| i.is_player_visible && i.identifier.matches(name))
}

/// Remove and return the first item named `name` that also satisfies `pred`.
pub(crate) fn remove_where(
    items: &mut Vec<Item>,
    name: &str,
    pred: impl Fn(&Item) -> bool,
) -> Option<Item> {
    items
        .iter()
        .position(|i| i.identifier.matches(name) && pred(i))
        .map(|idx| items.remove(idx))
}
