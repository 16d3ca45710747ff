use crate::condition::Description;
use crate::custom::{CommandBearer, CustomCommand};
use crate::direction::Direction;
use crate::entity::Examinable;
use crate::identifier::Identifier;
use crate::interaction::{Interaction, InteractionResult};
use crate::item::Item;
use crate::world::World;

/// A way out of a room. Owned by the room it leads out of.
#[derive(Debug, Clone)]
pub struct Exit {
    /// Which side of the room the exit is on.
    pub direction: Direction,
    /// Exit description.
    pub description: Description,
    /// Whether the player can see the exit.
    pub is_player_visible: bool,
    /// Reaction to items being used on the exit.
    pub interaction: Option<Interaction>,
    /// Commands the exit offers.
    pub commands: Vec<CustomCommand>,
    identifier: Identifier,
    locked: bool,
}

impl Exit {
    /// Create a visible, unlocked exit.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            description: Description::default(),
            is_player_visible: true,
            interaction: None,
            commands: Vec::new(),
            identifier: Identifier::new(direction.name()),
            locked: false,
        }
    }

    /// Set whether the exit starts locked.
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<Description>) -> Self {
        self.description = description.into();
        self
    }

    /// Set whether the exit is visible.
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

    /// Whether the exit blocks traversal.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Unlock the exit. Unlocking an unlocked exit does nothing.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Lock the exit.
    pub fn lock(&mut self) {
        self.locked = true;
    }
}

impl Examinable for Exit {
    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn description(&self) -> &Description {
        &self.description
    }

    fn is_player_visible(&self) -> bool {
        self.is_player_visible
    }

    fn examine(&self, world: &World) -> String {
        let text = self.description.render(world);
        let state = if self.locked { "locked" } else { "unlocked" };
        if text.is_empty() {
            format!("The {} exit is {}.", self.direction, state)
        } else {
            format!("{} It is {}.", text, state)
        }
    }
}

impl CommandBearer for Exit {
    fn commands(&self) -> &[CustomCommand] {
        &self.commands
    }
}
