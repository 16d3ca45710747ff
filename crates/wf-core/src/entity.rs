//! Behaviour shared by everything the player can look at.

use crate::condition::Description;
use crate::identifier::Identifier;
use crate::world::World;

/// Anything with a name and a description the player can examine.
pub trait Examinable {
    /// The entity's name.
    fn identifier(&self) -> &Identifier;

    /// The entity's description.
    fn description(&self) -> &Description;

    /// Whether the player can currently see the entity.
    fn is_player_visible(&self) -> bool {
        true
    }

    /// Text shown when the entity is examined.
    fn examine(&self, world: &World) -> String {
        let text = self.description().render(world);
        if text.is_empty() {
            format!("There is nothing special about {}.", self.identifier())
        } else {
            text
        }
    }
}
