//! Using one thing on another.

use std::fmt;
use std::rc::Rc;

use crate::item::Item;
use crate::world::World;

/// Signature of an interaction handler: the item being used, and the world.
pub type InteractionHandler = dyn Fn(&Item, &mut World) -> InteractionResult;

/// What happened when an item was used on a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEffect {
    /// Nothing happened.
    NoEffect,
    /// Something happened, and the handler already applied it.
    SelfContained,
    /// The used item is consumed.
    ItemUsedUp,
    /// The target is consumed.
    TargetUsedUp,
    /// The player dies.
    Fatal,
}

/// Effect plus the text describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionResult {
    /// What happened.
    pub effect: InteractionEffect,
    /// Description shown to the player.
    pub description: String,
}

impl InteractionResult {
    /// Create a result.
    pub fn new(effect: InteractionEffect, description: impl Into<String>) -> Self {
        Self {
            effect,
            description: description.into(),
        }
    }

    /// The default result for targets that do not react to items.
    pub fn no_effect() -> Self {
        Self::new(InteractionEffect::NoEffect, "There was no effect.")
    }
}

/// A reaction to having an item used on the owner.
#[derive(Clone)]
pub struct Interaction(Rc<InteractionHandler>);

impl Interaction {
    /// Wrap a handler.
    pub fn new(handler: impl Fn(&Item, &mut World) -> InteractionResult + 'static) -> Self {
        Self(Rc::new(handler))
    }

    /// Run the handler.
    pub fn interact(&self, item: &Item, world: &mut World) -> InteractionResult {
        (self.0)(item, world)
    }
}

impl fmt::Debug for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Interaction(..)")
    }
}
