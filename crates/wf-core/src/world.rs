//! The single mutable aggregate every command runs against.

use crate::character::{NonPlayableCharacter, PlayableCharacter};
use crate::spatial::{Overworld, Region, Room};

/// The overworld and the player who walks it.
#[derive(Debug, Clone)]
pub struct World {
    /// Every region, and which one the player is in.
    pub overworld: Overworld,
    /// The player.
    pub player: PlayableCharacter,
}

impl World {
    /// Create a world.
    pub fn new(overworld: Overworld, player: PlayableCharacter) -> Self {
        Self { overworld, player }
    }

    /// The region the player is in.
    pub fn current_region(&self) -> Option<&Region> {
        self.overworld.current_region()
    }

    /// Mutable access to the region the player is in.
    pub fn current_region_mut(&mut self) -> Option<&mut Region> {
        self.overworld.current_region_mut()
    }

    /// The room the player is in.
    pub fn current_room(&self) -> Option<&Room> {
        self.current_region().and_then(Region::current_room)
    }

    /// Mutable access to the room the player is in.
    pub fn current_room_mut(&mut self) -> Option<&mut Room> {
        self.current_region_mut().and_then(Region::current_room_mut)
    }

    /// Find a room in the current region by name.
    pub fn find_room(&self, name: &str) -> Option<&Room> {
        self.current_region().and_then(|r| r.find_room(name))
    }

    /// Find a character in any room of any region.
    pub fn find_character_anywhere(&self, name: &str) -> Option<&NonPlayableCharacter> {
        self.overworld
            .regions()
            .iter()
            .flat_map(|region| region.rooms())
            .find_map(|(_, room)| room.find_character(name))
    }

    /// Mutable access to a character in any room of any region.
    pub fn find_character_anywhere_mut(&mut self, name: &str) -> Option<&mut NonPlayableCharacter> {
        self.overworld
            .regions_mut()
            .iter_mut()
            .flat_map(|region| region.rooms_mut())
            .find_map(|room| room.find_character_mut(name))
    }
}
