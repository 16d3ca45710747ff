use tracing::debug;

use crate::condition::Description;
use crate::custom::{CommandBearer, CustomCommand};
use crate::entity::Examinable;
use crate::error::{CoreError, CoreResult};
use crate::identifier::Identifier;
use crate::spatial::Region;

/// The outermost container: an ordered set of regions, one of them current.
#[derive(Debug, Clone)]
pub struct Overworld {
    /// Overworld name.
    pub identifier: Identifier,
    /// Overworld description.
    pub description: Description,
    /// Commands available everywhere.
    pub commands: Vec<CustomCommand>,
    regions: Vec<Region>,
    current: Option<usize>,
}

impl Overworld {
    /// Create an overworld with no regions.
    pub fn new(name: impl Into<Identifier>, description: impl Into<Description>) -> Self {
        Self {
            identifier: name.into(),
            description: description.into(),
            commands: Vec::new(),
            regions: Vec::new(),
            current: None,
        }
    }

    /// Add a custom command.
    pub fn with_command(mut self, command: CustomCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Add a region. The first region added becomes current.
    pub fn add_region(&mut self, region: Region) -> CoreResult<()> {
        if self.find_region(region.identifier.name()).is_some() {
            return Err(CoreError::DuplicateRegion(region.identifier.name().to_string()));
        }

        self.regions.push(region);
        if self.current.is_none() {
            self.current = Some(self.regions.len() - 1);
        }
        Ok(())
    }

    /// All regions, in the order they were added.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Mutable access to all regions.
    pub fn regions_mut(&mut self) -> &mut [Region] {
        &mut self.regions
    }

    /// Find a region by name.
    pub fn find_region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.identifier.matches(name))
    }

    /// The region the player is in.
    pub fn current_region(&self) -> Option<&Region> {
        self.current.and_then(|i| self.regions.get(i))
    }

    /// Mutable access to the region the player is in.
    pub fn current_region_mut(&mut self) -> Option<&mut Region> {
        let index = self.current?;
        self.regions.get_mut(index)
    }

    /// Make the named region current and mark its current room visited.
    /// Returns `false` if no region has that name.
    pub fn move_to(&mut self, name: &str) -> bool {
        let Some(index) = self.regions.iter().position(|r| r.identifier.matches(name)) else {
            return false;
        };

        self.current = Some(index);
        if let Some(room) = self.regions[index].current_room_mut() {
            room.has_been_visited = true;
        }
        debug!(region = name, "moved to region");
        true
    }

    /// Like [`Overworld::move_to`], but reports a missing region as an error.
    pub fn try_move_to(&mut self, name: &str) -> CoreResult<()> {
        if self.move_to(name) {
            Ok(())
        } else {
            Err(CoreError::RegionNotFound(name.to_string()))
        }
    }
}

impl Examinable for Overworld {
    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn description(&self) -> &Description {
        &self.description
    }
}

impl CommandBearer for Overworld {
    fn commands(&self) -> &[CustomCommand] {
        &self.commands
    }
}
