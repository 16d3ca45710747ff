use crate::direction::Direction;
use crate::spatial::{Region, Room};

/// The rooms surrounding a region's current room, one slot per direction.
///
/// Slots are filled by coordinate, not by exit, so a neighbour shows up even
/// when no door leads to it.
#[derive(Debug, Clone, Copy)]
pub struct ViewPoint<'a> {
    neighbours: [Option<&'a Room>; 6],
}

impl<'a> ViewPoint<'a> {
    /// Snapshot the neighbours of the region's current room.
    pub fn of(region: &'a Region) -> Self {
        let mut neighbours = [None; 6];
        if let Some(from) = region.current_position() {
            for (slot, direction) in neighbours.iter_mut().zip(Direction::ALL) {
                *slot = region.adjoining_room(direction, from);
            }
        }
        Self { neighbours }
    }

    /// The neighbour in a direction.
    pub fn get(&self, direction: Direction) -> Option<&'a Room> {
        Direction::ALL
            .iter()
            .position(|d| *d == direction)
            .and_then(|i| self.neighbours[i])
    }

    /// Return `true` if any neighbour exists.
    pub fn any(&self) -> bool {
        self.neighbours.iter().any(Option::is_some)
    }

    /// Return `true` if any neighbour has not been visited yet.
    pub fn any_not_visited(&self) -> bool {
        self.neighbours
            .iter()
            .flatten()
            .any(|room| !room.has_been_visited)
    }

    /// Present neighbours with their directions.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &'a Room)> + '_ {
        Direction::ALL
            .into_iter()
            .zip(self.neighbours)
            .filter_map(|(d, room)| room.map(|r| (d, r)))
    }
}
