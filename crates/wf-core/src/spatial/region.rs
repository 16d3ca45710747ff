use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use crate::condition::Description;
use crate::custom::{CommandBearer, CustomCommand};
use crate::direction::Direction;
use crate::entity::Examinable;
use crate::error::{CoreError, CoreResult};
use crate::identifier::Identifier;
use crate::spatial::Room;

/// Integer grid coordinate of a room within a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point3D {
    /// East-west axis.
    pub x: i32,
    /// North-south axis.
    pub y: i32,
    /// Vertical axis.
    pub z: i32,
}

impl Point3D {
    /// Create a point.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The neighbouring point one step in `direction`, or `None` past the
    /// edge of the grid.
    pub fn offset(self, direction: Direction) -> Option<Self> {
        let (dx, dy, dz) = direction.delta();
        Some(Self::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.z.checked_add(dz)?,
        ))
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A sparse 3-D grid of rooms with one current room.
///
/// Exits and coordinates are authored independently: an exit may point at a
/// coordinate with no room, and two adjacent rooms need not share exits. The
/// region only refuses to stack two rooms on one coordinate.
#[derive(Debug, Clone)]
pub struct Region {
    /// Region name.
    pub identifier: Identifier,
    /// Region description.
    pub description: Description,
    /// Commands available anywhere in the region.
    pub commands: Vec<CustomCommand>,
    rooms: BTreeMap<Point3D, Room>,
    current: Option<Point3D>,
}

impl Region {
    /// Create an empty region.
    pub fn new(name: impl Into<Identifier>, description: impl Into<Description>) -> Self {
        Self {
            identifier: name.into(),
            description: description.into(),
            commands: Vec::new(),
            rooms: BTreeMap::new(),
            current: None,
        }
    }

    /// Add a custom command.
    pub fn with_command(mut self, command: CustomCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Place a room at a coordinate. The first room placed becomes current.
    pub fn add_room(&mut self, room: Room, x: i32, y: i32, z: i32) -> CoreResult<()> {
        let point = Point3D::new(x, y, z);
        if self.rooms.contains_key(&point) {
            return Err(CoreError::PositionOccupied { x, y, z });
        }

        self.rooms.insert(point, room);
        if self.current.is_none() {
            self.current = Some(point);
        }
        Ok(())
    }

    /// Make the room at a coordinate current. Returns `false` if no room is there.
    pub fn set_start_position(&mut self, x: i32, y: i32, z: i32) -> bool {
        let point = Point3D::new(x, y, z);
        if self.rooms.contains_key(&point) {
            self.current = Some(point);
            true
        } else {
            false
        }
    }

    /// Coordinate of the current room.
    pub fn current_position(&self) -> Option<Point3D> {
        self.current
    }

    /// The room the player is in.
    pub fn current_room(&self) -> Option<&Room> {
        self.current.and_then(|p| self.rooms.get(&p))
    }

    /// Mutable access to the room the player is in.
    pub fn current_room_mut(&mut self) -> Option<&mut Room> {
        let point = self.current?;
        self.rooms.get_mut(&point)
    }

    /// The room at a coordinate.
    pub fn room_at(&self, point: Point3D) -> Option<&Room> {
        self.rooms.get(&point)
    }

    /// Mutable access to the room at a coordinate.
    pub fn room_at_mut(&mut self, point: Point3D) -> Option<&mut Room> {
        self.rooms.get_mut(&point)
    }

    /// Find a room by name.
    pub fn find_room(&self, name: &str) -> Option<&Room> {
        self.rooms.values().find(|r| r.identifier.matches(name))
    }

    /// Find a room's coordinate by name.
    pub fn position_of(&self, name: &str) -> Option<Point3D> {
        self.rooms
            .iter()
            .find(|(_, r)| r.identifier.matches(name))
            .map(|(p, _)| *p)
    }

    /// All rooms with their coordinates, ordered by coordinate.
    pub fn rooms(&self) -> impl Iterator<Item = (Point3D, &Room)> {
        self.rooms.iter().map(|(p, r)| (*p, r))
    }

    /// Mutable access to all rooms.
    pub fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.values_mut()
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Return `true` if the region has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// The room one step from `from`, ignoring exits. Never mutates.
    pub fn adjoining_room(&self, direction: Direction, from: Point3D) -> Option<&Room> {
        self.rooms.get(&from.offset(direction)?)
    }

    /// Move the player one room in `direction`.
    ///
    /// Succeeds only if the current room has an unlocked exit that way and a
    /// room exists at the neighbouring coordinate. On success the new room
    /// records the side it was entered from and is marked visited.
    pub fn travel(&mut self, direction: Direction) -> bool {
        let Some(from) = self.current else {
            return false;
        };

        if !self.rooms.get(&from).is_some_and(|r| r.can_move(direction)) {
            debug!(%direction, %from, "no open exit");
            return false;
        }

        let target = from.offset(direction);
        let Some((target, room)) =
            target.and_then(|t| self.rooms.get_mut(&t).map(|room| (t, room)))
        else {
            warn!(
                region = %self.identifier,
                %direction,
                %from,
                "exit leads to an empty coordinate"
            );
            return false;
        };

        room.entered_from = Some(direction.inverse());
        room.has_been_visited = true;
        debug!(room = %room.identifier, %target, "entered room");
        self.current = Some(target);
        true
    }

    /// Unlock the current room's exit in `direction` and, if the neighbouring
    /// room has an exit leading back, that one too.
    ///
    /// Returns `false` without changing anything if the current room has no
    /// exit in that direction.
    pub fn unlock_door_pair(&mut self, direction: Direction) -> bool {
        let Some(from) = self.current else {
            return false;
        };

        let Some(exit) = self
            .rooms
            .get_mut(&from)
            .and_then(|r| r.find_exit_mut(direction))
        else {
            return false;
        };
        exit.unlock();

        if let Some(reciprocal) = from
            .offset(direction)
            .and_then(|to| self.rooms.get_mut(&to))
            .and_then(|r| r.find_exit_mut(direction.inverse()))
        {
            reciprocal.unlock();
        }

        debug!(%direction, %from, "unlocked door pair");
        true
    }
}

impl Examinable for Region {
    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn description(&self) -> &Description {
        &self.description
    }
}

impl CommandBearer for Region {
    fn commands(&self) -> &[CustomCommand] {
        &self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::Exit;
    use proptest::prelude::*;

    fn two_rooms(locked: bool) -> Region {
        let mut region = Region::new("Test", "");
        region
            .add_room(
                Room::new("A", "").with_exit(Exit::new(Direction::East).with_locked(locked)),
                0,
                0,
                0,
            )
            .unwrap();
        region
            .add_room(
                Room::new("B", "").with_exit(Exit::new(Direction::West).with_locked(locked)),
                1,
                0,
                0,
            )
            .unwrap();
        region
    }

    #[test]
    fn first_room_is_current() {
        let region = two_rooms(false);
        assert_eq!(region.current_room().unwrap().identifier.name(), "A");
        assert_eq!(region.current_position(), Some(Point3D::new(0, 0, 0)));
    }

    #[test]
    fn occupied_position_is_rejected() {
        let mut region = two_rooms(false);
        let err = region.add_room(Room::new("C", ""), 1, 0, 0).unwrap_err();
        assert_eq!(err, CoreError::PositionOccupied { x: 1, y: 0, z: 0 });
        assert_eq!(region.len(), 2);
    }

    #[test]
    fn travel_east_sets_entered_from_west() {
        let mut region = two_rooms(false);

        assert!(region.travel(Direction::East));
        let room = region.current_room().unwrap();
        assert_eq!(room.identifier.name(), "B");
        assert_eq!(room.entered_from, Some(Direction::West));
        assert!(room.has_been_visited);
    }

    #[test]
    fn locked_exit_blocks_travel() {
        let mut region = two_rooms(true);

        assert!(!region.travel(Direction::East));
        assert_eq!(region.current_room().unwrap().identifier.name(), "A");
    }

    #[test]
    fn exit_to_empty_coordinate_fails_gracefully() {
        let mut region = Region::new("Test", "");
        region
            .add_room(
                Room::new("A", "").with_exit(Exit::new(Direction::Up)),
                0,
                0,
                0,
            )
            .unwrap();

        assert!(!region.travel(Direction::Up));
        assert_eq!(region.current_position(), Some(Point3D::new(0, 0, 0)));
    }

    #[test]
    fn unlock_door_pair_unlocks_both_sides() {
        let mut region = two_rooms(true);

        assert!(region.unlock_door_pair(Direction::East));
        assert!(region.current_room().unwrap().can_move(Direction::East));
        let b = region.room_at(Point3D::new(1, 0, 0)).unwrap();
        assert!(b.can_move(Direction::West));
    }

    #[test]
    fn unlock_door_pair_without_exit_changes_nothing() {
        let mut region = two_rooms(true);

        assert!(!region.unlock_door_pair(Direction::North));
        assert!(!region.current_room().unwrap().can_move(Direction::East));
        let b = region.room_at(Point3D::new(1, 0, 0)).unwrap();
        assert!(!b.can_move(Direction::West));
    }

    #[test]
    fn adjoining_room_ignores_exits() {
        let mut region = Region::new("Test", "");
        region.add_room(Room::new("A", ""), 0, 0, 0).unwrap();
        region.add_room(Room::new("Above", ""), 0, 0, 1).unwrap();

        let above = region.adjoining_room(Direction::Up, Point3D::new(0, 0, 0));
        assert_eq!(above.unwrap().identifier.name(), "Above");
        assert!(
            region
                .adjoining_room(Direction::Down, Point3D::new(0, 0, 0))
                .is_none()
        );
    }

    #[test]
    fn position_of_finds_room() {
        let region = two_rooms(false);
        assert_eq!(region.position_of("b"), Some(Point3D::new(1, 0, 0)));
        assert_eq!(region.position_of("z"), None);
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    #[test]
    fn offset_stops_at_grid_edge() {
        let max = Point3D::new(i32::MAX, 0, 0);
        assert_eq!(max.offset(Direction::East), None);
        assert_eq!(max.offset(Direction::West), Some(Point3D::new(i32::MAX - 1, 0, 0)));
        assert_eq!(Point3D::new(0, 0, i32::MIN).offset(Direction::Down), None);
        assert_eq!(Point3D::new(0, i32::MIN, 0).offset(Direction::South), None);
    }

    #[test]
    fn exit_off_the_grid_edge_leads_nowhere() {
        let mut region = Region::new("Edge", "");
        region
            .add_room(
                Room::new("Brink", "").with_exit(Exit::new(Direction::East).with_locked(true)),
                i32::MAX,
                0,
                0,
            )
            .unwrap();
        let here = region.current_position().unwrap();

        assert!(region.adjoining_room(Direction::East, here).is_none());
        assert!(region.unlock_door_pair(Direction::East));
        assert!(!region.travel(Direction::East));
        assert_eq!(region.current_position(), Some(here));
        assert!(!crate::spatial::ViewPoint::of(&region).any());
    }

    proptest! {
        #[test]
        fn travel_succeeds_iff_open_exit_and_neighbour(
            d in direction(),
            has_exit in any::<bool>(),
            locked in any::<bool>(),
            has_neighbour in any::<bool>(),
        ) {
            let mut start = Room::new("Start", "");
            if has_exit {
                start.add_exit(Exit::new(d).with_locked(locked));
            }

            let mut region = Region::new("Prop", "");
            region.add_room(start, 0, 0, 0).unwrap();
            if has_neighbour {
                let p = Point3D::new(0, 0, 0).offset(d).unwrap();
                region.add_room(Room::new("Next", ""), p.x, p.y, p.z).unwrap();
            }

            let expected = has_exit && !locked && has_neighbour;
            prop_assert_eq!(region.travel(d), expected);

            let name = region.current_room().unwrap().identifier.name().to_string();
            if expected {
                prop_assert_eq!(name, "Next");
                prop_assert_eq!(region.current_room().unwrap().entered_from, Some(d.inverse()));
            } else {
                prop_assert_eq!(name, "Start");
            }
        }

        #[test]
        fn unlock_door_pair_returns_exit_presence(
            d in direction(),
            has_exit in any::<bool>(),
        ) {
            let mut start = Room::new("Start", "");
            if has_exit {
                start.add_exit(Exit::new(d).with_locked(true));
            }
            let p = Point3D::new(0, 0, 0).offset(d).unwrap();

            let mut region = Region::new("Prop", "");
            region.add_room(start, 0, 0, 0).unwrap();
            region
                .add_room(
                    Room::new("Next", "").with_exit(Exit::new(d.inverse()).with_locked(true)),
                    p.x,
                    p.y,
                    p.z,
                )
                .unwrap();

            prop_assert_eq!(region.unlock_door_pair(d), has_exit);

            let back_locked = region
                .room_at(p)
                .and_then(|r| r.find_exit(d.inverse()))
                .map(|e| e.is_locked());
            prop_assert_eq!(back_locked, Some(!has_exit));
        }

        #[test]
        fn round_trip_returns_home(d in direction()) {
            let p = Point3D::new(0, 0, 0).offset(d).unwrap();
            let mut region = Region::new("Prop", "");
            region.add_room(Room::new("Home", "").with_exit(Exit::new(d)), 0, 0, 0).unwrap();
            region
                .add_room(Room::new("Away", "").with_exit(Exit::new(d.inverse())), p.x, p.y, p.z)
                .unwrap();

            prop_assert!(region.travel(d));
            prop_assert!(region.travel(d.inverse()));
            prop_assert_eq!(region.current_position(), Some(Point3D::new(0, 0, 0)));
            prop_assert_eq!(region.current_room().unwrap().entered_from, Some(d));
        }
    }
}
