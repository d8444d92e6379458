use crate::core::prelude::*;
use crate::game::room::Room;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RoomId(usize);

impl RoomId {
    pub fn new(index: usize) -> Self {
        RoomId(index)
    }
    pub fn first() -> Self {
        RoomId(0)
    }
}

impl Display for RoomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "room {}", self.0)
    }
}

/// The rooms of a dungeon and which one the player is in.
#[derive(Clone, Debug)]
pub struct Level {
    rooms: Vec<Room>,
    current: RoomId,
}

impl Level {
    pub fn new(first: Room) -> Self {
        Self {
            rooms: vec![first],
            current: RoomId::first(),
        }
    }

    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.push(room);
        RoomId(self.rooms.len() - 1)
    }

    pub fn room(&self, id: RoomId) -> Result<&Room> {
        self.rooms
            .get(id.0)
            .with_context(|| format!("no such room: {id}"))
    }
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut Room> {
        self.rooms
            .get_mut(id.0)
            .with_context(|| format!("no such room: {id}"))
    }
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn current(&self) -> RoomId {
        self.current
    }
    pub fn current_room(&self) -> &Room {
        // `current` is only ever set to an index checked against `rooms`, which never shrinks.
        &self.rooms[self.current.0]
    }
    pub fn current_room_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.current.0]
    }

    pub fn set_current(&mut self, id: RoomId) -> Result<()> {
        if id.0 >= self.rooms.len() {
            bail!("cannot enter {id}: level has {} rooms", self.rooms.len());
        }
        if id != self.current {
            info!("entering {id}");
        }
        self.current = id;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooms_and_current() {
        let mut level = Level::new(Room::new(Vec2::zero(), Vec2::splat(500.)));
        let boss = level.add_room(Room::new(Vec2::splat(1000.), Vec2::splat(800.)).boss());
        assert_eq!(level.len(), 2);
        assert!(!level.current_room().is_boss());
        assert!(level.room(boss).unwrap().is_boss());

        level.set_current(boss).unwrap();
        assert_eq!(level.current(), boss);
        assert!(level.current_room().is_boss());
        assert!(level.set_current(RoomId(7)).is_err());
        assert!(level.room(RoomId(7)).is_err());
        assert_eq!(level.current(), boss);
    }
}
