//! Static room graph served through [`combat_core::MapOracle`].
use std::collections::BTreeMap;

use combat_content::RoomSpec;
use combat_core::{Exit, MapOracle, RoomId};

/// MapOracle implementation with static room data.
///
/// Doors are not tracked per instance: an exit's flags describe it for the
/// whole run.
#[derive(Debug, Default)]
pub struct RoomMap {
    rooms: BTreeMap<RoomId, RoomSpec>,
}

impl RoomMap {
    pub fn new(rooms: impl IntoIterator<Item = RoomSpec>) -> Self {
        Self {
            rooms: rooms.into_iter().map(|room| (room.id, room)).collect(),
        }
    }

    pub fn contains(&self, room: RoomId) -> bool {
        self.rooms.contains_key(&room)
    }

    pub fn name(&self, room: RoomId) -> Option<&str> {
        self.rooms.get(&room).map(|spec| spec.name.as_str())
    }

    pub fn rooms(&self) -> impl Iterator<Item = &RoomSpec> {
        self.rooms.values()
    }
}

impl MapOracle for RoomMap {
    fn exits(&self, room: RoomId) -> Vec<Exit> {
        self.rooms
            .get(&room)
            .map(|spec| spec.exits.clone())
            .unwrap_or_default()
    }

    fn travel_time(&self, room: RoomId) -> f32 {
        self.rooms.get(&room).map_or(1.0, |spec| spec.travel_time)
    }
}

#[cfg(test)]
mod tests {
    use combat_core::Direction;

    use super::*;

    #[test]
    fn unknown_rooms_have_no_exits() {
        let map = RoomMap::new([RoomSpec {
            id: RoomId(1),
            name: "Cell".to_string(),
            travel_time: 2.0,
            exits: vec![Exit::new(Direction::North, RoomId(2))],
        }]);

        assert_eq!(map.exits(RoomId(1)).len(), 1);
        assert_eq!(map.travel_time(RoomId(1)), 2.0);
        assert!(map.exits(RoomId(9)).is_empty());
        assert_eq!(map.travel_time(RoomId(9)), 1.0);
        assert_eq!(map.name(RoomId(1)), Some("Cell"));
    }
}
