//! Room graph loader.

use std::collections::BTreeSet;
use std::path::Path;

use combat_core::ExitFlags;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::specs::RoomSpec;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RoomsRon {
    rooms: Vec<RoomSpec>,
}

/// Loader for the room graph from RON files.
pub struct RoomLoader;

impl RoomLoader {
    /// Load rooms from a RON file.
    ///
    /// Room ids must be unique and every real exit must lead to a known
    /// room. Fake exits may point anywhere.
    pub fn load(path: &Path) -> LoadResult<Vec<RoomSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<RoomSpec>> {
        let data: RoomsRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rooms RON: {}", e))?;

        let mut ids = BTreeSet::new();
        for room in &data.rooms {
            if !ids.insert(room.id) {
                anyhow::bail!("Duplicate room id {}", room.id);
            }
            if room.travel_time < 0.0 {
                anyhow::bail!("Room {} has a negative travel time", room.id);
            }
        }

        for room in &data.rooms {
            for exit in &room.exits {
                if !exit.flags.contains(ExitFlags::FAKE) && !ids.contains(&exit.destination) {
                    anyhow::bail!(
                        "Exit {} of room {} leads to unknown room {}",
                        exit.direction,
                        room.id,
                        exit.destination
                    );
                }
            }
        }

        Ok(data.rooms)
    }
}
