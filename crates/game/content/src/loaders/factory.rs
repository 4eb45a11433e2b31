//! Content factory for loading everything from one data directory.

use std::path::{Path, PathBuf};

use combat_core::CombatTables;

use crate::loaders::{ActorLoader, ConfigLoader, ItemLoader, LoadResult, RoomLoader};
use crate::specs::{ActorCatalog, ItemSpec, RoomSpec};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── tables.toml   (optional)
/// ├── items.ron
/// ├── rooms.ron
/// └── actors.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load balance tables from `tables.toml`, or the defaults when the file
    /// does not exist.
    pub fn load_tables(&self) -> LoadResult<CombatTables> {
        let path = self.data_dir.join("tables.toml");
        if !path.exists() {
            return Ok(CombatTables::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemSpec>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load the room graph from `rooms.ron`.
    pub fn load_rooms(&self) -> LoadResult<Vec<RoomSpec>> {
        RoomLoader::load(&self.data_dir.join("rooms.ron"))
    }

    /// Load player and NPC templates from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<ActorCatalog> {
        ActorLoader::load(&self.data_dir.join("actors.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
