//! Runtime configuration.

use combat_core::{CombatTables, RoomId};

/// Settings for one [`Simulation`](crate::Simulation).
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Seed for the random source. `None` draws one from the OS.
    pub seed: Option<u64>,
    pub tables: CombatTables,
    /// Room the player starts in.
    pub start_room: RoomId,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tables: CombatTables::default(),
            start_room: RoomId(1),
        }
    }
}

impl RuntimeConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tables(mut self, tables: CombatTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_start_room(mut self, room: RoomId) -> Self {
        self.start_room = room;
        self
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
