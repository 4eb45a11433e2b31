//! Traits describing read-only world data.
//!
//! Oracles expose item definitions and the room graph. The [`GameEnv`]
//! aggregate bundles them with the balance tables so the engine can access
//! everything it needs without hard coupling to concrete implementations.
//! The random source is separate ([`RngOracle`]) because drawing mutates it.
mod items;
mod map;
mod rng;

use std::collections::BTreeMap;

pub use items::{
    AmmoData, ArmorClass, ArmorData, DamageType, EquipModifiers, ItemDefinition, ItemKind,
    ItemOracle, WeaponData, WeaponFlags,
};
pub use map::{Direction, Exit, ExitFlags, MapOracle};
pub use rng::{PcgRng, RngOracle, SequenceRng};

use crate::config::CombatTables;
use crate::state::{ItemHandle, RoomId};

/// Read-only collaborators threaded through every engine call.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    pub items: &'a dyn ItemOracle,
    pub map: &'a dyn MapOracle,
    pub tables: &'a CombatTables,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        items: &'a dyn ItemOracle,
        map: &'a dyn MapOracle,
        tables: &'a CombatTables,
    ) -> Self {
        Self { items, map, tables }
    }

    pub fn item(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.items.definition(handle)
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("tables", self.tables)
            .finish_non_exhaustive()
    }
}

/// A plain list of definitions is a catalog.
impl ItemOracle for [ItemDefinition] {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.iter().find(|def| def.handle == handle).copied()
    }
}

impl ItemOracle for Vec<ItemDefinition> {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.as_slice().definition(handle)
    }
}

/// An adjacency map is a room graph with unit travel time.
impl MapOracle for BTreeMap<RoomId, Vec<Exit>> {
    fn exits(&self, room: RoomId) -> Vec<Exit> {
        self.get(&room).cloned().unwrap_or_default()
    }
}
