//! Authoritative combat state.
//!
//! [`GameState`] owns every combatant in a single arena keyed by
//! [`EntityId`]. Cross references (hostility, equipped items, rooms) are ids
//! resolved through the arena or the environment oracles, never pointers.
//! Runtime layers query this state but mutate it exclusively through the
//! engine.
pub mod types;

use std::collections::BTreeMap;

pub use types::{
    Anatomy, BodyPart, Buff, BuffDuration, BuffKind, BuffLedger, CombatTags, Combatant,
    CombatantBuilder, EntityId, EquipSlot, Equipment, EquipmentBuilder, HitLocation, InventorySlot,
    InventoryState, ItemHandle, ResourceMeter, RoomId, Skill, SkillLevels, Stacking, Stance,
    StanceSet,
};

/// Canonical snapshot of the simulation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Simulated seconds elapsed since the state was created.
    pub clock: u64,

    /// Sequential entity id allocator. Id 0 is reserved for the player.
    next_entity_id: u32,

    /// Every live combatant. Ordered so iteration is deterministic.
    combatants: BTreeMap<EntityId, Combatant>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            clock: 0,
            next_entity_id: 1,
            combatants: BTreeMap::new(),
        }
    }

    /// Creates a state holding only the given player.
    pub fn with_player(player: Combatant) -> Self {
        let mut state = Self::new();
        state.insert(Combatant {
            id: EntityId::PLAYER,
            ..player
        });
        state
    }

    /// Allocates the next NPC id.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id.max(1));
        self.next_entity_id = id.0 + 1;
        id
    }

    /// Inserts or replaces a combatant under its own id.
    pub fn insert(&mut self, combatant: Combatant) {
        if combatant.id.0 >= self.next_entity_id {
            self.next_entity_id = combatant.id.0 + 1;
        }
        self.combatants.insert(combatant.id, combatant);
    }

    /// Spawns an NPC, assigning it a fresh id.
    pub fn spawn(&mut self, mut combatant: Combatant) -> EntityId {
        let id = self.allocate_id();
        combatant.id = id;
        self.combatants.insert(id, combatant);
        id
    }

    /// Removes a combatant and scrubs it from every hostility list.
    pub fn remove(&mut self, id: EntityId) -> Option<Combatant> {
        let removed = self.combatants.remove(&id);
        if removed.is_some() {
            for other in self.combatants.values_mut() {
                other.remove_hostility(id);
            }
        }
        removed
    }

    pub fn combatant(&self, id: EntityId) -> Option<&Combatant> {
        self.combatants.get(&id)
    }

    pub fn combatant_mut(&mut self, id: EntityId) -> Option<&mut Combatant> {
        self.combatants.get_mut(&id)
    }

    pub fn player(&self) -> Option<&Combatant> {
        self.combatant(EntityId::PLAYER)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.combatants.contains_key(&id)
    }

    /// Ids of every combatant, in ascending order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.combatants.keys().copied().collect()
    }

    /// Ids of every NPC, in ascending order.
    pub fn npc_ids(&self) -> Vec<EntityId> {
        self.combatants
            .keys()
            .copied()
            .filter(|id| !id.is_player())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.values()
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Returns true if both combatants exist, are alive and share a room.
    pub fn co_located(&self, a: EntityId, b: EntityId) -> bool {
        match (self.combatant(a), self.combatant(b)) {
            (Some(a), Some(b)) => a.is_alive() && b.is_alive() && a.room == b.room,
            _ => false,
        }
    }

    /// Marks two combatants as fighting each other.
    pub fn engage(&mut self, a: EntityId, b: EntityId) {
        if let Some(first) = self.combatant_mut(a) {
            first.add_hostility(b);
        }
        if let Some(second) = self.combatant_mut(b) {
            second.add_hostility(a);
        }
    }
}
