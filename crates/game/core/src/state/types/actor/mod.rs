//! Combatant state.
//!
//! This module contains everything a single combatant carries:
//! - Combatant: resources, stance, timer and hostility
//! - Buffs: cooldowns, combat buffs and damage-over-time debuffs
//! - Equipment: hand and armor slots
//! - Inventory: carried stacks (ammunition)
//! - Skills and behavioral tags

pub mod buffs;
pub mod equipment;
pub mod inventory;
pub mod skills;
pub mod tags;

pub use buffs::{Buff, BuffDuration, BuffKind, BuffLedger, Stacking};
pub use equipment::{EquipSlot, Equipment, EquipmentBuilder};
pub use inventory::{InventorySlot, InventoryState};
pub use skills::{Skill, SkillLevels};
pub use tags::CombatTags;

use super::{Anatomy, EntityId, ResourceMeter, RoomId, Stance};

/// A player or NPC taking part in combat.
///
/// # Invariants
///
/// - `hostile_to` never contains `id` and never holds duplicates
/// - transient tags ([`CombatTags::TRANSIENT`]) are only set inside one
///   attack or ability call
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: EntityId,
    pub name: String,
    pub room: RoomId,

    // === Resources ===
    pub hp: ResourceMeter,
    pub sp: ResourceMeter,
    pub mp: ResourceMeter,

    pub stance: Stance,
    pub equipment: Equipment,
    pub inventory: InventoryState,

    /// Entities this combatant is fighting, in the order they engaged.
    pub hostile_to: Vec<EntityId>,
    pub tags: CombatTags,
    pub buffs: BuffLedger,
    pub anatomy: Anatomy,
    pub skills: SkillLevels,

    /// Seconds of action budget. Negative means the combatant owes time.
    pub action_timer: f32,

    // === Player-only upkeep ===
    pub hunger: ResourceMeter,
    pub sp_regen_remainder: u32,
}

impl Combatant {
    pub fn builder(id: EntityId) -> CombatantBuilder {
        CombatantBuilder::new(id)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp.current > 0
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.id.is_player()
    }

    pub fn is_hostile_to(&self, other: EntityId) -> bool {
        self.hostile_to.contains(&other)
    }

    /// Records `other` as an enemy, keeping the list free of duplicates.
    pub fn add_hostility(&mut self, other: EntityId) {
        if other != self.id && !self.hostile_to.contains(&other) {
            self.hostile_to.push(other);
        }
    }

    pub fn remove_hostility(&mut self, other: EntityId) {
        self.hostile_to.retain(|id| *id != other);
    }

    /// Clears every transient tag and success marker.
    pub fn clear_transient_tags(&mut self) {
        self.tags
            .remove(CombatTags::TRANSIENT | CombatTags::SUCCESS_MARKERS);
    }
}

/// Builder for spawning combatants from templates or tests.
pub struct CombatantBuilder {
    combatant: Combatant,
}

impl CombatantBuilder {
    pub fn new(id: EntityId) -> Self {
        Self {
            combatant: Combatant {
                id,
                name: if id.is_player() {
                    "player".to_string()
                } else {
                    format!("mob {}", id.0)
                },
                room: RoomId::default(),
                hp: ResourceMeter::full(100),
                sp: ResourceMeter::full(100),
                mp: ResourceMeter::full(50),
                stance: Stance::default(),
                equipment: Equipment::empty(),
                inventory: InventoryState::empty(),
                hostile_to: Vec::new(),
                tags: CombatTags::empty(),
                buffs: BuffLedger::new(),
                anatomy: Anatomy::humanoid(),
                skills: SkillLevels::default(),
                action_timer: 0.0,
                hunger: ResourceMeter::new(0, 100),
                sp_regen_remainder: 0,
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.combatant.name = name.into();
        self
    }

    pub fn room(mut self, room: RoomId) -> Self {
        self.combatant.room = room;
        self
    }

    pub fn hp(mut self, current: u32, maximum: u32) -> Self {
        self.combatant.hp = ResourceMeter::new(current, maximum);
        self
    }

    pub fn sp(mut self, current: u32, maximum: u32) -> Self {
        self.combatant.sp = ResourceMeter::new(current, maximum);
        self
    }

    pub fn mp(mut self, current: u32, maximum: u32) -> Self {
        self.combatant.mp = ResourceMeter::new(current, maximum);
        self
    }

    pub fn stance(mut self, stance: Stance) -> Self {
        self.combatant.stance = stance;
        self
    }

    pub fn equipment(mut self, equipment: Equipment) -> Self {
        self.combatant.equipment = equipment;
        self
    }

    pub fn inventory(mut self, inventory: InventoryState) -> Self {
        self.combatant.inventory = inventory;
        self
    }

    pub fn tags(mut self, tags: CombatTags) -> Self {
        self.combatant.tags = tags;
        self
    }

    pub fn anatomy(mut self, anatomy: Anatomy) -> Self {
        self.combatant.anatomy = anatomy;
        self
    }

    pub fn skills(mut self, skills: SkillLevels) -> Self {
        self.combatant.skills = skills;
        self
    }

    pub fn action_timer(mut self, seconds: f32) -> Self {
        self.combatant.action_timer = seconds;
        self
    }

    pub fn hunger(mut self, current: u32, maximum: u32) -> Self {
        self.combatant.hunger = ResourceMeter::new(current, maximum);
        self
    }

    pub fn build(self) -> Combatant {
        self.combatant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostility_list_has_no_duplicates_or_self() {
        let mut mob = Combatant::builder(EntityId(3)).build();
        mob.add_hostility(EntityId::PLAYER);
        mob.add_hostility(EntityId::PLAYER);
        mob.add_hostility(EntityId(3));
        assert_eq!(mob.hostile_to, vec![EntityId::PLAYER]);

        mob.remove_hostility(EntityId::PLAYER);
        assert!(mob.hostile_to.is_empty());
    }

    #[test]
    fn clear_transient_tags_keeps_template_tags() {
        let mut mob = Combatant::builder(EntityId(1))
            .tags(CombatTags::COWARD | CombatTags::FREE_ATTACK | CombatTags::GRIT_HELD)
            .build();
        mob.clear_transient_tags();
        assert_eq!(mob.tags, CombatTags::COWARD);
    }

    #[test]
    fn dead_at_zero_hp() {
        let mob = Combatant::builder(EntityId(1)).hp(0, 10).build();
        assert!(!mob.is_alive());
    }
}
