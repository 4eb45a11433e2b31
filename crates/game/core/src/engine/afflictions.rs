//! Bleed and poison applied by damaging hits.

use crate::event::{CombatEvent, MarkKind};
use crate::state::{BuffKind, EntityId, Stacking};

use super::GameEngine;

fn ticks(duration: u32) -> u16 {
    u16::try_from(duration).unwrap_or(u16::MAX)
}

impl GameEngine<'_> {
    /// Opens a wound sized to the damage taken. Bleeding replaces a weaker
    /// wound and leaves blood in the room.
    pub(super) fn apply_bleed(&mut self, id: EntityId, damage: u32) {
        let tables = self.env.tables;
        let table = &tables.afflictions;
        let Some(target) = self.state.combatant(id) else {
            return;
        };
        if target.tags.is_bleed_immune() {
            return;
        }
        let room = target.room;

        let duration = self
            .rng
            .range(table.bleed_duration_min, table.bleed_duration_max);
        let divisor = table.bleed_divisor_base + self.rng.range(0, table.bleed_divisor_range);
        let severity = (damage / divisor.max(1)).max(1);

        if let Some(target) = self.state.combatant_mut(id) {
            target.buffs.set(
                BuffKind::Bleed,
                ticks(duration),
                severity as f32,
                Stacking::REPLACE,
            );
        }
        self.events.emit(CombatEvent::Mark {
            room,
            kind: MarkKind::Blood,
            intensity: table.blood_mark_intensity,
        });
    }

    /// Poison accumulates: repeated doses add both power and duration.
    pub(super) fn apply_poison(&mut self, id: EntityId, damage: u32) {
        let tables = self.env.tables;
        let table = &tables.afflictions;
        let Some(target) = self.state.combatant(id) else {
            return;
        };
        if target.tags.is_poison_immune() {
            return;
        }

        let duration = self
            .rng
            .range(table.poison_duration_min, table.poison_duration_max);
        let divisor = table.poison_divisor_base + self.rng.range(0, table.poison_divisor_range);
        let severity = (damage / divisor.max(1)).max(1);

        if let Some(target) = self.state.combatant_mut(id) {
            target.buffs.set(
                BuffKind::Poison,
                ticks(duration),
                severity as f32,
                Stacking::ADDITIVE,
            );
        }
    }
}
