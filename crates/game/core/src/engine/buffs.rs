//! Per-second buff processing.

use crate::event::CombatEvent;
use crate::state::EntityId;

use super::GameEngine;

impl GameEngine<'_> {
    /// Advances every timed ledger entry of one combatant by a second.
    ///
    /// Damage-over-time entries hurt first; if one kills the combatant the
    /// rest of the ledger is left untouched. A cooldown about to expire
    /// reports its ability as ready. Returns false if the combatant is gone
    /// or dead afterwards.
    pub fn tick_buffs(&mut self, id: EntityId) -> bool {
        let Some(combatant) = self.state.combatant(id) else {
            return false;
        };
        if !combatant.is_alive() {
            return false;
        }
        if combatant.buffs.is_empty() {
            return true;
        }

        for kind in combatant.buffs.timed_kinds() {
            let Some(combatant) = self.state.combatant_mut(id) else {
                return false;
            };

            if kind.is_damage_over_time() {
                let damage = combatant.buffs.power(kind).round().max(0.0) as u32;
                combatant.hp.spend(damage);
                let dead = !combatant.is_alive();
                self.events.emit(CombatEvent::BuffDamage {
                    entity: id,
                    kind,
                    damage,
                });
                if dead {
                    self.kill(id);
                    return false;
                }
            } else if let Some(ability) = kind.cooldown_of() {
                if combatant.buffs.time_remaining(kind) == 1 {
                    self.events
                        .emit(CombatEvent::AbilityReady { entity: id, ability });
                }
            }

            if let Some(combatant) = self.state.combatant_mut(id) {
                combatant.buffs.decrement(kind);
            }
        }
        true
    }
}
