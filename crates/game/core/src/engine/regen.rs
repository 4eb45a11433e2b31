//! Stamina regeneration.

use crate::state::EntityId;

use super::GameEngine;

impl GameEngine<'_> {
    /// Regains stamina for one second.
    ///
    /// A starving combatant (hunger above its maximum) banks the per-tick
    /// amount in a remainder and only regains a point each time the bank
    /// covers the starving divisor.
    pub(super) fn regenerate(&mut self, id: EntityId) {
        let time = &self.env.tables.time;
        let Some(combatant) = self.state.combatant_mut(id) else {
            return;
        };
        if !combatant.is_alive() {
            return;
        }

        if combatant.hunger.current > combatant.hunger.maximum {
            let divisor = time.starving_regen_divisor.max(1);
            combatant.sp_regen_remainder += time.sp_regen_per_tick;
            let gained = combatant.sp_regen_remainder / divisor;
            combatant.sp_regen_remainder %= divisor;
            combatant.sp.restore(gained);
        } else {
            combatant.sp.restore(time.sp_regen_per_tick);
        }
    }
}
