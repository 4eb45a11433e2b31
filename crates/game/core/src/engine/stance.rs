//! Stance changes.

use arrayvec::ArrayVec;
use strum::EnumCount;

use crate::ability::{Ability, AbilityError};
use crate::event::CombatEvent;
use crate::state::{BuffKind, EntityId, Stance};

use super::GameEngine;

impl GameEngine<'_> {
    /// Switches a combatant's stance.
    ///
    /// Costs the stance change time and drops any effect buff whose ability
    /// is not usable in the new stance. Holding the current stance is free.
    pub fn change_stance(&mut self, id: EntityId, stance: Stance) -> Result<(), AbilityError> {
        let combatant = self
            .state
            .combatant(id)
            .ok_or(AbilityError::ActorNotFound(id))?;
        if !combatant.is_alive() {
            return Err(AbilityError::ActorDead(id));
        }
        self.set_stance(id, stance);
        Ok(())
    }

    pub(super) fn set_stance(&mut self, id: EntityId, stance: Stance) {
        let cost = self.env.tables.time.stance_change_time;
        let Some(combatant) = self.state.combatant_mut(id) else {
            return;
        };
        let from = combatant.stance;
        if from == stance {
            return;
        }

        combatant.stance = stance;
        combatant.action_timer -= cost;

        let stale: ArrayVec<BuffKind, { BuffKind::COUNT }> = combatant
            .buffs
            .iter()
            .map(|buff| buff.kind)
            .filter(|kind| {
                Ability::granting(*kind)
                    .is_some_and(|ability| !ability.requirements().stances.allows(stance))
            })
            .collect();
        for kind in stale {
            combatant.buffs.clear(kind);
        }

        self.events.emit(CombatEvent::StanceChanged {
            entity: id,
            from,
            to: stance,
        });
    }
}
