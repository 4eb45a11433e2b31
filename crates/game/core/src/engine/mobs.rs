//! NPC turns.

use crate::ai::{self, AiDecision};
use crate::combat::CombatError;
use crate::env::Exit;
use crate::event::CombatEvent;
use crate::state::{BuffKind, EntityId, Stacking};

use super::GameEngine;

impl GameEngine<'_> {
    /// Runs one AI turn for every living NPC, in id order.
    pub fn tick_mobs(&mut self) -> Result<(), CombatError> {
        let cap = self.env.tables.ai.timer_cap;
        for id in self.state.npc_ids() {
            let Some(mob) = self.state.combatant_mut(id) else {
                continue;
            };
            if !mob.is_alive() {
                continue;
            }
            mob.action_timer = (mob.action_timer + 1.0).min(cap);

            let decision = ai::decide(&*self.state, &self.env, &mut *self.rng, id)?;
            self.execute(id, decision)?;
        }
        Ok(())
    }

    fn execute(&mut self, id: EntityId, decision: AiDecision) -> Result<(), CombatError> {
        match decision {
            AiDecision::Hold | AiDecision::Idle => {}
            AiDecision::Flee(exit) => self.flee(id, exit),
            AiDecision::ChangeStance(stance) => self.set_stance(id, stance),
            AiDecision::Attack(target) => {
                self.attack(id, target)?;
            }
            AiDecision::Wander(exit) => {
                if let Some(mob) = self.state.combatant_mut(id) {
                    let from = mob.room;
                    mob.room = exit.destination;
                    mob.action_timer = 0.0;
                    self.events.emit(CombatEvent::Wandered {
                        entity: id,
                        from,
                        to: exit.destination,
                    });
                }
            }
        }
        Ok(())
    }

    fn flee(&mut self, id: EntityId, exit: Option<Exit>) {
        let duration = self.env.tables.ai.recently_fled_duration;
        let Some(mob) = self.state.combatant_mut(id) else {
            return;
        };
        let from = mob.room;
        let to = exit.map(|exit| exit.destination);
        if let Some(room) = to {
            mob.room = room;
        }
        mob.action_timer = 0.0;
        mob.buffs
            .set(BuffKind::RecentlyFled, duration, 0.0, Stacking::REPLACE);
        self.events.emit(CombatEvent::Fled {
            entity: id,
            from,
            to,
        });
    }
}
