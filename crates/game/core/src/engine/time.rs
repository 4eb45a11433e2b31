//! World clock and time passing.
//!
//! One world tick is one simulated second: every combatant's buffs tick, the
//! player regenerates stamina, then every NPC takes its AI turn. The player
//! spends time by running world ticks, which can be interrupted by damage.

use crate::ability::AbilityError;
use crate::combat::CombatError;
use crate::state::EntityId;

use super::GameEngine;

impl GameEngine<'_> {
    /// Advances the world by one second.
    pub fn tick_world(&mut self) -> Result<(), CombatError> {
        self.state.clock += 1;
        for id in self.state.ids() {
            if self.state.contains(id) {
                self.tick_buffs(id);
            }
        }
        self.regenerate(EntityId::PLAYER);
        self.tick_mobs()
    }

    /// Spends `seconds` of a combatant's time.
    ///
    /// NPCs simply reset their action timer. The player lives through
    /// `ceil(seconds)` world ticks; losing health during one aborts with
    /// [`AbilityError::Interrupted`] unless `force` is set.
    pub fn pass_time(&mut self, id: EntityId, seconds: f32, force: bool) -> Result<(), AbilityError> {
        let combatant = self
            .state
            .combatant_mut(id)
            .ok_or(AbilityError::ActorNotFound(id))?;
        if !combatant.is_alive() {
            return Err(AbilityError::ActorDead(id));
        }
        if !id.is_player() {
            combatant.action_timer = 0.0;
            return Ok(());
        }

        let ticks = seconds.max(0.0).ceil() as u32;
        for _ in 0..ticks {
            let before = self.player_hp();
            self.tick_world()?;
            let after = self.player_hp();
            if after == 0 {
                return Err(AbilityError::ActorDead(id));
            }
            if after < before && !force {
                return Err(AbilityError::Interrupted);
            }
        }
        Ok(())
    }

    /// Pays off a negative player action timer by passing time, then resets
    /// the timer. On interruption the debt stays for the next attempt.
    pub fn settle_action_timer(&mut self, force: bool) -> Result<(), AbilityError> {
        let owed = match self.state.player() {
            Some(player) => -player.action_timer,
            None => return Err(AbilityError::ActorNotFound(EntityId::PLAYER)),
        };
        if owed > 0.0 {
            self.pass_time(EntityId::PLAYER, owed, force)?;
        }
        if let Some(player) = self.state.combatant_mut(EntityId::PLAYER) {
            player.action_timer = 0.0;
        }
        Ok(())
    }

    fn player_hp(&self) -> u32 {
        self.state.player().map_or(0, |player| player.hp.current)
    }
}
