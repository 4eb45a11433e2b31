//! Simulation context and state mutation.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. It bundles the
//! state with the read-only environment, the random source and the event
//! sink, so every rule runs against explicitly passed context and a run is
//! reproducible from its seed.
//!
//! Operations are split by concern:
//! - `attack`: the attack resolution pipeline
//! - `abilities`: the nine ability entry points
//! - `buffs`: per-tick buff processing
//! - `mobs`: the NPC decision loop
//! - `time`: world ticks and interruptible time passing

mod abilities;
mod afflictions;
mod attack;
mod buffs;
pub mod gear;
mod mobs;
mod regen;
mod stance;
mod time;

use crate::env::{GameEnv, RngOracle};
use crate::event::{CombatEvent, EventSink};
use crate::state::{EntityId, GameState};

/// Engine over one borrowed state.
///
/// Build a fresh engine per call site; it holds no state of its own.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    env: GameEnv<'a>,
    rng: &'a mut dyn RngOracle,
    events: &'a mut dyn EventSink,
}

impl<'a> GameEngine<'a> {
    pub fn new(
        state: &'a mut GameState,
        env: GameEnv<'a>,
        rng: &'a mut dyn RngOracle,
        events: &'a mut dyn EventSink,
    ) -> Self {
        Self {
            state,
            env,
            rng,
            events,
        }
    }

    pub fn state(&self) -> &GameState {
        &*self.state
    }

    pub fn env(&self) -> GameEnv<'a> {
        self.env
    }

    /// Death handling. NPCs leave the arena; the player stays at zero HP.
    pub fn kill(&mut self, id: EntityId) {
        self.events.emit(CombatEvent::Died { entity: id });
        if id.is_player() {
            if let Some(player) = self.state.combatant_mut(id) {
                player.hp.current = 0;
                player.clear_transient_tags();
            }
        } else {
            self.state.remove(id);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::env::SequenceRng;
    use crate::state::Combatant;

    #[test]
    fn killing_an_npc_removes_it() {
        let mut state = GameState::with_player(Combatant::builder(EntityId::PLAYER).build());
        let rat = state.spawn(Combatant::builder(EntityId(0)).build());
        state.engage(EntityId::PLAYER, rat);

        let (items, map, tables) = (catalog(), rooms(), tables());
        let mut rng = SequenceRng::default();
        let mut events = Vec::new();
        let mut engine = GameEngine::new(
            &mut state,
            GameEnv::new(&items, &map, &tables),
            &mut rng,
            &mut events,
        );
        engine.kill(rat);
        engine.kill(EntityId::PLAYER);

        assert!(!state.contains(rat));
        assert!(state.player().unwrap().hostile_to.is_empty());
        assert_eq!(state.player().unwrap().hp.current, 0);
        assert_eq!(
            events,
            vec![
                CombatEvent::Died { entity: rat },
                CombatEvent::Died {
                    entity: EntityId::PLAYER
                },
            ]
        );
    }
}
