//! Event sink that records, narrates and tallies engine output.
//!
//! The core only reports [`CombatEvent`]s. The journal keeps them in order
//! for replay comparison, logs them through `tracing`, accumulates player
//! experience per skill and sums room marks.
use std::collections::HashMap;

use combat_core::{CombatEvent, EventSink, MarkKind, RoomId, Skill};

#[derive(Debug, Default)]
pub struct Journal {
    events: Vec<CombatEvent>,
    experience: HashMap<Skill, u32>,
    marks: HashMap<(RoomId, MarkKind), u8>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded since the last [`Journal::drain`].
    ///
    /// Nothing is dropped automatically, so a long-running driver should
    /// drain once it has consumed them.
    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    /// Removes and returns every recorded event. Tallies are kept.
    pub fn drain(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    /// Total experience the player earned in `skill`.
    pub fn experience(&self, skill: Skill) -> u32 {
        self.experience.get(&skill).copied().unwrap_or(0)
    }

    /// Accumulated intensity of a mark, saturating at 255.
    pub fn mark(&self, room: RoomId, kind: MarkKind) -> u8 {
        self.marks.get(&(room, kind)).copied().unwrap_or(0)
    }

    fn narrate(event: &CombatEvent) {
        match event {
            CombatEvent::Died { entity } => tracing::info!("{entity} dies"),
            CombatEvent::Fled { entity, from, to } => match to {
                Some(to) => tracing::info!("{entity} flees from {from} to {to}"),
                None => tracing::info!("{entity} tries to flee {from} but is cornered"),
            },
            CombatEvent::AbilityUsed { entity, ability } => {
                tracing::info!("{entity} uses {ability}")
            }
            CombatEvent::ManaWaived {
                entity,
                ability,
                owed,
            } => tracing::warn!("{entity} uses {ability} without paying {owed} mana"),
            CombatEvent::LadyLuckRolled {
                entity,
                dice,
                outcome,
            } => tracing::info!("{entity} rolls {}-{}: {outcome:?}", dice.0, dice.1),
            CombatEvent::Swing {
                attacker,
                defender,
                hand,
                outcome,
            } => tracing::debug!("{attacker} swings {hand} at {defender}: {outcome:?}"),
            CombatEvent::OutOfAmmo { attacker, hand } => {
                tracing::debug!("{attacker} has no ammunition for the {hand} hand")
            }
            CombatEvent::BuffDamage {
                entity,
                kind,
                damage,
            } => tracing::debug!("{entity} suffers {damage} from {kind:?}"),
            CombatEvent::AbilityReady { entity, ability } => {
                tracing::debug!("{ability} is ready for {entity}")
            }
            CombatEvent::AbilityTriggered { entity, ability } => {
                tracing::debug!("{ability} triggers for {entity}")
            }
            CombatEvent::SkillXp { skill, amount } => {
                tracing::debug!("player gains {amount} {skill} experience")
            }
            CombatEvent::Mark {
                room,
                kind,
                intensity,
            } => tracing::debug!("{kind} mark ({intensity}) left in {room}"),
            CombatEvent::StanceChanged { entity, from, to } => {
                tracing::trace!("{entity} shifts from {from} to {to} stance")
            }
            CombatEvent::Wandered { entity, from, to } => {
                tracing::trace!("{entity} wanders from {from} to {to}")
            }
        }
    }
}

impl EventSink for Journal {
    fn emit(&mut self, event: CombatEvent) {
        Self::narrate(&event);
        match &event {
            CombatEvent::SkillXp { skill, amount } => {
                let total = self.experience.entry(*skill).or_insert(0);
                *total = total.saturating_add(*amount);
            }
            CombatEvent::Mark {
                room,
                kind,
                intensity,
            } => {
                let total = self.marks.entry((*room, *kind)).or_insert(0);
                *total = total.saturating_add(*intensity);
            }
            _ => {}
        }
        self.events.push(event);
    }
}
