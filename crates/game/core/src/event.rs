//! Events emitted by the engine.
//!
//! The core never logs or renders. Every observable side effect that a
//! collaborator might care about (narration, experience, room marks) is
//! reported as a [`CombatEvent`] through an [`EventSink`].

use crate::ability::{Ability, LuckOutcome};
use crate::combat::{Hand, SwingOutcome};
use crate::state::{BuffKind, EntityId, RoomId, Skill, Stance};

/// Environmental marks left in rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MarkKind {
    Blood,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    Swing {
        attacker: EntityId,
        defender: EntityId,
        hand: Hand,
        outcome: SwingOutcome,
    },
    /// A ranged hand had nothing to fire.
    OutOfAmmo {
        attacker: EntityId,
        hand: Hand,
    },
    Died {
        entity: EntityId,
    },
    /// Damage-over-time tick.
    BuffDamage {
        entity: EntityId,
        kind: BuffKind,
        damage: u32,
    },
    AbilityReady {
        entity: EntityId,
        ability: Ability,
    },
    AbilityUsed {
        entity: EntityId,
        ability: Ability,
    },
    /// An ability went ahead without the mana it costs.
    ManaWaived {
        entity: EntityId,
        ability: Ability,
        owed: u32,
    },
    /// A defensive or offensive buff paid off during a swing.
    AbilityTriggered {
        entity: EntityId,
        ability: Ability,
    },
    LadyLuckRolled {
        entity: EntityId,
        dice: (u8, u8),
        outcome: LuckOutcome,
    },
    StanceChanged {
        entity: EntityId,
        from: Stance,
        to: Stance,
    },
    /// `to` is `None` when there was nowhere to run.
    Fled {
        entity: EntityId,
        from: RoomId,
        to: Option<RoomId>,
    },
    Wandered {
        entity: EntityId,
        from: RoomId,
        to: RoomId,
    },
    Mark {
        room: RoomId,
        kind: MarkKind,
        intensity: u8,
    },
    /// Experience for the player.
    SkillXp {
        skill: Skill,
        amount: u32,
    },
}

/// Receives engine events.
pub trait EventSink {
    fn emit(&mut self, event: CombatEvent);
}

impl EventSink for Vec<CombatEvent> {
    fn emit(&mut self, event: CombatEvent) {
        self.push(event);
    }
}
