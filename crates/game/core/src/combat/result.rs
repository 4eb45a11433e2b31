//! Swing outcomes and combat errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{BodyPart, EntityId, ItemHandle};

/// Outcome of one hand's swing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwingOutcome {
    Evaded,
    Parried,
    Hit {
        /// Hit points removed from the defender.
        damage: u32,
        absorbed: u32,
        critical: bool,
        blocked: bool,
        location: BodyPart,
    },
}

impl SwingOutcome {
    pub fn damage(&self) -> u32 {
        match self {
            SwingOutcome::Hit { damage, .. } => *damage,
            _ => 0,
        }
    }

    pub fn landed(&self) -> bool {
        matches!(self, SwingOutcome::Hit { .. })
    }
}

/// Broken data invariants met while resolving combat.
///
/// These indicate bad content (an item handle the catalog does not know, an
/// anatomy table with a gap) and are never expected during play.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("item {handle} equipped by {owner} is not in the catalog")]
    UnknownItem { owner: EntityId, handle: ItemHandle },

    #[error("anatomy of {defender} has no location for roll {roll}")]
    HitLocationUnresolved { defender: EntityId, roll: u32 },

    #[error("{attacker} has no attack speed for wield configuration {wield}")]
    MissingAttackSpeed { attacker: EntityId, wield: &'static str },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownItem { .. } => "COMBAT_UNKNOWN_ITEM",
            Self::HitLocationUnresolved { .. } => "COMBAT_HIT_LOCATION_UNRESOLVED",
            Self::MissingAttackSpeed { .. } => "COMBAT_MISSING_ATTACK_SPEED",
        }
    }
}
