use crate::combat::CombatError;
use crate::env::ArmorClass;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Stance};

use super::Ability;

/// Errors from ability use and time passing.
///
/// Every variant except [`AbilityError::Combat`] is raised before any state
/// is touched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AbilityError {
    #[error("{ability} is on cooldown for {remaining} more seconds")]
    OnCooldown { ability: Ability, remaining: u16 },

    #[error("{ability} cannot be used in {stance} stance")]
    WrongStance { ability: Ability, stance: Stance },

    #[error("{0} requires a melee weapon")]
    RequiresMelee(Ability),

    #[error("{0} requires a ranged weapon")]
    RequiresRanged(Ability),

    #[error("{0} requires a shield")]
    RequiresShield(Ability),

    #[error("{ability} cannot be used in {armor} armor")]
    ArmorTooHeavy { ability: Ability, armor: ArmorClass },

    #[error("{0} needs a valid target")]
    InvalidTarget(Ability),

    #[error("{ability} needs {needed} stamina, have {available}")]
    InsufficientStamina {
        ability: Ability,
        needed: u32,
        available: u32,
    },

    #[error("{ability} needs {needed} mana, have {available}")]
    InsufficientMana {
        ability: Ability,
        needed: u32,
        available: u32,
    },

    #[error("{0} could kill you; confirm to use it anyway")]
    ConfirmationRequired(Ability),

    #[error("interrupted")]
    Interrupted,

    #[error("combatant {0} not found")]
    ActorNotFound(EntityId),

    #[error("combatant {0} is dead")]
    ActorDead(EntityId),

    #[error(transparent)]
    Combat(#[from] CombatError),
}

impl GameError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OnCooldown { .. }
            | Self::InsufficientStamina { .. }
            | Self::InsufficientMana { .. }
            | Self::ConfirmationRequired(_)
            | Self::Interrupted => ErrorSeverity::Recoverable,
            Self::WrongStance { .. }
            | Self::RequiresMelee(_)
            | Self::RequiresRanged(_)
            | Self::RequiresShield(_)
            | Self::ArmorTooHeavy { .. }
            | Self::InvalidTarget(_)
            | Self::ActorNotFound(_)
            | Self::ActorDead(_) => ErrorSeverity::Validation,
            Self::Combat(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OnCooldown { .. } => "ABILITY_ON_COOLDOWN",
            Self::WrongStance { .. } => "ABILITY_WRONG_STANCE",
            Self::RequiresMelee(_) => "ABILITY_REQUIRES_MELEE",
            Self::RequiresRanged(_) => "ABILITY_REQUIRES_RANGED",
            Self::RequiresShield(_) => "ABILITY_REQUIRES_SHIELD",
            Self::ArmorTooHeavy { .. } => "ABILITY_ARMOR_TOO_HEAVY",
            Self::InvalidTarget(_) => "ABILITY_INVALID_TARGET",
            Self::InsufficientStamina { .. } => "ABILITY_INSUFFICIENT_STAMINA",
            Self::InsufficientMana { .. } => "ABILITY_INSUFFICIENT_MANA",
            Self::ConfirmationRequired(_) => "ABILITY_CONFIRMATION_REQUIRED",
            Self::Interrupted => "ACTION_INTERRUPTED",
            Self::ActorNotFound(_) => "ACTOR_NOT_FOUND",
            Self::ActorDead(_) => "ACTOR_DEAD",
            Self::Combat(err) => err.error_code(),
        }
    }
}
