//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from content loading, template resolution and the engine
//! so callers can bubble them up with consistent context.
use combat_core::{AbilityError, CombatError, ErrorSeverity, GameError, RoomId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to load content")]
    Content(#[source] anyhow::Error),

    #[error("template '{actor}' references unknown item '{item}'")]
    UnknownItem { actor: String, item: String },

    #[error("template '{actor}' carries more item stacks than fit in an inventory")]
    InventoryFull { actor: String },

    #[error("no NPC template named '{0}'")]
    UnknownTemplate(String),

    #[error("{0} is not part of the room graph")]
    UnknownRoom(RoomId),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    Ability(#[from] AbilityError),
}

impl RuntimeError {
    /// Severity of the underlying failure. Content and template problems
    /// are fatal: the world cannot be built from them.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Combat(err) => err.severity(),
            Self::Ability(err) => err.severity(),
            _ => ErrorSeverity::Fatal,
        }
    }
}
