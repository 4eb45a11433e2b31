//! Deterministic combat rules for a room-based world.
//!
//! `combat-core` owns the canonical rules (attack resolution, abilities,
//! buffs, NPC decisions) and the state they operate on. It performs no I/O:
//! items, rooms and balance tables arrive through the [`env`] oracles,
//! randomness through [`env::RngOracle`] and every observable outcome leaves
//! through [`event::EventSink`]. All state mutation flows through
//! [`engine::GameEngine`].
pub mod ability;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use ability::{Ability, AbilityError, LuckOutcome};
pub use ai::AiDecision;
pub use combat::{CombatError, Hand, SwingOutcome, Wield, WieldKind};
pub use config::CombatTables;
pub use engine::GameEngine;
pub use env::{
    ArmorClass, DamageType, Direction, Exit, ExitFlags, GameEnv, ItemDefinition, ItemKind,
    ItemOracle, MapOracle, PcgRng, RngOracle, SequenceRng,
};
pub use error::{ErrorSeverity, GameError};
pub use event::{CombatEvent, EventSink, MarkKind};
pub use state::{
    BuffKind, CombatTags, Combatant, EntityId, Equipment, GameState, InventoryState, ItemHandle,
    ResourceMeter, RoomId, Skill, SkillLevels, Stacking, Stance,
};
