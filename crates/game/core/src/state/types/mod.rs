pub mod actor;
pub mod anatomy;
pub mod common;
pub mod stance;

// Re-export combatant types
pub use actor::{
    Buff, BuffDuration, BuffKind, BuffLedger, CombatTags, Combatant, CombatantBuilder, EquipSlot,
    Equipment, EquipmentBuilder, InventorySlot, InventoryState, Skill, SkillLevels, Stacking,
};

// Re-export anatomy tables
pub use anatomy::{Anatomy, BodyPart, HitLocation};

// Re-export common types
pub use common::{EntityId, ItemHandle, ResourceMeter, RoomId};

pub use stance::{Stance, StanceSet};
