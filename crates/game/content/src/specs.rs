//! Content records as they appear in data files.
//!
//! Specs reference items by catalog name rather than handle so data files
//! stay readable. The runtime resolves names when it spawns combatants.

use combat_core::env::{EquipModifiers, Exit, ItemDefinition, ItemKind};
use combat_core::state::{Anatomy, CombatTags, EquipSlot, ItemHandle, RoomId, Skill, Stance};

/// One named entry of the item catalog.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpec {
    pub name: String,
    pub handle: ItemHandle,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: EquipModifiers,
}

impl ItemSpec {
    pub fn definition(&self) -> ItemDefinition {
        ItemDefinition::new(self.handle, self.kind).with_modifiers(self.modifiers)
    }
}

/// One room of the world graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSpec {
    pub id: RoomId,
    pub name: String,
    /// Seconds needed to leave the room.
    #[cfg_attr(feature = "serde", serde(default = "default_travel_time"))]
    pub travel_time: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exits: Vec<Exit>,
}

#[cfg(feature = "serde")]
fn default_travel_time() -> f32 {
    1.0
}

/// Body plan used for hit locations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnatomyKind {
    #[default]
    Humanoid,
    Beast,
}

impl AnatomyKind {
    pub fn table(self) -> Anatomy {
        match self {
            AnatomyKind::Humanoid => Anatomy::humanoid(),
            AnatomyKind::Beast => Anatomy::beast(),
        }
    }
}

/// Template a combatant is spawned from.
///
/// Omitted fields take the values of [`ActorSpec::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActorSpec {
    pub name: String,
    pub hp: u32,
    pub sp: u32,
    pub mp: u32,
    pub stance: Stance,
    pub tags: CombatTags,
    pub anatomy: AnatomyKind,
    /// Item names by slot.
    pub equipment: Vec<(EquipSlot, String)>,
    /// Item names and stack sizes.
    pub inventory: Vec<(String, u16)>,
    pub skills: Vec<(Skill, u8)>,
}

impl Default for ActorSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            hp: 100,
            sp: 100,
            mp: 50,
            stance: Stance::Balanced,
            tags: CombatTags::empty(),
            anatomy: AnatomyKind::Humanoid,
            equipment: Vec::new(),
            inventory: Vec::new(),
            skills: Vec::new(),
        }
    }
}

/// The player template plus every NPC template.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorCatalog {
    pub player: ActorSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub npcs: Vec<ActorSpec>,
}

impl ActorCatalog {
    pub fn npc(&self, name: &str) -> Option<&ActorSpec> {
        self.npcs.iter().find(|spec| spec.name == name)
    }
}
