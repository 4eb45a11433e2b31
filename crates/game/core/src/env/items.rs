use crate::state::{ItemHandle, Skill};

/// Read-only item catalog.
pub trait ItemOracle {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition>;
}

/// Item definition with common fields and type-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds common fields (handle, equipment modifiers)
/// - `kind` enum holds type-specific data (weapon stats, armor class, ammo)
/// - Display names are provided by the catalog separately
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: EquipModifiers,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, kind: ItemKind) -> Self {
        Self {
            handle,
            kind,
            modifiers: EquipModifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: EquipModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn weapon(&self) -> Option<&WeaponData> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    /// Armor data for both body armor and shields.
    pub fn armor(&self) -> Option<&ArmorData> {
        match &self.kind {
            ItemKind::Armor(armor) | ItemKind::Shield(armor) => Some(armor),
            _ => None,
        }
    }

    pub fn ammo(&self) -> Option<&AmmoData> {
        match &self.kind {
            ItemKind::Ammo(ammo) => Some(ammo),
            _ => None,
        }
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon(_))
    }

    pub fn is_shield(&self) -> bool {
        matches!(self.kind, ItemKind::Shield(_))
    }
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon(WeaponData),
    /// Held in a hand; blocks and absorbs on a successful block.
    Shield(ArmorData),
    /// Worn in an armor slot.
    Armor(ArmorData),
    Ammo(AmmoData),
    /// Anything else a hand can hold (torch, lantern, key).
    Other,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    Edged,
    Piercing,
    Impact,
    Rending,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArmorClass {
    #[default]
    None,
    Light,
    Medium,
    Heavy,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct WeaponFlags: u8 {
        const TWO_HANDED      = 1 << 0;
        const HAND_AND_A_HALF = 1 << 1;
        const RANGED          = 1 << 2;
        /// Consumes a matching ammo stack per shot.
        const AMMO_REQUIRED   = 1 << 3;
    }
}

/// Weapon-specific data. Percentages are 0-100.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub damage_type: DamageType,
    pub power: f32,
    /// Seconds per swing.
    pub speed: f32,
    pub crit: f32,
    pub bleed: f32,
    pub poison: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: WeaponFlags,
    /// Ammo family this weapon fires, matched against [`AmmoData::ammo_type`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub ammo_type: u16,
    pub skill: Skill,
}

impl WeaponData {
    pub fn is_ranged(&self) -> bool {
        self.flags.contains(WeaponFlags::RANGED)
    }

    pub fn is_two_handed(&self) -> bool {
        self.flags.contains(WeaponFlags::TWO_HANDED)
    }

    pub fn is_hand_and_a_half(&self) -> bool {
        self.flags.contains(WeaponFlags::HAND_AND_A_HALF)
    }

    pub fn needs_ammo(&self) -> bool {
        self.flags.contains(WeaponFlags::AMMO_REQUIRED)
    }
}

/// Armor and shield data.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    pub class: ArmorClass,
    /// Absorption percentage before the damage-type modifier.
    pub power: f32,
}

/// Ammunition data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmmoData {
    pub ammo_type: u16,
    /// Multiplier on the firing weapon's power.
    pub power: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bleed: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub poison: f32,
}

/// Flat defensive bonuses granted while equipped. Percentages.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquipModifiers {
    pub dodge: f32,
    pub parry: f32,
    pub block: f32,
}

impl core::ops::Add for EquipModifiers {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            dodge: self.dodge + other.dodge,
            parry: self.parry + other.parry,
            block: self.block + other.block,
        }
    }
}
