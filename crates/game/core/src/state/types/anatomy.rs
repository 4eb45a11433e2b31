//! Anatomy tables used for hit location.
//!
//! Each entry carries a cumulative threshold on a 0-99 roll. The first entry
//! whose threshold exceeds the roll is struck, and its equipment slot decides
//! which armor piece mitigates the blow.

use arrayvec::ArrayVec;

use super::actor::EquipSlot;

/// Named body region, used for narration.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BodyPart {
    Head,
    Torso,
    Arms,
    Hands,
    Legs,
    Feet,
    Tail,
    Wings,
}

/// One row of an anatomy table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitLocation {
    /// Cumulative hit chance; entry is struck when `roll < threshold`.
    pub threshold: u8,
    pub slot: EquipSlot,
    pub part: BodyPart,
}

impl HitLocation {
    pub const fn new(threshold: u8, slot: EquipSlot, part: BodyPart) -> Self {
        Self {
            threshold,
            slot,
            part,
        }
    }
}

/// Ordered anatomy table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anatomy {
    pub locations: ArrayVec<HitLocation, { Anatomy::MAX_LOCATIONS }>,
}

impl Anatomy {
    pub const MAX_LOCATIONS: usize = 8;

    /// Standard two-armed, two-legged body.
    pub fn humanoid() -> Self {
        Self::from_rows(&[
            HitLocation::new(10, EquipSlot::Head, BodyPart::Head),
            HitLocation::new(55, EquipSlot::Body, BodyPart::Torso),
            HitLocation::new(70, EquipSlot::Body, BodyPart::Arms),
            HitLocation::new(75, EquipSlot::Hands, BodyPart::Hands),
            HitLocation::new(95, EquipSlot::Legs, BodyPart::Legs),
            HitLocation::new(100, EquipSlot::Feet, BodyPart::Feet),
        ])
    }

    /// Four-legged body with a tail.
    pub fn beast() -> Self {
        Self::from_rows(&[
            HitLocation::new(15, EquipSlot::Head, BodyPart::Head),
            HitLocation::new(65, EquipSlot::Body, BodyPart::Torso),
            HitLocation::new(90, EquipSlot::Legs, BodyPart::Legs),
            HitLocation::new(100, EquipSlot::Body, BodyPart::Tail),
        ])
    }

    /// Builds a table from rows, keeping at most [`Self::MAX_LOCATIONS`].
    pub fn from_rows(rows: &[HitLocation]) -> Self {
        Self {
            locations: rows.iter().copied().take(Self::MAX_LOCATIONS).collect(),
        }
    }

    /// True when the last threshold covers every roll in 0..100.
    pub fn covers_all_rolls(&self) -> bool {
        self.locations.iter().any(|l| l.threshold >= 100)
    }
}

impl Default for Anatomy {
    fn default() -> Self {
        Self::humanoid()
    }
}
