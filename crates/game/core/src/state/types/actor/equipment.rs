//! Equipment slots for combatants.
//!
//! Slots reference items by [`ItemHandle`]; item data lives in the item
//! catalog behind [`ItemOracle`](crate::env::ItemOracle).

use strum::EnumCount;

use crate::state::types::ItemHandle;

/// Equipment slots. The two hand slots drive wield classification, the rest
/// are armor slots selected by hit location.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    MainHand,
    OffHand,
    Head,
    Body,
    Hands,
    Legs,
    Feet,
}

impl EquipSlot {
    const fn index(self) -> usize {
        self as usize
    }
}

/// Items currently equipped, one optional handle per slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    slots: [Option<ItemHandle>; EquipSlot::COUNT],
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing equipment.
    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<ItemHandle> {
        self.slots[slot.index()]
    }

    /// Equips an item, returning the previously equipped handle if any.
    pub fn equip(&mut self, slot: EquipSlot, handle: ItemHandle) -> Option<ItemHandle> {
        self.slots[slot.index()].replace(handle)
    }

    /// Empties a slot, returning its handle if any was equipped.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<ItemHandle> {
        self.slots[slot.index()].take()
    }

    /// All equipped handles, hand slots included.
    pub fn equipped(&self) -> impl Iterator<Item = ItemHandle> + '_ {
        self.slots.iter().flatten().copied()
    }
}

/// Builder for constructing equipment.
#[derive(Default)]
pub struct EquipmentBuilder {
    equipment: Equipment,
}

impl EquipmentBuilder {
    pub fn main_hand(self, handle: ItemHandle) -> Self {
        self.slot(EquipSlot::MainHand, handle)
    }

    pub fn off_hand(self, handle: ItemHandle) -> Self {
        self.slot(EquipSlot::OffHand, handle)
    }

    pub fn slot(mut self, slot: EquipSlot, handle: ItemHandle) -> Self {
        self.equipment.equip(slot, handle);
        self
    }

    pub fn build(self) -> Equipment {
        self.equipment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equip_returns_previous_item() {
        let mut equipment = Equipment::empty();
        assert_eq!(equipment.equip(EquipSlot::MainHand, ItemHandle(1)), None);
        assert_eq!(
            equipment.equip(EquipSlot::MainHand, ItemHandle(2)),
            Some(ItemHandle(1))
        );
        assert_eq!(equipment.unequip(EquipSlot::MainHand), Some(ItemHandle(2)));
        assert_eq!(equipment.get(EquipSlot::MainHand), None);
    }

    #[test]
    fn builder_fills_slots() {
        let equipment = Equipment::builder()
            .main_hand(ItemHandle(1))
            .off_hand(ItemHandle(2))
            .slot(EquipSlot::Body, ItemHandle(3))
            .build();
        assert_eq!(equipment.equipped().count(), 3);
        assert_eq!(equipment.get(EquipSlot::Body), Some(ItemHandle(3)));
    }
}
