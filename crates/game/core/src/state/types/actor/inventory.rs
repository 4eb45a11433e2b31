//! Carried item stacks (ammunition and anything else a combatant holds).

use arrayvec::ArrayVec;

use crate::config::CombatTables;
use crate::state::types::ItemHandle;

/// Inventory slot containing an item and its quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub handle: ItemHandle,
    pub quantity: u16,
}

impl InventorySlot {
    pub fn new(handle: ItemHandle, quantity: u16) -> Self {
        Self { handle, quantity }
    }
}

/// Bounded list of item stacks.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    pub items: ArrayVec<InventorySlot, { CombatTables::MAX_INVENTORY_SLOTS }>,
}

impl InventoryState {
    pub fn empty() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    /// Adds to an existing stack of the same item or opens a new one.
    ///
    /// Returns false if a new stack was needed and every slot is taken.
    pub fn add(&mut self, handle: ItemHandle, quantity: u16) -> bool {
        if let Some(slot) = self.items.iter_mut().find(|s| s.handle == handle) {
            slot.quantity = slot.quantity.saturating_add(quantity);
            return true;
        }
        self.items
            .try_push(InventorySlot::new(handle, quantity))
            .is_ok()
    }

    pub fn quantity(&self, handle: ItemHandle) -> u16 {
        self.items
            .iter()
            .find(|s| s.handle == handle)
            .map_or(0, |s| s.quantity)
    }

    /// Removes one item from a stack, dropping the stack when it empties.
    ///
    /// Returns false if no such stack exists.
    pub fn consume_one(&mut self, handle: ItemHandle) -> bool {
        let Some(index) = self.items.iter().position(|s| s.handle == handle) else {
            return false;
        };
        let slot = &mut self.items[index];
        slot.quantity = slot.quantity.saturating_sub(1);
        if slot.quantity == 0 {
            self.items.remove(index);
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventorySlot> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_merges_stacks() {
        let mut inventory = InventoryState::empty();
        assert!(inventory.add(ItemHandle(7), 10));
        assert!(inventory.add(ItemHandle(7), 5));
        assert_eq!(inventory.items.len(), 1);
        assert_eq!(inventory.quantity(ItemHandle(7)), 15);
    }

    #[test]
    fn consume_drops_empty_stack() {
        let mut inventory = InventoryState::empty();
        inventory.add(ItemHandle(3), 2);

        assert!(inventory.consume_one(ItemHandle(3)));
        assert_eq!(inventory.quantity(ItemHandle(3)), 1);
        assert!(inventory.consume_one(ItemHandle(3)));
        assert!(inventory.items.is_empty());
        assert!(!inventory.consume_one(ItemHandle(3)));
    }

    #[test]
    fn add_fails_when_full() {
        let mut inventory = InventoryState::empty();
        for i in 0..CombatTables::MAX_INVENTORY_SLOTS as u32 {
            assert!(inventory.add(ItemHandle(i), 1));
        }
        assert!(!inventory.add(ItemHandle(9999), 1));
    }
}
