//! [`combat_core::ItemOracle`] backed by the named item catalog.
use std::collections::HashMap;

use combat_content::ItemSpec;
use combat_core::{ItemDefinition, ItemHandle, ItemOracle};

/// ItemOracle implementation with static item definitions and their names.
#[derive(Debug, Default)]
pub struct ItemCatalog {
    definitions: HashMap<ItemHandle, ItemDefinition>,
    names: HashMap<String, ItemHandle>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_specs(specs: &[ItemSpec]) -> Self {
        let mut catalog = Self::new();
        for spec in specs {
            catalog.add(spec.name.clone(), spec.definition());
        }
        catalog
    }

    /// Add a named item definition.
    pub fn add(&mut self, name: impl Into<String>, def: ItemDefinition) {
        self.names.insert(name.into(), def.handle);
        self.definitions.insert(def.handle, def);
    }

    pub fn handle(&self, name: &str) -> Option<ItemHandle> {
        self.names.get(name).copied()
    }

    pub fn name(&self, handle: ItemHandle) -> Option<&str> {
        self.names
            .iter()
            .find(|(_, h)| **h == handle)
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.definitions.get(&handle).copied()
    }
}

#[cfg(test)]
mod tests {
    use combat_core::ItemKind;

    use super::*;

    #[test]
    fn resolves_names_both_ways() {
        let mut catalog = ItemCatalog::new();
        catalog.add("torch", ItemDefinition::new(ItemHandle(6), ItemKind::Other));

        assert_eq!(catalog.handle("torch"), Some(ItemHandle(6)));
        assert_eq!(catalog.name(ItemHandle(6)), Some("torch"));
        assert!(catalog.definition(ItemHandle(6)).is_some());
        assert_eq!(catalog.handle("lantern"), None);
        assert_eq!(catalog.len(), 1);
    }
}
