//! Item catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::specs::ItemSpec;

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogRon {
    pub items: Vec<ItemSpec>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// Names and handles must both be unique.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemSpec>> {
        let catalog: ItemCatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut names = BTreeSet::new();
        let mut handles = BTreeSet::new();
        for item in &catalog.items {
            if !names.insert(item.name.as_str()) {
                anyhow::bail!("Duplicate item name '{}'", item.name);
            }
            if !handles.insert(item.handle) {
                anyhow::bail!("Duplicate item handle {} ('{}')", item.handle, item.name);
            }
        }

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use combat_core::env::{ArmorClass, WeaponFlags};
    use combat_core::{ItemHandle, ItemKind};

    use super::*;

    const CATALOG: &str = r#"
    (
        items: [
            (
                name: "longbow",
                handle: ItemHandle(2),
                kind: Weapon((
                    damage_type: Piercing,
                    power: 6.0,
                    speed: 3.0,
                    crit: 5.0,
                    bleed: 0.0,
                    poison: 0.0,
                    flags: ("TWO_HANDED | RANGED | AMMO_REQUIRED"),
                    ammo_type: 1,
                    skill: Archery,
                )),
            ),
            (
                name: "buckler",
                handle: ItemHandle(4),
                kind: Shield((class: Light, power: 20.0)),
                modifiers: (block: 5.0),
            ),
            (name: "torch", handle: ItemHandle(6), kind: Other),
        ],
    )
    "#;

    #[test]
    fn parses_named_items() {
        let items = ItemLoader::parse(CATALOG).unwrap();
        assert_eq!(items.len(), 3);

        let bow = items[0].definition();
        let weapon = bow.weapon().unwrap();
        assert!(weapon.flags.contains(WeaponFlags::RANGED | WeaponFlags::AMMO_REQUIRED));
        assert_eq!(weapon.ammo_type, 1);

        let buckler = items[1].definition();
        assert_eq!(buckler.armor().unwrap().class, ArmorClass::Light);
        assert_eq!(buckler.modifiers.block, 5.0);
        assert_eq!(buckler.modifiers.dodge, 0.0);

        assert_eq!(items[2].handle, ItemHandle(6));
        assert_eq!(items[2].kind, ItemKind::Other);
    }

    #[test]
    fn rejects_duplicates() {
        let err = ItemLoader::parse(
            r#"(items: [
                (name: "torch", handle: ItemHandle(1), kind: Other),
                (name: "torch", handle: ItemHandle(2), kind: Other),
            ])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate item name"));

        let err = ItemLoader::parse(
            r#"(items: [
                (name: "torch", handle: ItemHandle(1), kind: Other),
                (name: "lantern", handle: ItemHandle(1), kind: Other),
            ])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate item handle"));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.ron");
        std::fs::write(&path, CATALOG).unwrap();
        assert_eq!(ItemLoader::load(&path).unwrap().len(), 3);
        assert!(ItemLoader::load(&dir.path().join("missing.ron")).is_err());
    }
}
