//! Actor catalog loader.
//!
//! Loads the player template and every NPC template from one RON file.

use std::collections::BTreeSet;
use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::specs::ActorCatalog;

/// Loader for actor templates from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load the actor catalog from a RON file.
    ///
    /// RON format: `(player: ActorSpec, npcs: [ActorSpec])`. NPC names must
    /// be unique since the runtime spawns NPCs by name. Item names are
    /// resolved later against the item catalog.
    pub fn load(path: &Path) -> LoadResult<ActorCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ActorCatalog> {
        let catalog: ActorCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        let mut names = BTreeSet::new();
        for npc in &catalog.npcs {
            if npc.name.is_empty() {
                anyhow::bail!("NPC template without a name");
            }
            if !names.insert(npc.name.as_str()) {
                anyhow::bail!("Duplicate NPC template '{}'", npc.name);
            }
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use combat_core::state::{EquipSlot, Skill};
    use combat_core::{CombatTags, Stance};

    use super::*;
    use crate::specs::AnatomyKind;

    #[test]
    fn omitted_fields_take_defaults() {
        let catalog = ActorLoader::parse(
            r#"(
                player: (
                    name: "hero",
                    equipment: [(MainHand, "short_sword")],
                    skills: [(Blades, 3)],
                ),
                npcs: [
                    (
                        name: "wolf",
                        hp: 40,
                        stance: Aggressive,
                        tags: ("AGGRO_ON_SIGHT | AGILE"),
                        anatomy: Beast,
                    ),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.player.hp, 100);
        assert_eq!(catalog.player.mp, 50);
        assert_eq!(
            catalog.player.equipment,
            vec![(EquipSlot::MainHand, "short_sword".to_string())]
        );
        assert_eq!(catalog.player.skills, vec![(Skill::Blades, 3)]);

        let wolf = catalog.npc("wolf").unwrap();
        assert_eq!(wolf.hp, 40);
        assert_eq!(wolf.stance, Stance::Aggressive);
        assert!(wolf.tags.contains(CombatTags::AGILE));
        assert_eq!(wolf.anatomy, AnatomyKind::Beast);
        assert!(catalog.npc("dragon").is_none());
    }

    #[test]
    fn rejects_duplicate_templates() {
        let err = ActorLoader::parse(
            r#"(player: (name: "hero"), npcs: [(name: "rat"), (name: "rat")])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate NPC template"));
    }
}
