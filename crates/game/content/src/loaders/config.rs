//! Balance table loader.

use std::path::Path;

use combat_core::CombatTables;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`CombatTables`] from TOML files.
///
/// Every table and field is optional; anything missing keeps its shipped
/// default.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load tables from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatTables> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML at {}: {}", path.display(), e))
    }

    /// Parse tables from TOML text.
    pub fn parse(content: &str) -> LoadResult<CombatTables> {
        let tables: CombatTables = toml::from_str(content)?;
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), CombatTables::default());
    }

    #[test]
    fn partial_tables_overlay_defaults() {
        let tables = ConfigLoader::parse(
            r#"
            [hit]
            base_hit = 70.0

            [abilities]
            lady_luck_waives_mana_cost = false

            [abilities.grit]
            sp_cost = 5
            "#,
        )
        .unwrap();

        let defaults = CombatTables::default();
        assert_eq!(tables.hit.base_hit, 70.0);
        assert_eq!(tables.hit.base_parry, defaults.hit.base_parry);
        assert!(!tables.abilities.lady_luck_waives_mana_cost);
        assert_eq!(tables.abilities.grit.sp_cost, 5);
        // A partially specified tuning row falls back field by field.
        assert_eq!(tables.abilities.grit.cooldown, 0);
        assert_eq!(tables.damage, defaults.damage);
    }

    #[test]
    fn loads_from_disk_and_reports_bad_syntax() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ai]\nwander_chance = 50").unwrap();
        let tables = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(tables.ai.wander_chance, 50);

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "[ai\nwander_chance = ").unwrap();
        let err = ConfigLoader::load(broken.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse tables TOML"));
    }
}
