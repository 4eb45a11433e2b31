//! Skill levels. Only the player's levels feed combat formulas.

use strum::EnumCount;

/// Trainable skills referenced by combat.
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
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Skill {
    // ===== weapon skills =====
    Blades,
    Bludgeons,
    Polearms,
    Archery,
    Unarmed,

    // ===== defense =====
    Dodge,
    Parry,
    Block,
}

/// One level per skill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillLevels {
    levels: [u8; Skill::COUNT],
}

impl SkillLevels {
    pub fn level(&self, skill: Skill) -> u8 {
        self.levels[skill as usize]
    }

    pub fn set(&mut self, skill: Skill, level: u8) {
        self.levels[skill as usize] = level;
    }

    pub fn with(mut self, skill: Skill, level: u8) -> Self {
        self.set(skill, level);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_default_to_zero() {
        let levels = SkillLevels::default().with(Skill::Parry, 4);
        assert_eq!(levels.level(Skill::Parry), 4);
        assert_eq!(levels.level(Skill::Block), 0);
    }
}
