//! Hit, parry and block chances.
//!
//! All chances are percentages compared against a 0-99 roll: the check
//! succeeds when `roll < chance`.

use crate::config::HitTable;
use crate::state::CombatTags;

use super::wield::WieldKind;

/// Everything the hit formula reads, gathered by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitInputs {
    /// Attacker's CarefulAim power, 0 when inactive.
    pub careful_aim: f32,
    pub rapid_strike: bool,
    pub snap_shot: bool,
    /// Defender's QuickRoll power, 0 when inactive.
    pub quick_roll: f32,
    pub attacker_wield: Option<WieldKind>,
    /// Result of [`compare_stances`](super::compare_stances).
    pub stance_edge: i8,
    pub defender_tags: CombatTags,
    /// Sum of the defender's equipped dodge bonuses.
    pub dodge_bonus: f32,
    /// EyeForAnEye, SnakeEyes or Boxcars is in play.
    pub guaranteed: bool,
}

/// Wield archetype multiplier on hit chance.
pub fn wield_multiplier(kind: WieldKind, table: &HitTable) -> f32 {
    match kind {
        WieldKind::DualWield => table.dual_wield_multiplier,
        WieldKind::SingleWield | WieldKind::OneHandExtra => table.single_wield_multiplier,
        WieldKind::OneHandShield => table.sword_and_board_multiplier,
        _ => 1.0,
    }
}

/// Calculate hit chance.
///
/// # Formula
///
/// ```text
/// chance = (base + careful_aim - penalties - quick_roll)
///        * wield + stance_edge * adjustment
///        * agile/clumsy * (1 - dodge / 100)
/// ```
///
/// Forced to exactly 100 against a defender that cannot dodge, or when the
/// hit is guaranteed.
pub fn hit_chance(inputs: &HitInputs, table: &HitTable) -> f32 {
    if inputs.guaranteed || inputs.defender_tags.contains(CombatTags::CANNOT_DODGE) {
        return 100.0;
    }

    let mut chance = table.base_hit + inputs.careful_aim;
    if inputs.rapid_strike {
        chance -= table.rapid_strike_penalty;
    }
    if inputs.snap_shot {
        chance -= table.snap_shot_penalty;
    }
    chance -= inputs.quick_roll;

    if let Some(kind) = inputs.attacker_wield {
        chance *= wield_multiplier(kind, table);
    }
    chance += f32::from(inputs.stance_edge) * table.stance_adjustment;

    if inputs.defender_tags.contains(CombatTags::AGILE) {
        chance *= table.agile_defender_multiplier;
    } else if inputs.defender_tags.contains(CombatTags::CLUMSY) {
        chance *= table.clumsy_defender_multiplier;
    }

    chance *= 1.0 - inputs.dodge_bonus / 100.0;
    chance.clamp(0.0, 100.0)
}

/// Inputs to the parry formula.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParryInputs {
    pub attacker_two_handed: bool,
    /// Defender's parry skill level when the defender is the player.
    pub skill_level: u8,
    pub equipment_bonus: f32,
    pub attacker_tags: CombatTags,
    pub defender_tags: CombatTags,
}

pub fn parry_chance(inputs: &ParryInputs, table: &HitTable) -> f32 {
    let mut chance = table.base_parry;
    if inputs.attacker_two_handed {
        chance -= table.two_handed_parry_penalty;
    }
    chance += f32::from(inputs.skill_level) * table.parry_per_level;
    chance += inputs.equipment_bonus;

    if inputs.defender_tags.contains(CombatTags::AGILE) {
        chance *= table.parry_advantage_multiplier;
    } else if inputs.defender_tags.contains(CombatTags::CLUMSY) {
        chance *= table.parry_disadvantage_multiplier;
    }
    if inputs.attacker_tags.contains(CombatTags::AGILE) {
        chance *= table.parry_disadvantage_multiplier;
    } else if inputs.attacker_tags.contains(CombatTags::CLUMSY) {
        chance *= table.parry_advantage_multiplier;
    }
    chance.clamp(0.0, 100.0)
}

/// Inputs to the block formula.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlockInputs {
    /// Defender's block skill level when the defender is the player.
    pub skill_level: u8,
    /// Defender's ShieldWall power, 0 when inactive.
    pub shield_wall: f32,
    pub equipment_bonus: f32,
}

pub fn block_chance(inputs: &BlockInputs, table: &HitTable) -> f32 {
    let chance = table.base_block
        + f32::from(inputs.skill_level) * table.block_per_level
        + inputs.shield_wall
        + inputs.equipment_bonus;
    chance.clamp(0.0, 100.0)
}

/// True when `roll` (0-99) lands under `chance`.
#[inline]
pub fn check(roll: u32, chance: f32) -> bool {
    (roll as f32) < chance
}
