//! Damage formulas.
//!
//! Everything here works on `f32` until the variance step, which produces
//! the integer hit point amounts that are actually applied.

use crate::config::DamageTable;
use crate::env::{ArmorClass, DamageType};
use crate::state::CombatTags;

const fn damage_row(damage_type: DamageType) -> usize {
    match damage_type {
        DamageType::Edged => 0,
        DamageType::Piercing => 1,
        DamageType::Impact => 2,
        DamageType::Rending => 3,
    }
}

const fn armor_column(class: ArmorClass) -> usize {
    match class {
        ArmorClass::None => 0,
        ArmorClass::Light => 1,
        ArmorClass::Medium => 2,
        ArmorClass::Heavy => 3,
    }
}

/// Absorption multiplier for a damage type striking an armor class.
pub fn armor_modifier(damage_type: DamageType, class: ArmorClass, table: &DamageTable) -> f32 {
    table.armor_modifiers[damage_row(damage_type)][armor_column(class)]
}

/// Fraction of damage a piece of armor soaks, clamped to [0, 1].
pub fn absorption_fraction(
    armor_power: f32,
    damage_type: DamageType,
    class: ArmorClass,
    table: &DamageTable,
) -> f32 {
    (armor_power * armor_modifier(damage_type, class, table) / 100.0).clamp(0.0, 1.0)
}

/// Weapon power before stance and crits.
///
/// Melee weapons scale by the melee multiplier, ranged weapons by the power
/// of the ammunition they fire. `skill_level` is the player's level in the
/// weapon's skill, 0 for NPCs.
pub fn base_damage(
    weapon_power: f32,
    ammo_power: Option<f32>,
    skill_level: u8,
    table: &DamageTable,
) -> f32 {
    let scaled = match ammo_power {
        Some(ammo) => weapon_power * ammo,
        None => weapon_power * table.melee_multiplier,
    };
    scaled + f32::from(skill_level) * table.skill_bonus_per_level
}

/// Strength ladder multiplier. Tags are checked weakest first; the first one
/// present wins.
pub fn strength_multiplier(tags: CombatTags, table: &DamageTable) -> f32 {
    const LADDER: [CombatTags; 7] = [
        CombatTags::ANEMIC,
        CombatTags::FEEBLE,
        CombatTags::PUNY,
        CombatTags::STRONG,
        CombatTags::BRAWNY,
        CombatTags::VIGOROUS,
        CombatTags::MIGHTY,
    ];
    LADDER
        .iter()
        .position(|tag| tags.contains(*tag))
        .map_or(1.0, |i| table.strength[i])
}

/// Eye-for-an-Eye scaling: the more hurt the attacker, the harder the blow.
pub fn eye_for_an_eye_multiplier(attacker_hp_fraction: f32, power: f32) -> f32 {
    (1.0 - attacker_hp_fraction).max(0.0) * power
}

/// Extra absorption granted by Grit.
///
/// Moves up to `grit_power` percent of the damage into absorption while
/// leaving at least one point unmitigated.
pub fn grit_absorption(damage: f32, absorbed: f32, grit_power: f32) -> f32 {
    let headroom = (damage - absorbed - 1.0).max(0.0);
    (damage * grit_power / 100.0).min(headroom)
}

/// Applies damage variance. `roll` is a uniform draw in [0, 1).
///
/// Positive damage never varies below 1.
pub fn vary_damage(damage: f32, roll: f32, table: &DamageTable) -> u32 {
    if damage <= 0.0 {
        return 0;
    }
    let spread = table.damage_variance;
    let varied = damage * (1.0 - spread + 2.0 * spread * roll);
    (varied.round() as u32).max(1)
}

/// Applies absorption variance. `roll` is a uniform draw in [0, 1).
pub fn vary_absorbed(absorbed: f32, roll: f32, table: &DamageTable) -> u32 {
    if absorbed <= 0.0 {
        return 0;
    }
    let spread = table.absorb_variance;
    (absorbed * (1.0 - spread + 2.0 * spread * roll)).round() as u32
}

/// Final hit point loss: absorption is clamped to the damage first.
pub fn mitigate(damage: u32, absorbed: u32) -> (u32, u32) {
    let absorbed = absorbed.min(damage);
    (damage - absorbed, absorbed)
}
