//! Balance tables and compile-time capacities.
//!
//! Every number that shapes a combat outcome lives here. The `Default` impls
//! carry the shipped values; content loaders overlay `tables.toml` on top of
//! them, so a table file only needs the fields it changes.

/// All tunable combat tables.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatTables {
    pub hit: HitTable,
    pub damage: DamageTable,
    pub afflictions: AfflictionTable,
    pub abilities: AbilityTable,
    pub ai: AiTable,
    pub experience: ExperienceTable,
    pub time: TimeTable,
}

impl CombatTables {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_INVENTORY_SLOTS: usize = 16;
}

/// Hit, parry and block chances. All chances are percentages.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HitTable {
    pub base_hit: f32,
    pub rapid_strike_penalty: f32,
    pub snap_shot_penalty: f32,

    // Wield archetype multipliers.
    pub dual_wield_multiplier: f32,
    pub single_wield_multiplier: f32,
    pub sword_and_board_multiplier: f32,

    /// Added on a favorable stance matchup, subtracted on an unfavorable one.
    pub stance_adjustment: f32,
    /// Applied to hit chance against an agile defender.
    pub agile_defender_multiplier: f32,
    /// Applied to hit chance against a clumsy defender.
    pub clumsy_defender_multiplier: f32,

    pub base_parry: f32,
    pub two_handed_parry_penalty: f32,
    pub parry_per_level: f32,
    /// Parry multiplier when the defender is agile or the attacker clumsy.
    pub parry_advantage_multiplier: f32,
    /// Parry multiplier when the defender is clumsy or the attacker agile.
    pub parry_disadvantage_multiplier: f32,

    pub base_block: f32,
    pub block_per_level: f32,
}

impl Default for HitTable {
    fn default() -> Self {
        Self {
            base_hit: 80.0,
            rapid_strike_penalty: 10.0,
            snap_shot_penalty: 15.0,
            dual_wield_multiplier: 0.9,
            single_wield_multiplier: 1.1,
            sword_and_board_multiplier: 1.0,
            stance_adjustment: 10.0,
            agile_defender_multiplier: 0.8,
            clumsy_defender_multiplier: 1.2,
            base_parry: 10.0,
            two_handed_parry_penalty: 5.0,
            parry_per_level: 1.0,
            parry_advantage_multiplier: 1.25,
            parry_disadvantage_multiplier: 0.75,
            base_block: 20.0,
            block_per_level: 1.0,
        }
    }
}

/// Damage multipliers, the strength ladder and the armor matrix.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageTable {
    pub melee_multiplier: f32,
    pub skill_bonus_per_level: f32,

    /// Damage dealt by stance: aggressive, balanced, defensive.
    pub stance_dealt: [f32; 3],
    /// Damage taken by stance: aggressive, balanced, defensive.
    pub stance_taken: [f32; 3],

    pub hand_and_a_half_bonus: f32,
    pub single_wield_crit_bonus: f32,
    pub crit_multiplier: f32,

    /// Strength ladder: anemic, feeble, puny, strong, brawny, vigorous, mighty.
    pub strength: [f32; 7],

    /// Absorption multipliers. Rows are damage types (edged, piercing,
    /// impact, rending), columns are armor classes (none, light, medium,
    /// heavy).
    pub armor_modifiers: [[f32; 4]; 4],

    /// Fraction either side of the computed damage.
    pub damage_variance: f32,
    /// Fraction either side of the computed absorption.
    pub absorb_variance: f32,

    // Fallback weapon for empty hands.
    pub unarmed_power: f32,
    pub unarmed_speed: f32,
    pub unarmed_crit: f32,
}

impl Default for DamageTable {
    fn default() -> Self {
        Self {
            melee_multiplier: 1.5,
            skill_bonus_per_level: 0.25,
            stance_dealt: [1.25, 1.0, 0.75],
            stance_taken: [1.2, 1.0, 0.8],
            hand_and_a_half_bonus: 1.25,
            single_wield_crit_bonus: 5.0,
            crit_multiplier: 3.0,
            strength: [0.5, 0.7, 0.85, 1.15, 1.3, 1.5, 1.75],
            armor_modifiers: [
                [1.0, 1.0, 1.25, 1.5],
                [1.0, 0.75, 0.5, 1.0],
                [1.0, 1.25, 1.0, 0.5],
                [1.0, 0.5, 1.0, 1.25],
            ],
            damage_variance: 0.25,
            absorb_variance: 0.10,
            unarmed_power: 2.0,
            unarmed_speed: 2.0,
            unarmed_crit: 5.0,
        }
    }
}

/// Bleed and poison roll ranges.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AfflictionTable {
    pub bleed_duration_min: u32,
    pub bleed_duration_max: u32,
    pub bleed_divisor_base: u32,
    pub bleed_divisor_range: u32,
    pub blood_mark_intensity: u8,

    pub poison_duration_min: u32,
    pub poison_duration_max: u32,
    pub poison_divisor_base: u32,
    pub poison_divisor_range: u32,
}

impl Default for AfflictionTable {
    fn default() -> Self {
        Self {
            bleed_duration_min: 3,
            bleed_duration_max: 8,
            bleed_divisor_base: 5,
            bleed_divisor_range: 5,
            blood_mark_intensity: 3,
            poison_duration_min: 5,
            poison_duration_max: 10,
            poison_divisor_base: 8,
            poison_divisor_range: 8,
        }
    }
}

/// Cost, timing and effect of one ability.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbilityTuning {
    pub hp_cost: u32,
    pub sp_cost: u32,
    pub mp_cost: u32,
    pub cooldown: u16,
    /// Seconds passed before the effect applies. Zero skips time passing.
    pub cast_time: f32,
    pub power: f32,
    pub duration: u16,
    /// Attack speed multiplier for abilities that swing.
    pub speed_multiplier: f32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbilityTable {
    pub careful_aim: AbilityTuning,
    pub eye_for_an_eye: AbilityTuning,
    pub grit: AbilityTuning,
    pub headlong_strike: AbilityTuning,
    pub lady_luck: AbilityTuning,
    pub quick_roll: AbilityTuning,
    pub rapid_strike: AbilityTuning,
    pub shield_wall: AbilityTuning,
    pub snap_shot: AbilityTuning,

    /// Duration of the SnakeEyes debuff on a double one.
    pub snake_eyes_duration: u16,
    /// Forced wait, in seconds, on a double one.
    pub snake_eyes_wait: f32,
    /// Lets LadyLuck proceed without enough mana, skipping the cost. Each
    /// skip is reported as [`crate::CombatEvent::ManaWaived`].
    pub lady_luck_waives_mana_cost: bool,
}

impl Default for AbilityTable {
    fn default() -> Self {
        let tuning = AbilityTuning::default();
        Self {
            careful_aim: AbilityTuning {
                sp_cost: 10,
                cooldown: 30,
                cast_time: 2.0,
                power: 25.0,
                duration: 20,
                ..tuning
            },
            eye_for_an_eye: AbilityTuning {
                hp_cost: 10,
                cooldown: 60,
                cast_time: 1.0,
                power: 3.0,
                duration: 10,
                ..tuning
            },
            grit: AbilityTuning {
                sp_cost: 20,
                cooldown: 60,
                cast_time: 1.0,
                power: 50.0,
                duration: 30,
                ..tuning
            },
            headlong_strike: AbilityTuning {
                hp_cost: 5,
                sp_cost: 15,
                cooldown: 30,
                speed_multiplier: 0.5,
                ..tuning
            },
            lady_luck: AbilityTuning {
                mp_cost: 10,
                cooldown: 120,
                cast_time: 1.0,
                ..tuning
            },
            quick_roll: AbilityTuning {
                sp_cost: 10,
                cooldown: 30,
                power: 50.0,
                duration: 10,
                ..tuning
            },
            rapid_strike: AbilityTuning {
                sp_cost: 15,
                cooldown: 20,
                speed_multiplier: 0.5,
                ..tuning
            },
            shield_wall: AbilityTuning {
                sp_cost: 15,
                cooldown: 60,
                cast_time: 1.0,
                power: 50.0,
                duration: 20,
                ..tuning
            },
            snap_shot: AbilityTuning {
                sp_cost: 10,
                cooldown: 20,
                speed_multiplier: 0.5,
                ..tuning
            },
            snake_eyes_duration: 10,
            snake_eyes_wait: 5.0,
            lady_luck_waives_mana_cost: true,
        }
    }
}

/// NPC decision thresholds. Chances are percentages.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiTable {
    pub recently_fled_duration: u16,
    pub defensive_own_hp: f32,
    pub aggressive_target_hp: f32,
    pub defensive_ratio: f32,
    pub aggressive_ratio: f32,
    pub counter_stance_chance: u32,
    pub random_stance_chance: u32,
    pub aggro_chance: u32,
    pub wander_chance: u32,
    /// Upper bound on a banked NPC action timer.
    pub timer_cap: f32,
}

impl Default for AiTable {
    fn default() -> Self {
        Self {
            recently_fled_duration: 10,
            defensive_own_hp: 0.25,
            aggressive_target_hp: 0.25,
            defensive_ratio: 0.5,
            aggressive_ratio: 2.0,
            counter_stance_chance: 10,
            random_stance_chance: 5,
            aggro_chance: 33,
            wander_chance: 5,
            timer_cap: 30.0,
        }
    }
}

/// Skill experience granted to the player.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExperienceTable {
    pub dodge: u32,
    pub hit: u32,
    pub critical: u32,
    pub block: u32,
}

impl Default for ExperienceTable {
    fn default() -> Self {
        Self {
            dodge: 1,
            hit: 1,
            critical: 2,
            block: 1,
        }
    }
}

/// Time costs and regeneration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimeTable {
    /// Global multiplier on every weapon speed.
    pub attack_speed_multiplier: f32,
    pub stance_change_time: f32,
    pub sp_regen_per_tick: u32,
    /// While starving, stamina regenerates once every this many ticks.
    pub starving_regen_divisor: u32,
}

impl Default for TimeTable {
    fn default() -> Self {
        Self {
            attack_speed_multiplier: 1.0,
            stance_change_time: 1.0,
            sp_regen_per_tick: 1,
            starving_regen_divisor: 4,
        }
    }
}
