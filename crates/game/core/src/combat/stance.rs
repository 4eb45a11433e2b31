//! Stance matchups.

use crate::config::DamageTable;
use crate::state::Stance;

/// Compares the attacker's stance against the defender's.
///
/// Returns +1 when the attacker's stance beats the defender's, -1 when the
/// defender's beats the attacker's and 0 otherwise.
pub fn compare_stances(attacker: Stance, defender: Stance) -> i8 {
    if attacker.beats() == defender {
        1
    } else if defender.beats() == attacker {
        -1
    } else {
        0
    }
}

const fn index(stance: Stance) -> usize {
    match stance {
        Stance::Aggressive => 0,
        Stance::Balanced => 1,
        Stance::Defensive => 2,
    }
}

/// Multiplier on damage dealt while holding `stance`.
pub fn damage_dealt_multiplier(stance: Stance, table: &DamageTable) -> f32 {
    table.stance_dealt[index(stance)]
}

/// Multiplier on damage taken while holding `stance`.
pub fn damage_taken_multiplier(stance: Stance, table: &DamageTable) -> f32 {
    table.stance_taken[index(stance)]
}
