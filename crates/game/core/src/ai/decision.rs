//! Decision function for one NPC turn.

use crate::combat::CombatError;
use crate::config::AiTable;
use crate::engine::gear;
use crate::env::{Exit, GameEnv, RngOracle};
use crate::state::{BuffKind, CombatTags, Combatant, EntityId, GameState, Stance};

/// What an NPC does with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiDecision {
    /// Wait without spending time: a coward recovering from flight, or a
    /// fighter still winding up its next swing.
    Hold,

    /// Run from the fight. `None` when the room has no usable exit; the
    /// attempt still counts.
    Flee(Option<Exit>),

    /// Switch stance. Consumes the whole turn.
    ChangeStance(Stance),

    /// Attack this combatant.
    Attack(EntityId),

    /// Nothing to do.
    Idle,

    /// Stroll through this exit.
    Wander(Exit),
}

/// Chooses the NPC's action for this second.
///
/// The NPC's action timer must already include this second's increment.
/// Draws from `rng` only where a layer rolls for it: stance reactions,
/// aggro, wandering and exit choice.
pub fn decide(
    state: &GameState,
    env: &GameEnv<'_>,
    rng: &mut dyn RngOracle,
    npc: EntityId,
) -> Result<AiDecision, CombatError> {
    let Some(mob) = state.combatant(npc) else {
        return Ok(AiDecision::Idle);
    };
    if !mob.is_alive() {
        return Ok(AiDecision::Idle);
    }

    let tables = env.tables;
    let travel_time = env.map.travel_time(mob.room);
    let target = mob
        .hostile_to
        .iter()
        .copied()
        .find(|other| state.co_located(npc, *other))
        .and_then(|other| state.combatant(other));

    if let Some(target) = target {
        // === Flee ===
        if mob.tags.contains(CombatTags::COWARD) {
            if mob.buffs.has(BuffKind::RecentlyFled) || mob.action_timer < travel_time {
                return Ok(AiDecision::Hold);
            }
            return Ok(AiDecision::Flee(escape_route(env, rng, mob)));
        }

        // === Stance reaction ===
        if mob.action_timer >= tables.time.stance_change_time {
            let stance = choose_stance(mob, target, &tables.ai, rng);
            if stance != mob.stance {
                return Ok(AiDecision::ChangeStance(stance));
            }
        }

        // === Attack ===
        return Ok(match swing_time(env, mob)? {
            Some(speed) if mob.action_timer >= speed => AiDecision::Attack(target.id),
            _ => AiDecision::Hold,
        });
    }

    // === Aggro on sight ===
    if mob.tags.contains(CombatTags::AGGRO_ON_SIGHT) && state.co_located(npc, EntityId::PLAYER) {
        let ready = swing_time(env, mob)?.is_some_and(|speed| mob.action_timer >= speed);
        if ready && rng.chance(tables.ai.aggro_chance) {
            return Ok(AiDecision::Attack(EntityId::PLAYER));
        }
        return Ok(AiDecision::Idle);
    }

    // === Wander ===
    if mob.action_timer < travel_time || mob.buffs.has(BuffKind::RecentlyFled) {
        return Ok(AiDecision::Idle);
    }
    if !rng.chance(tables.ai.wander_chance) {
        return Ok(AiDecision::Idle);
    }
    let opens_doors = mob.tags.contains(CombatTags::OPENS_DOORS);
    let exits: Vec<Exit> = env
        .map
        .exits(mob.room)
        .into_iter()
        .filter(|exit| exit.is_passable(opens_doors))
        .collect();
    Ok(pick(rng, &exits).map_or(AiDecision::Idle, AiDecision::Wander))
}

/// Stance heuristics, checked in order:
///
/// 1. own health at or below the defensive threshold: Defensive
/// 2. target health at or below the aggressive threshold: Aggressive
/// 3. health ratio (own fraction over target fraction) at or below the low
///    ratio: Defensive
/// 4. ratio at or above the high ratio: Aggressive
/// 5. a small chance to counter the target's stance
/// 6. a small chance to pick any stance
///
/// Falls back to the current stance.
pub fn choose_stance(
    mob: &Combatant,
    target: &Combatant,
    table: &AiTable,
    rng: &mut dyn RngOracle,
) -> Stance {
    let own = mob.hp.fraction();
    let theirs = target.hp.fraction();

    if own <= table.defensive_own_hp {
        return Stance::Defensive;
    }
    if theirs <= table.aggressive_target_hp {
        return Stance::Aggressive;
    }

    let ratio = own / theirs.max(f32::EPSILON);
    if ratio <= table.defensive_ratio {
        return Stance::Defensive;
    }
    if ratio >= table.aggressive_ratio {
        return Stance::Aggressive;
    }

    if rng.chance(table.counter_stance_chance) {
        return counter_stance(target.stance);
    }
    if rng.chance(table.random_stance_chance) {
        return match rng.range(0, 2) {
            0 => Stance::Aggressive,
            1 => Stance::Balanced,
            _ => Stance::Defensive,
        };
    }
    mob.stance
}

/// The stance an NPC answers `stance` with.
pub const fn counter_stance(stance: Stance) -> Stance {
    match stance {
        Stance::Balanced => Stance::Defensive,
        Stance::Defensive => Stance::Aggressive,
        Stance::Aggressive => Stance::Balanced,
    }
}

/// Attack speed, or `None` when no hand can swing.
fn swing_time(env: &GameEnv<'_>, mob: &Combatant) -> Result<Option<f32>, CombatError> {
    let wield = gear::wield_of(env, mob)?;
    if wield.firing_hands().is_empty() {
        return Ok(None);
    }
    gear::attack_speed(env, mob, &wield).map(Some)
}

/// A random passable exit, preferring safe ones over dangerous ones.
fn escape_route(env: &GameEnv<'_>, rng: &mut dyn RngOracle, mob: &Combatant) -> Option<Exit> {
    let opens_doors = mob.tags.contains(CombatTags::OPENS_DOORS);
    let (dangerous, safe): (Vec<Exit>, Vec<Exit>) = env
        .map
        .exits(mob.room)
        .into_iter()
        .filter(|exit| exit.is_passable(opens_doors))
        .partition(Exit::is_dangerous);

    if safe.is_empty() {
        pick(rng, &dangerous)
    } else {
        pick(rng, &safe)
    }
}

fn pick(rng: &mut dyn RngOracle, exits: &[Exit]) -> Option<Exit> {
    let last = u32::try_from(exits.len()).ok()?.checked_sub(1)?;
    let index = rng.range(0, last) as usize;
    exits.get(index).copied()
}
