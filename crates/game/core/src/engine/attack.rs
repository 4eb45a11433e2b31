//! Attack resolution.
//!
//! An attack runs in two phases per swinging hand. [`resolve_swing`] reads
//! state and draws every roll, producing a [`SwingPlan`]; the engine then
//! applies the plan. Validation and rolls therefore finish before anything
//! is written.

use arrayvec::ArrayVec;

use crate::ability::Ability;
use crate::combat::{
    BlockInputs, CombatError, Hand, HitInputs, ParryInputs, SwingOutcome, Wield, WieldKind,
    absorption_fraction, base_damage, block_chance, check, compare_stances,
    damage_dealt_multiplier, damage_taken_multiplier, eye_for_an_eye_multiplier,
    grit_absorption, hit_chance, hit_location, mitigate, parry_chance, strength_multiplier,
    vary_absorbed, vary_damage,
};
use crate::env::{GameEnv, RngOracle, WeaponData};
use crate::event::CombatEvent;
use crate::state::{BuffKind, CombatTags, Combatant, EntityId, GameState, ItemHandle, Skill};

use super::{GameEngine, gear};

/// Everything one swing will change, decided up front.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SwingPlan {
    outcome: SwingOutcome,
    attacker_marks: CombatTags,
    defender_marks: CombatTags,
    /// Ammunition stack to draw one round from.
    ammo: Option<ItemHandle>,
    bleeds: bool,
    poisons: bool,
    xp: Option<(Skill, u32)>,
}

impl SwingPlan {
    fn settled(outcome: SwingOutcome, attacker_marks: CombatTags, defender_marks: CombatTags) -> Self {
        Self {
            outcome,
            attacker_marks,
            defender_marks,
            ammo: None,
            bleeds: false,
            poisons: false,
            xp: None,
        }
    }
}

impl GameEngine<'_> {
    /// Resolves one attack from `attacker` against `defender`.
    ///
    /// Returns `Ok(true)` if at least one hand swung. Returns `Ok(false)`
    /// without touching state when either side is missing or dead, or when
    /// no hand can attack. Errors only on broken content.
    pub fn attack(&mut self, attacker: EntityId, defender: EntityId) -> Result<bool, CombatError> {
        if attacker == defender {
            return Ok(false);
        }
        let (Some(striker), Some(target)) = (
            self.state.combatant(attacker),
            self.state.combatant(defender),
        ) else {
            return Ok(false);
        };
        if !striker.is_alive() || !target.is_alive() {
            return Ok(false);
        }

        let env = self.env;
        let attacker_wield = gear::wield_of(&env, striker)?;
        let defender_wield = gear::wield_of(&env, target)?;
        if attacker_wield.kind == WieldKind::None {
            return Ok(false);
        }

        let hands = eligible_hands(&attacker_wield, striker.tags);
        if hands.is_empty() {
            return Ok(false);
        }
        let speed = gear::attack_speed(&env, striker, &attacker_wield)?;

        self.state.engage(attacker, defender);

        let mut swung = false;
        for hand in hands {
            if !self.state.combatant(defender).is_some_and(Combatant::is_alive) {
                break;
            }
            swung |= self.swing(attacker, defender, hand, &attacker_wield, &defender_wield)?;
        }

        if swung {
            if let Some(striker) = self.state.combatant_mut(attacker) {
                if striker.tags.contains(CombatTags::FREE_ATTACK) {
                    striker.tags.remove(CombatTags::FREE_ATTACK);
                } else {
                    striker.action_timer -= speed;
                }
            }
            self.settle_markers(attacker, defender);
        }
        Ok(swung)
    }

    fn swing(
        &mut self,
        attacker: EntityId,
        defender: EntityId,
        hand: Hand,
        attacker_wield: &Wield,
        defender_wield: &Wield,
    ) -> Result<bool, CombatError> {
        let plan = resolve_swing(
            &*self.state,
            &self.env,
            &mut *self.rng,
            SwingSides {
                attacker,
                defender,
                hand,
                attacker_wield,
                defender_wield,
            },
        )?;
        let Some(plan) = plan else {
            self.events.emit(CombatEvent::OutOfAmmo { attacker, hand });
            return Ok(false);
        };

        if let Some(striker) = self.state.combatant_mut(attacker) {
            striker.tags.insert(plan.attacker_marks);
            if let Some(handle) = plan.ammo {
                striker.inventory.consume_one(handle);
            }
        }

        let damage = plan.outcome.damage();
        let mut dead = false;
        if let Some(target) = self.state.combatant_mut(defender) {
            target.tags.insert(plan.defender_marks);
            target.hp.spend(damage);
            dead = !target.is_alive();
        }

        if let Some((skill, amount)) = plan.xp {
            self.events.emit(CombatEvent::SkillXp { skill, amount });
        }
        self.events.emit(CombatEvent::Swing {
            attacker,
            defender,
            hand,
            outcome: plan.outcome,
        });

        if dead {
            self.kill(defender);
        } else if damage > 0 {
            if plan.bleeds {
                self.apply_bleed(defender, damage);
            }
            if plan.poisons {
                self.apply_poison(defender, damage);
            }
        }
        Ok(true)
    }

    /// Consumes single-use buffs and success markers at the end of an attack.
    fn settle_markers(&mut self, attacker: EntityId, defender: EntityId) {
        let mut triggered: ArrayVec<(EntityId, Ability), 4> = ArrayVec::new();

        if let Some(striker) = self.state.combatant_mut(attacker) {
            striker.buffs.clear(BuffKind::CarefulAim);
            if striker.tags.contains(CombatTags::EYE_FOR_AN_EYE_HIT) {
                striker.buffs.clear(BuffKind::EyeForAnEye);
                triggered.push((attacker, Ability::EyeForAnEye));
            }
            striker.tags.remove(CombatTags::SUCCESS_MARKERS);
        }

        if let Some(target) = self.state.combatant_mut(defender) {
            if target.tags.contains(CombatTags::QUICK_ROLL_USED) {
                target.buffs.clear(BuffKind::QuickRoll);
                triggered.push((defender, Ability::QuickRoll));
            }
            if target.tags.contains(CombatTags::GRIT_HELD) {
                triggered.push((defender, Ability::Grit));
            }
            if target.tags.contains(CombatTags::SHIELD_WALL_HELD) {
                triggered.push((defender, Ability::ShieldWall));
            }
            target.tags.remove(CombatTags::SUCCESS_MARKERS);
        }

        for (entity, ability) in triggered {
            self.events
                .emit(CombatEvent::AbilityTriggered { entity, ability });
        }
    }
}

/// Hands that swing, after weapon-class restrictions from ability tags.
fn eligible_hands(wield: &Wield, tags: CombatTags) -> ArrayVec<Hand, 2> {
    let melee_only = tags.intersects(CombatTags::RAPID_STRIKE | CombatTags::HEADLONG_STRIKE);
    let ranged_only = tags.contains(CombatTags::SNAP_SHOT);
    wield
        .firing_hands()
        .into_iter()
        .filter(|hand| {
            let ranged = wield.weapon(*hand).is_some_and(WeaponData::is_ranged);
            if melee_only {
                !ranged
            } else if ranged_only {
                ranged
            } else {
                true
            }
        })
        .collect()
}

struct SwingSides<'w> {
    attacker: EntityId,
    defender: EntityId,
    hand: Hand,
    attacker_wield: &'w Wield,
    defender_wield: &'w Wield,
}

/// Rolls one swing. `Ok(None)` means the hand had no ammunition.
///
/// Draw order: hit, parry (if possible), block (if possible), critical,
/// poison, bleed, location, damage variance, absorption variance.
fn resolve_swing(
    state: &GameState,
    env: &GameEnv<'_>,
    rng: &mut dyn RngOracle,
    sides: SwingSides<'_>,
) -> Result<Option<SwingPlan>, CombatError> {
    let tables = env.tables;
    let (Some(attacker), Some(defender)) = (
        state.combatant(sides.attacker),
        state.combatant(sides.defender),
    ) else {
        return Ok(None);
    };
    let attacker_wield = sides.attacker_wield;
    let defender_wield = sides.defender_wield;

    let weapon = attacker_wield
        .weapon(sides.hand)
        .copied()
        .unwrap_or_else(|| gear::unarmed_weapon(&tables.damage));
    let ammo = if weapon.needs_ammo() {
        match gear::find_ammo(env, attacker, weapon.ammo_type)? {
            Some(found) => Some(found),
            None => return Ok(None),
        }
    } else {
        None
    };

    // === Hit ===
    let eye_for_an_eye = attacker.buffs.get(BuffKind::EyeForAnEye).map(|b| b.power);
    let cursed = defender.buffs.has(BuffKind::SnakeEyes)
        || attacker.tags.contains(CombatTags::BOXCARS);
    let guaranteed = cursed || eye_for_an_eye.is_some();
    let modifiers = gear::equipment_modifiers(env, defender)?;

    let mut attacker_marks = CombatTags::empty();
    let mut defender_marks = CombatTags::empty();
    if defender.buffs.has(BuffKind::QuickRoll) {
        defender_marks.insert(CombatTags::QUICK_ROLL_USED);
    }
    if eye_for_an_eye.is_some() {
        attacker_marks.insert(CombatTags::EYE_FOR_AN_EYE_HIT);
    }

    let inputs = HitInputs {
        careful_aim: attacker.buffs.power(BuffKind::CarefulAim),
        rapid_strike: attacker.tags.contains(CombatTags::RAPID_STRIKE),
        snap_shot: attacker.tags.contains(CombatTags::SNAP_SHOT),
        quick_roll: defender.buffs.power(BuffKind::QuickRoll),
        attacker_wield: Some(attacker_wield.kind),
        stance_edge: compare_stances(attacker.stance, defender.stance),
        defender_tags: defender.tags,
        dodge_bonus: modifiers.dodge,
        guaranteed,
    };
    let chance = hit_chance(&inputs, &tables.hit);
    if !check(rng.roll_percent(), chance) {
        let mut plan = SwingPlan::settled(SwingOutcome::Evaded, attacker_marks, defender_marks);
        if defender.is_player() {
            plan.xp = Some((Skill::Dodge, tables.experience.dodge));
        }
        return Ok(Some(plan));
    }

    // === Parry ===
    let can_parry = defender_wield.has_melee_weapon()
        && !defender.tags.contains(CombatTags::CANNOT_PARRY)
        && !weapon.is_ranged()
        && !guaranteed;
    if can_parry {
        let inputs = ParryInputs {
            attacker_two_handed: attacker_wield.kind.is_two_handed(),
            skill_level: player_level(defender, Skill::Parry),
            equipment_bonus: modifiers.parry,
            attacker_tags: attacker.tags,
            defender_tags: defender.tags,
        };
        if check(rng.roll_percent(), parry_chance(&inputs, &tables.hit)) {
            return Ok(Some(SwingPlan::settled(
                SwingOutcome::Parried,
                attacker_marks,
                defender_marks,
            )));
        }
    }

    // === Block ===
    let shield = defender_wield.shield().map(|(_, shield)| shield);
    let can_block =
        shield.is_some() && !defender.tags.contains(CombatTags::CANNOT_BLOCK) && !guaranteed;
    let mut blocked = false;
    if can_block {
        let shield_wall = defender.buffs.get(BuffKind::ShieldWall).map(|b| b.power);
        let inputs = BlockInputs {
            skill_level: player_level(defender, Skill::Block),
            shield_wall: shield_wall.unwrap_or(0.0),
            equipment_bonus: modifiers.block,
        };
        blocked = check(rng.roll_percent(), block_chance(&inputs, &tables.hit));
        if blocked && shield_wall.is_some() {
            defender_marks.insert(CombatTags::SHIELD_WALL_HELD);
        }
    }

    // === Damage ===
    let table = &tables.damage;
    let skill_level = player_level(attacker, weapon.skill);
    let ammo_power = ammo.map(|(_, data)| data.power);
    let mut damage = base_damage(weapon.power, ammo_power, skill_level, table);
    damage *= damage_dealt_multiplier(attacker.stance, table);
    damage *= damage_taken_multiplier(defender.stance, table);
    if attacker_wield.kind == WieldKind::HandAndAHalf {
        damage *= table.hand_and_a_half_bonus;
    }

    let mut crit_chance = weapon.crit;
    if attacker_wield.kind == WieldKind::SingleWield {
        crit_chance += table.single_wield_crit_bonus;
    }
    if cursed {
        crit_chance = 100.0;
    }
    let critical = check(rng.roll_percent(), crit_chance);
    if critical {
        damage *= table.crit_multiplier;
    }

    let (ammo_bleed, ammo_poison) = ammo.map_or((0.0, 0.0), |(_, data)| (data.bleed, data.poison));
    let poisons = check(rng.roll_percent(), weapon.poison + ammo_poison)
        && !defender.tags.is_poison_immune();
    let bleeds = (check(rng.roll_percent(), weapon.bleed + ammo_bleed) || critical)
        && !defender.tags.is_bleed_immune();

    damage *= strength_multiplier(attacker.tags, table);
    if let Some(power) = eye_for_an_eye {
        damage *= eye_for_an_eye_multiplier(attacker.hp.fraction(), power);
    }

    // === Mitigation ===
    let roll = rng.roll_percent();
    let location = hit_location(&defender.anatomy, roll).ok_or(
        CombatError::HitLocationUnresolved {
            defender: defender.id,
            roll,
        },
    )?;
    let mut absorbed = 0.0;
    if let Some(armor) = gear::slot_armor(env, defender, location.slot)? {
        absorbed += damage * absorption_fraction(armor.power, weapon.damage_type, armor.class, table);
    }
    if let (true, Some(shield)) = (blocked, shield) {
        absorbed +=
            damage * absorption_fraction(shield.power, weapon.damage_type, shield.class, table);
    }

    if let Some(grit) = defender.buffs.get(BuffKind::Grit) {
        if damage >= 1.0 {
            let extra = grit_absorption(damage, absorbed, grit.power);
            if extra > 0.0 {
                absorbed += extra;
                defender_marks.insert(CombatTags::GRIT_HELD);
            }
        }
    }

    let dealt = vary_damage(damage, rng.next_f32(), table);
    let soaked = vary_absorbed(absorbed, rng.next_f32(), table);
    let (taken, absorbed) = mitigate(dealt, soaked);

    let experience = &tables.experience;
    let xp = if attacker.is_player() {
        let amount = if critical {
            experience.critical
        } else {
            experience.hit
        };
        Some((weapon.skill, amount))
    } else if defender.is_player() && blocked {
        Some((Skill::Block, experience.block))
    } else {
        None
    };

    Ok(Some(SwingPlan {
        outcome: SwingOutcome::Hit {
            damage: taken,
            absorbed,
            critical,
            blocked,
            location: location.part,
        },
        attacker_marks,
        defender_marks,
        ammo: ammo.map(|(handle, _)| handle),
        bleeds,
        poisons,
        xp,
    }))
}

/// Skill level that feeds combat formulas. NPCs fight at level zero.
fn player_level(combatant: &Combatant, skill: Skill) -> u8 {
    if combatant.is_player() {
        combatant.skills.level(skill)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use crate::env::SequenceRng;
    use crate::state::{Equipment, InventoryState, SkillLevels, Stacking};

    struct Arena {
        state: GameState,
        foe: EntityId,
    }

    fn arena(player: Combatant, foe: Combatant) -> Arena {
        let mut state = GameState::with_player(player);
        let foe = state.spawn(foe);
        Arena { state, foe }
    }

    fn run(
        arena: &mut Arena,
        tables: &crate::config::CombatTables,
        rng: &mut SequenceRng,
        attacker: EntityId,
        defender: EntityId,
    ) -> (Result<bool, CombatError>, Vec<CombatEvent>) {
        let (items, map) = (catalog(), rooms());
        let mut events = Vec::new();
        let result = GameEngine::new(
            &mut arena.state,
            GameEnv::new(&items, &map, tables),
            rng,
            &mut events,
        )
        .attack(attacker, defender);
        (result, events)
    }

    fn swings(events: &[CombatEvent]) -> Vec<SwingOutcome> {
        events
            .iter()
            .filter_map(|event| match event {
                CombatEvent::Swing { outcome, .. } => Some(*outcome),
                _ => None,
            })
            .collect()
    }

    fn hands(events: &[CombatEvent]) -> Vec<Hand> {
        events
            .iter()
            .filter_map(|event| match event {
                CombatEvent::Swing { hand, .. } => Some(*hand),
                _ => None,
            })
            .collect()
    }

    fn sword() -> Equipment {
        Equipment::builder().main_hand(SWORD).build()
    }

    #[test]
    fn zero_power_fists_floor_positive_damage_at_one() {
        let mut tables = tables();
        tables.damage.unarmed_power = 0.0;

        let skilled = Combatant::builder(EntityId::PLAYER)
            .skills(SkillLevels::default().with(Skill::Unarmed, 1))
            .build();
        let dummy = Combatant::builder(EntityId(0))
            .tags(CombatTags::CANNOT_DODGE)
            .build();
        let mut arena = arena(skilled, dummy);
        let foe = arena.foe;
        let (result, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::default(),
            EntityId::PLAYER,
            foe,
        );
        assert_eq!(result, Ok(true));
        assert_eq!(swings(&events)[0].damage(), 1);
        assert_eq!(arena.state.combatant(foe).unwrap().hp.current, 99);

        let unskilled = Combatant::builder(EntityId::PLAYER).build();
        let dummy = Combatant::builder(EntityId(0))
            .tags(CombatTags::CANNOT_DODGE)
            .build();
        let mut arena = self::arena(unskilled, dummy);
        let foe = arena.foe;
        let (_, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::default(),
            EntityId::PLAYER,
            foe,
        );
        let outcome = swings(&events)[0];
        assert!(outcome.landed());
        assert_eq!(outcome.damage(), 0);
        assert_eq!(arena.state.combatant(foe).unwrap().hp.current, 100);
    }

    #[test]
    fn dead_or_missing_sides_are_a_silent_no_op() {
        let tables = tables();
        let corpse = Combatant::builder(EntityId(0)).hp(0, 10).build();
        let mut arena = arena(Combatant::builder(EntityId::PLAYER).build(), corpse);
        let before = arena.state.clone();
        let foe = arena.foe;

        let (result, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::default(),
            EntityId::PLAYER,
            foe,
        );
        assert_eq!(result, Ok(false));
        assert!(events.is_empty());
        assert_eq!(arena.state, before);

        let (result, _) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::default(),
            EntityId::PLAYER,
            EntityId(77),
        );
        assert_eq!(result, Ok(false));
    }

    #[test]
    fn hands_full_of_junk_cannot_attack() {
        let tables = tables();
        let juggler = Combatant::builder(EntityId::PLAYER)
            .equipment(Equipment::builder().main_hand(TORCH).off_hand(TORCH).build())
            .build();
        let mut arena = arena(juggler, Combatant::builder(EntityId(0)).build());
        let foe = arena.foe;
        let (result, _) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::default(),
            EntityId::PLAYER,
            foe,
        );
        assert_eq!(result, Ok(false));
        assert!(arena.state.player().unwrap().hostile_to.is_empty());
    }

    #[test]
    fn a_miss_spends_time_and_engages_both_sides() {
        let tables = tables();
        let mut arena = arena(
            Combatant::builder(EntityId::PLAYER).equipment(sword()).build(),
            Combatant::builder(EntityId(0)).build(),
        );
        let foe = arena.foe;
        // Hit roll of 99 misses an 88% chance.
        let (result, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([99]),
            EntityId::PLAYER,
            foe,
        );
        assert_eq!(result, Ok(true));
        assert_eq!(swings(&events), vec![SwingOutcome::Evaded]);

        let player = arena.state.player().unwrap();
        assert_eq!(player.action_timer, -2.0);
        assert!(player.is_hostile_to(foe));
        assert!(arena.state.combatant(foe).unwrap().is_hostile_to(EntityId::PLAYER));
    }

    #[test]
    fn player_dodge_earns_experience() {
        let tables = tables();
        let mut arena = arena(
            Combatant::builder(EntityId::PLAYER).build(),
            Combatant::builder(EntityId(0)).equipment(sword()).build(),
        );
        let foe = arena.foe;
        let (_, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([99]),
            foe,
            EntityId::PLAYER,
        );
        assert!(events.contains(&CombatEvent::SkillXp {
            skill: Skill::Dodge,
            amount: 1
        }));
    }

    #[test]
    fn parry_negates_the_swing() {
        let tables = tables();
        let mut arena = arena(
            Combatant::builder(EntityId::PLAYER).equipment(sword()).build(),
            Combatant::builder(EntityId(0)).equipment(sword()).build(),
        );
        let foe = arena.foe;
        // Hit on 0, parry on 0 (chance 10).
        let (_, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([0, 0]),
            EntityId::PLAYER,
            foe,
        );
        assert_eq!(swings(&events), vec![SwingOutcome::Parried]);
        assert_eq!(arena.state.combatant(foe).unwrap().hp.current, 100);
    }

    #[test]
    fn cannot_dodge_defender_is_always_hit() {
        let tables = tables();
        let mut arena = arena(
            Combatant::builder(EntityId::PLAYER).equipment(sword()).build(),
            Combatant::builder(EntityId(0))
                .tags(CombatTags::CANNOT_DODGE | CombatTags::CANNOT_PARRY | CombatTags::AGILE)
                .build(),
        );
        let foe = arena.foe;
        let (_, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([99]),
            EntityId::PLAYER,
            foe,
        );
        assert!(swings(&events)[0].landed());
    }

    #[test]
    fn sword_hit_damage_follows_the_pipeline() {
        let tables = tables();
        let mut arena = arena(
            Combatant::builder(EntityId::PLAYER).equipment(sword()).build(),
            Combatant::builder(EntityId(0))
                .tags(CombatTags::CANNOT_PARRY)
                .equipment(Equipment::builder().slot(crate::state::EquipSlot::Body, LEATHER).build())
                .build(),
        );
        let foe = arena.foe;
        // hit 0, crit 99, poison 99, bleed 99, location 30 (torso), then midpoint variance.
        let (_, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([0, 99, 99, 99, 30]),
            EntityId::PLAYER,
            foe,
        );
        // 8 * 1.5 = 12; leather soaks 20% of edged damage: 2.4 rounds to 2.
        assert_eq!(
            swings(&events),
            vec![SwingOutcome::Hit {
                damage: 10,
                absorbed: 2,
                critical: false,
                blocked: false,
                location: crate::state::BodyPart::Torso,
            }]
        );
        assert!(events.contains(&CombatEvent::SkillXp {
            skill: Skill::Blades,
            amount: 1
        }));
        assert_eq!(arena.state.combatant(foe).unwrap().hp.current, 90);
    }

    #[test]
    fn ranged_attack_without_ammo_aborts_the_hand() {
        let tables = tables();
        let archer = Combatant::builder(EntityId::PLAYER)
            .equipment(Equipment::builder().main_hand(BOW).build())
            .build();
        let mut arena = arena(archer, Combatant::builder(EntityId(0)).build());
        let foe = arena.foe;
        let (result, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::default(),
            EntityId::PLAYER,
            foe,
        );
        assert_eq!(result, Ok(false));
        assert_eq!(
            events,
            vec![CombatEvent::OutOfAmmo {
                attacker: EntityId::PLAYER,
                hand: Hand::Main
            }]
        );
        assert_eq!(arena.state.player().unwrap().action_timer, 0.0);
    }

    #[test]
    fn ranged_hits_consume_ammunition() {
        let tables = tables();
        let mut quiver = InventoryState::empty();
        quiver.add(ARROWS, 2);
        let archer = Combatant::builder(EntityId::PLAYER)
            .equipment(Equipment::builder().main_hand(BOW).build())
            .inventory(quiver)
            .build();
        let mut arena = arena(
            archer,
            Combatant::builder(EntityId(0))
                .tags(CombatTags::CANNOT_DODGE)
                .build(),
        );
        let foe = arena.foe;
        let (result, _) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::default(),
            EntityId::PLAYER,
            foe,
        );
        assert_eq!(result, Ok(true));
        assert_eq!(arena.state.player().unwrap().inventory.quantity(ARROWS), 1);
    }

    #[test]
    fn careful_aim_is_consumed_and_free_attack_costs_no_time() {
        let tables = tables();
        let mut player = Combatant::builder(EntityId::PLAYER)
            .equipment(sword())
            .tags(CombatTags::FREE_ATTACK)
            .build();
        player
            .buffs
            .set(BuffKind::CarefulAim, 20, 25.0, Stacking::REPLACE);
        let mut arena = arena(player, Combatant::builder(EntityId(0)).build());
        let foe = arena.foe;
        let (result, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([99]),
            EntityId::PLAYER,
            foe,
        );
        assert_eq!(result, Ok(true));
        assert_eq!(swings(&events), vec![SwingOutcome::Evaded]);

        let player = arena.state.player().unwrap();
        assert!(!player.buffs.has(BuffKind::CarefulAim));
        assert!(!player.tags.contains(CombatTags::FREE_ATTACK));
        assert_eq!(player.action_timer, 0.0);
    }

    #[test]
    fn quick_roll_is_spent_when_attacked() {
        let tables = tables();
        let mut player = Combatant::builder(EntityId::PLAYER).build();
        player
            .buffs
            .set(BuffKind::QuickRoll, 10, 50.0, Stacking::REPLACE);
        let mut arena = arena(player, Combatant::builder(EntityId(0)).equipment(sword()).build());
        let foe = arena.foe;
        let (_, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([40]),
            foe,
            EntityId::PLAYER,
        );
        // 80 - 50 = 30, times 1.1 single wield: a roll of 40 misses.
        assert_eq!(swings(&events), vec![SwingOutcome::Evaded]);
        let player = arena.state.player().unwrap();
        assert!(!player.buffs.has(BuffKind::QuickRoll));
        assert!(!player.tags.intersects(CombatTags::SUCCESS_MARKERS));
        assert!(events.contains(&CombatEvent::AbilityTriggered {
            entity: EntityId::PLAYER,
            ability: Ability::QuickRoll
        }));
    }

    #[test]
    fn lethal_swing_removes_the_npc() {
        let tables = tables();
        let mut arena = arena(
            Combatant::builder(EntityId::PLAYER).equipment(sword()).build(),
            Combatant::builder(EntityId(0))
                .hp(3, 10)
                .tags(CombatTags::CANNOT_DODGE | CombatTags::CANNOT_PARRY)
                .build(),
        );
        let foe = arena.foe;
        let (_, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::default(),
            EntityId::PLAYER,
            foe,
        );
        assert!(!arena.state.contains(foe));
        assert_eq!(events.last(), Some(&CombatEvent::Died { entity: foe }));
        assert!(arena.state.player().unwrap().hostile_to.is_empty());
    }

    #[test]
    fn dual_wield_swings_twice() {
        let tables = tables();
        let mut arena = arena(
            Combatant::builder(EntityId::PLAYER)
                .equipment(Equipment::builder().main_hand(SWORD).off_hand(SWORD).build())
                .build(),
            Combatant::builder(EntityId(0)).build(),
        );
        let foe = arena.foe;
        let (_, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([99, 99]),
            EntityId::PLAYER,
            foe,
        );
        assert_eq!(swings(&events).len(), 2);
        assert_eq!(arena.state.player().unwrap().action_timer, -2.0);
    }

    #[test]
    fn shield_wall_block_stacks_shield_on_armor() {
        let tables = tables();
        let mut player = Combatant::builder(EntityId::PLAYER)
            .equipment(
                Equipment::builder()
                    .main_hand(SHIELD)
                    .slot(crate::state::EquipSlot::Body, LEATHER)
                    .build(),
            )
            .build();
        player
            .buffs
            .set(BuffKind::ShieldWall, 20, 50.0, Stacking::REPLACE);
        let mut arena = arena(player, Combatant::builder(EntityId(0)).equipment(sword()).build());
        let foe = arena.foe;
        // hit 0, block 0 (chance 80), crit 99, poison 99, bleed 99, torso.
        let (result, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([0, 0, 99, 99, 99, 30]),
            foe,
            EntityId::PLAYER,
        );
        assert_eq!(result, Ok(true));
        // 12 damage; leather soaks 2.4 and the blocking shield 6.0.
        assert_eq!(
            swings(&events),
            vec![SwingOutcome::Hit {
                damage: 4,
                absorbed: 8,
                critical: false,
                blocked: true,
                location: crate::state::BodyPart::Torso,
            }]
        );
        assert!(events.contains(&CombatEvent::SkillXp {
            skill: Skill::Block,
            amount: 1
        }));
        assert_eq!(
            events.last(),
            Some(&CombatEvent::AbilityTriggered {
                entity: EntityId::PLAYER,
                ability: Ability::ShieldWall
            })
        );

        let player = arena.state.player().unwrap();
        assert_eq!(player.hp.current, 96);
        assert!(player.buffs.has(BuffKind::ShieldWall));
        assert!(!player.tags.intersects(CombatTags::SUCCESS_MARKERS));
    }

    #[test]
    fn unbuffed_block_does_not_report_shield_wall() {
        let tables = tables();
        let player = Combatant::builder(EntityId::PLAYER)
            .equipment(Equipment::builder().main_hand(SHIELD).build())
            .build();
        let mut arena = arena(player, Combatant::builder(EntityId(0)).equipment(sword()).build());
        let foe = arena.foe;
        let (_, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([0, 0, 99, 99, 99, 30]),
            foe,
            EntityId::PLAYER,
        );
        assert!(matches!(
            swings(&events).as_slice(),
            [SwingOutcome::Hit { blocked: true, .. }]
        ));
        assert!(!events
            .iter()
            .any(|event| matches!(event, CombatEvent::AbilityTriggered { .. })));
    }

    #[test]
    fn grit_takes_all_but_one_point() {
        let tables = tables();
        let mut player = Combatant::builder(EntityId::PLAYER).build();
        player.buffs.set(BuffKind::Grit, 30, 100.0, Stacking::REPLACE);
        let mut arena = arena(player, Combatant::builder(EntityId(0)).equipment(sword()).build());
        let foe = arena.foe;
        let (_, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([0, 99, 99, 99, 30]),
            foe,
            EntityId::PLAYER,
        );
        assert_eq!(
            swings(&events),
            vec![SwingOutcome::Hit {
                damage: 1,
                absorbed: 11,
                critical: false,
                blocked: false,
                location: crate::state::BodyPart::Torso,
            }]
        );
        assert!(events.contains(&CombatEvent::AbilityTriggered {
            entity: EntityId::PLAYER,
            ability: Ability::Grit
        }));

        let player = arena.state.player().unwrap();
        assert_eq!(player.hp.current, 99);
        assert!(player.buffs.has(BuffKind::Grit));
        assert!(!player.tags.contains(CombatTags::GRIT_HELD));
    }

    #[test]
    fn eye_for_an_eye_scales_with_missing_health_and_is_spent() {
        let tables = tables();
        let mut player = Combatant::builder(EntityId::PLAYER)
            .hp(50, 100)
            .equipment(sword())
            .build();
        player
            .buffs
            .set(BuffKind::EyeForAnEye, 10, 3.0, Stacking::REPLACE);
        let mut arena = arena(player, Combatant::builder(EntityId(0)).build());
        let foe = arena.foe;
        // The hit roll of 99 cannot miss while the buff is up.
        let (result, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([99, 99, 99, 99, 30]),
            EntityId::PLAYER,
            foe,
        );
        assert_eq!(result, Ok(true));
        // 12 * (1 - 0.5) * 3.
        assert_eq!(
            swings(&events),
            vec![SwingOutcome::Hit {
                damage: 18,
                absorbed: 0,
                critical: false,
                blocked: false,
                location: crate::state::BodyPart::Torso,
            }]
        );
        assert!(events.contains(&CombatEvent::AbilityTriggered {
            entity: EntityId::PLAYER,
            ability: Ability::EyeForAnEye
        }));
        assert_eq!(arena.state.combatant(foe).unwrap().hp.current, 82);

        let player = arena.state.player().unwrap();
        assert!(!player.buffs.has(BuffKind::EyeForAnEye));
        assert!(!player.tags.contains(CombatTags::EYE_FOR_AN_EYE_HIT));
    }

    #[test]
    fn eye_for_an_eye_at_full_health_deals_nothing() {
        let tables = tables();
        let mut player = Combatant::builder(EntityId::PLAYER).equipment(sword()).build();
        player
            .buffs
            .set(BuffKind::EyeForAnEye, 10, 3.0, Stacking::REPLACE);
        let mut arena = arena(player, Combatant::builder(EntityId(0)).build());
        let foe = arena.foe;
        let (_, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([99, 99, 99, 99, 30]),
            EntityId::PLAYER,
            foe,
        );
        let outcome = swings(&events)[0];
        assert!(outcome.landed());
        assert_eq!(outcome.damage(), 0);
        assert!(!arena.state.player().unwrap().buffs.has(BuffKind::EyeForAnEye));
    }

    #[test]
    fn strike_tags_pick_the_hand_class() {
        let tables = tables();
        let cases = [
            (CombatTags::SNAP_SHOT, vec![Hand::Off], 1),
            (CombatTags::RAPID_STRIKE, vec![Hand::Main], 2),
            (CombatTags::HEADLONG_STRIKE, vec![Hand::Main], 2),
            (CombatTags::empty(), vec![Hand::Main, Hand::Off], 1),
        ];
        for (tag, expected, arrows_left) in cases {
            let mut quiver = InventoryState::empty();
            quiver.add(ARROWS, 2);
            let player = Combatant::builder(EntityId::PLAYER)
                .equipment(Equipment::builder().main_hand(SWORD).off_hand(BOW).build())
                .inventory(quiver)
                .tags(tag)
                .build();
            let foe = Combatant::builder(EntityId(0))
                .hp(500, 500)
                .tags(CombatTags::CANNOT_DODGE)
                .build();
            let mut arena = arena(player, foe);
            let foe = arena.foe;
            let (result, events) = run(
                &mut arena,
                &tables,
                &mut SequenceRng::default(),
                EntityId::PLAYER,
                foe,
            );
            assert_eq!(result, Ok(true), "{tag:?}");
            assert_eq!(hands(&events), expected, "{tag:?}");
            assert_eq!(
                arena.state.player().unwrap().inventory.quantity(ARROWS),
                arrows_left,
                "{tag:?}"
            );
        }
    }

    #[test]
    fn hand_and_a_half_grip_adds_damage() {
        let tables = tables();
        let mut arena = arena(
            Combatant::builder(EntityId::PLAYER)
                .equipment(Equipment::builder().main_hand(BASTARD).build())
                .build(),
            Combatant::builder(EntityId(0)).build(),
        );
        let foe = arena.foe;
        let (_, events) = run(
            &mut arena,
            &tables,
            &mut SequenceRng::new([0, 99, 99, 99, 30]),
            EntityId::PLAYER,
            foe,
        );
        // 8 * 1.5 * 1.25.
        assert_eq!(
            swings(&events),
            vec![SwingOutcome::Hit {
                damage: 15,
                absorbed: 0,
                critical: false,
                blocked: false,
                location: crate::state::BodyPart::Torso,
            }]
        );
    }
}
