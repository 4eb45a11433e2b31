//! Ability execution.
//!
//! Every ability follows the same activation sequence: validate, pass the
//! cast time, pay, start the cooldown, report, then apply the effect. Any
//! failure before payment leaves state untouched, including an interrupted
//! cast.

use crate::ability::{
    Ability, AbilityError, Loadout, LuckOutcome, TargetStatus, check_requirements, read_dice,
};
use crate::event::CombatEvent;
use crate::state::{BuffKind, CombatTags, EntityId, Stacking};

use super::{GameEngine, gear};

impl GameEngine<'_> {
    pub fn careful_aim(&mut self, actor: EntityId, confirm: bool) -> Result<(), AbilityError> {
        self.buff_ability(actor, Ability::CarefulAim, confirm)
    }

    pub fn eye_for_an_eye(&mut self, actor: EntityId, confirm: bool) -> Result<(), AbilityError> {
        self.buff_ability(actor, Ability::EyeForAnEye, confirm)
    }

    pub fn grit(&mut self, actor: EntityId, confirm: bool) -> Result<(), AbilityError> {
        self.buff_ability(actor, Ability::Grit, confirm)
    }

    pub fn quick_roll(&mut self, actor: EntityId, confirm: bool) -> Result<(), AbilityError> {
        self.buff_ability(actor, Ability::QuickRoll, confirm)
    }

    pub fn shield_wall(&mut self, actor: EntityId, confirm: bool) -> Result<(), AbilityError> {
        self.buff_ability(actor, Ability::ShieldWall, confirm)
    }

    pub fn headlong_strike(
        &mut self,
        actor: EntityId,
        target: EntityId,
        confirm: bool,
    ) -> Result<(), AbilityError> {
        self.strike_ability(actor, Ability::HeadlongStrike, Some(target), confirm)
    }

    pub fn rapid_strike(
        &mut self,
        actor: EntityId,
        target: EntityId,
        confirm: bool,
    ) -> Result<(), AbilityError> {
        self.strike_ability(actor, Ability::RapidStrike, Some(target), confirm)
    }

    pub fn snap_shot(
        &mut self,
        actor: EntityId,
        target: EntityId,
        confirm: bool,
    ) -> Result<(), AbilityError> {
        self.strike_ability(actor, Ability::SnapShot, Some(target), confirm)
    }

    /// Rolls two dice and applies the matching [`LuckOutcome`].
    ///
    /// A double one curses the caster with SnakeEyes and forces an
    /// uninterruptible wait, which can end in [`AbilityError::ActorDead`].
    pub fn lady_luck(
        &mut self,
        actor: EntityId,
        target: EntityId,
        confirm: bool,
    ) -> Result<LuckOutcome, AbilityError> {
        self.lady_luck_at(actor, Some(target), confirm)
    }

    /// Dispatches any ability by name. Buff abilities ignore `target`.
    pub fn use_ability(
        &mut self,
        actor: EntityId,
        ability: Ability,
        target: Option<EntityId>,
        confirm: bool,
    ) -> Result<(), AbilityError> {
        match ability {
            Ability::LadyLuck => self.lady_luck_at(actor, target, confirm).map(|_| ()),
            _ if ability.attack_tag().is_some() => {
                self.strike_ability(actor, ability, target, confirm)
            }
            _ => self.buff_ability(actor, ability, confirm),
        }
    }

    fn buff_ability(
        &mut self,
        actor: EntityId,
        ability: Ability,
        confirm: bool,
    ) -> Result<(), AbilityError> {
        if self.activate(actor, ability, None, confirm)?.is_some() {
            self.grant(actor, ability);
        }
        Ok(())
    }

    fn strike_ability(
        &mut self,
        actor: EntityId,
        ability: Ability,
        target: Option<EntityId>,
        confirm: bool,
    ) -> Result<(), AbilityError> {
        if self.activate(actor, ability, target, confirm)?.is_none() {
            return Ok(());
        }
        if let (Some(target), Some(tag)) = (target, ability.attack_tag()) {
            self.tagged_attack(actor, target, tag)?;
        }
        Ok(())
    }

    fn lady_luck_at(
        &mut self,
        actor: EntityId,
        target: Option<EntityId>,
        confirm: bool,
    ) -> Result<LuckOutcome, AbilityError> {
        let Some(loadout) = self.activate(actor, Ability::LadyLuck, target, confirm)? else {
            return Ok(LuckOutcome::Nothing);
        };

        let dice = (self.die(), self.die());
        let outcome = read_dice(dice.0, dice.1);
        self.events.emit(CombatEvent::LadyLuckRolled {
            entity: actor,
            dice,
            outcome,
        });

        let tables = self.env.tables;
        let table = &tables.abilities;
        match (outcome, target) {
            (LuckOutcome::SnakeEyes, _) => {
                if let Some(caster) = self.state.combatant_mut(actor) {
                    caster.buffs.set(
                        BuffKind::SnakeEyes,
                        table.snake_eyes_duration,
                        0.0,
                        Stacking::REPLACE,
                    );
                }
                self.pass_time(actor, table.snake_eyes_wait, true)?;
            }
            (LuckOutcome::Boxcars, Some(target)) => {
                self.tagged_attack(actor, target, CombatTags::BOXCARS | CombatTags::FREE_ATTACK)?;
            }
            (LuckOutcome::CarefulAim, _) => self.grant(actor, Ability::CarefulAim),
            (LuckOutcome::QuickRoll, _) => self.grant(actor, Ability::QuickRoll),
            (LuckOutcome::FreeStrike, Some(target)) => {
                let style = if loadout.ranged {
                    CombatTags::SNAP_SHOT
                } else {
                    CombatTags::RAPID_STRIKE
                };
                self.tagged_attack(actor, target, style | CombatTags::FREE_ATTACK)?;
            }
            _ => {}
        }
        Ok(outcome)
    }

    /// Runs the shared activation sequence.
    ///
    /// Returns the actor's loadout, or `None` when paying the health cost
    /// killed the actor and the effect must be skipped.
    fn activate(
        &mut self,
        actor: EntityId,
        ability: Ability,
        target: Option<EntityId>,
        confirm: bool,
    ) -> Result<Option<Loadout>, AbilityError> {
        let env = self.env;
        let table = &env.tables.abilities;
        let tuning = ability.tuning(table);

        let combatant = self
            .state
            .combatant(actor)
            .ok_or(AbilityError::ActorNotFound(actor))?;
        if !combatant.is_alive() {
            return Err(AbilityError::ActorDead(actor));
        }
        let wield = gear::wield_of(&env, combatant)?;
        let loadout = Loadout::new(&wield, gear::worn_armor_class(&env, combatant)?);
        check_requirements(
            ability,
            combatant,
            &loadout,
            self.target_status(actor, target),
            confirm,
            table,
        )?;

        if tuning.cast_time > 0.0 {
            self.pass_time(actor, tuning.cast_time, confirm)?;
            // The target may have left or died while the actor was busy.
            if ability.requirements().needs_target
                && self.target_status(actor, target) != TargetStatus::Valid
            {
                return Err(AbilityError::InvalidTarget(ability));
            }
        }

        let waives_mana = ability == Ability::LadyLuck && table.lady_luck_waives_mana_cost;
        let combatant = self
            .state
            .combatant_mut(actor)
            .ok_or(AbilityError::ActorNotFound(actor))?;
        combatant.hp.spend(tuning.hp_cost);
        combatant.sp.spend(tuning.sp_cost);
        let waived = waives_mana && combatant.mp.current < tuning.mp_cost;
        if !waived {
            combatant.mp.spend(tuning.mp_cost);
        }
        if tuning.cooldown > 0 {
            combatant
                .buffs
                .set(ability.cooldown(), tuning.cooldown, 0.0, Stacking::REPLACE);
        }
        let survived = combatant.is_alive();

        if waived {
            self.events.emit(CombatEvent::ManaWaived {
                entity: actor,
                ability,
                owed: tuning.mp_cost,
            });
        }
        self.events.emit(CombatEvent::AbilityUsed {
            entity: actor,
            ability,
        });
        if !survived {
            self.kill(actor);
            return Ok(None);
        }
        Ok(Some(loadout))
    }

    fn target_status(&self, actor: EntityId, target: Option<EntityId>) -> TargetStatus {
        match target {
            None => TargetStatus::Missing,
            Some(target) if target != actor && self.state.co_located(actor, target) => {
                TargetStatus::Valid
            }
            Some(_) => TargetStatus::Invalid,
        }
    }

    fn grant(&mut self, actor: EntityId, ability: Ability) {
        let Some(kind) = ability.effect_buff() else {
            return;
        };
        let tables = self.env.tables;
        let tuning = ability.tuning(&tables.abilities);
        if let Some(combatant) = self.state.combatant_mut(actor) {
            combatant
                .buffs
                .set(kind, tuning.duration, tuning.power, Stacking::REPLACE);
        }
    }

    /// One attack with `tags` raised for its duration.
    fn tagged_attack(
        &mut self,
        actor: EntityId,
        target: EntityId,
        tags: CombatTags,
    ) -> Result<bool, AbilityError> {
        if let Some(combatant) = self.state.combatant_mut(actor) {
            combatant.tags.insert(tags);
        }
        let result = self.attack(actor, target);
        if let Some(combatant) = self.state.combatant_mut(actor) {
            combatant.tags.remove(tags);
        }
        Ok(result?)
    }

    fn die(&mut self) -> u8 {
        u8::try_from(self.rng.roll_die(6)).unwrap_or(6)
    }
}
