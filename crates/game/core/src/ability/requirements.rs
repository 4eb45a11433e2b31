//! Declarative ability requirements and the shared gate that evaluates them.

use crate::combat::Wield;
use crate::config::AbilityTable;
use crate::env::ArmorClass;
use crate::state::{Combatant, StanceSet};

use super::{Ability, AbilityError};

/// Hand gear an ability needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GearRequirement {
    Any,
    /// Fists count as melee.
    Melee,
    Ranged,
    Shield,
}

/// Static preconditions of one ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbilityRequirements {
    pub stances: StanceSet,
    pub gear: GearRequirement,
    /// Heaviest body armor the ability tolerates.
    pub max_armor: ArmorClass,
    pub needs_target: bool,
}

impl AbilityRequirements {
    pub const ANY: Self = Self {
        stances: StanceSet::all(),
        gear: GearRequirement::Any,
        max_armor: ArmorClass::Heavy,
        needs_target: false,
    };
}

/// What the actor is carrying, reduced to what requirements check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Loadout {
    pub melee: bool,
    pub ranged: bool,
    pub shield: bool,
    /// Heaviest worn armor class.
    pub armor: ArmorClass,
}

impl Loadout {
    pub fn new(wield: &Wield, armor: ArmorClass) -> Self {
        let punches = wield.kind.is_unarmed();
        Self {
            melee: punches || wield.has_melee_weapon(),
            ranged: wield.has_ranged_weapon(),
            shield: wield.shield().is_some(),
            armor,
        }
    }

    fn satisfies(&self, gear: GearRequirement) -> bool {
        match gear {
            GearRequirement::Any => true,
            GearRequirement::Melee => self.melee,
            GearRequirement::Ranged => self.ranged,
            GearRequirement::Shield => self.shield,
        }
    }
}

/// Whether the chosen target can be acted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetStatus {
    Missing,
    /// Alive, present, co-located and not the actor.
    Valid,
    Invalid,
}

/// Evaluates every precondition without mutating anything.
///
/// Checks run in a fixed order and the first failure wins: cooldown,
/// stance, gear, armor class, target, resources, confirmation.
pub fn check_requirements(
    ability: Ability,
    actor: &Combatant,
    loadout: &Loadout,
    target: TargetStatus,
    confirm: bool,
    table: &AbilityTable,
) -> Result<(), AbilityError> {
    let requirements = ability.requirements();
    let tuning = ability.tuning(table);

    let cooldown = actor.buffs.time_remaining(ability.cooldown());
    if cooldown > 0 {
        return Err(AbilityError::OnCooldown {
            ability,
            remaining: cooldown,
        });
    }

    if !requirements.stances.allows(actor.stance) {
        return Err(AbilityError::WrongStance {
            ability,
            stance: actor.stance,
        });
    }

    if !loadout.satisfies(requirements.gear) {
        return Err(match requirements.gear {
            GearRequirement::Ranged => AbilityError::RequiresRanged(ability),
            GearRequirement::Shield => AbilityError::RequiresShield(ability),
            _ => AbilityError::RequiresMelee(ability),
        });
    }

    if loadout.armor > requirements.max_armor {
        return Err(AbilityError::ArmorTooHeavy {
            ability,
            armor: loadout.armor,
        });
    }

    if requirements.needs_target && target != TargetStatus::Valid {
        return Err(AbilityError::InvalidTarget(ability));
    }

    if actor.sp.current < tuning.sp_cost {
        return Err(AbilityError::InsufficientStamina {
            ability,
            needed: tuning.sp_cost,
            available: actor.sp.current,
        });
    }

    let waives_mana = ability == Ability::LadyLuck && table.lady_luck_waives_mana_cost;
    if actor.mp.current < tuning.mp_cost && !waives_mana {
        return Err(AbilityError::InsufficientMana {
            ability,
            needed: tuning.mp_cost,
            available: actor.mp.current,
        });
    }

    if tuning.hp_cost > 0 && actor.hp.current <= tuning.hp_cost && !confirm {
        return Err(AbilityError::ConfirmationRequired(ability));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, GameError};
    use crate::state::{BuffKind, EntityId, Stacking, Stance};

    fn melee() -> Loadout {
        Loadout {
            melee: true,
            ..Loadout::default()
        }
    }

    fn check(
        ability: Ability,
        actor: &Combatant,
        loadout: Loadout,
        confirm: bool,
    ) -> Result<(), AbilityError> {
        check_requirements(
            ability,
            actor,
            &loadout,
            TargetStatus::Valid,
            confirm,
            &AbilityTable::default(),
        )
    }

    #[test]
    fn cooldown_is_checked_first() {
        let mut actor = Combatant::builder(EntityId::PLAYER)
            .stance(Stance::Aggressive)
            .sp(0, 100)
            .build();
        actor
            .buffs
            .set(BuffKind::CooldownGrit, 12, 0.0, Stacking::REPLACE);

        let err = check(Ability::Grit, &actor, Loadout::default(), false).unwrap_err();
        assert_eq!(
            err,
            AbilityError::OnCooldown {
                ability: Ability::Grit,
                remaining: 12
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
    }

    #[test]
    fn stance_before_gear_before_armor() {
        let actor = Combatant::builder(EntityId::PLAYER)
            .stance(Stance::Defensive)
            .build();
        let heavy = Loadout {
            armor: ArmorClass::Heavy,
            ..Loadout::default()
        };

        assert!(matches!(
            check(Ability::HeadlongStrike, &actor, heavy, false),
            Err(AbilityError::WrongStance { .. })
        ));

        let actor = Combatant {
            stance: Stance::Aggressive,
            ..actor
        };
        assert_eq!(
            check(Ability::HeadlongStrike, &actor, heavy, false),
            Err(AbilityError::RequiresMelee(Ability::HeadlongStrike))
        );

        let heavy_melee = Loadout {
            melee: true,
            ..heavy
        };
        assert!(matches!(
            check(Ability::HeadlongStrike, &actor, heavy_melee, false),
            Err(AbilityError::ArmorTooHeavy { .. })
        ));
    }

    #[test]
    fn target_is_required_for_attacking_abilities() {
        let actor = Combatant::builder(EntityId::PLAYER).build();
        let result = check_requirements(
            Ability::RapidStrike,
            &actor,
            &melee(),
            TargetStatus::Missing,
            false,
            &AbilityTable::default(),
        );
        assert_eq!(result, Err(AbilityError::InvalidTarget(Ability::RapidStrike)));
    }

    #[test]
    fn hp_cost_needs_confirmation_when_it_could_kill() {
        let actor = Combatant::builder(EntityId::PLAYER)
            .stance(Stance::Aggressive)
            .hp(10, 100)
            .build();
        assert_eq!(
            check(Ability::EyeForAnEye, &actor, melee(), false),
            Err(AbilityError::ConfirmationRequired(Ability::EyeForAnEye))
        );
        assert!(check(Ability::EyeForAnEye, &actor, melee(), true).is_ok());

        let healthy = Combatant {
            hp: crate::state::ResourceMeter::full(100),
            ..actor
        };
        assert!(check(Ability::EyeForAnEye, &healthy, melee(), false).is_ok());
    }

    #[test]
    fn lady_luck_mana_is_waived_unless_strict() {
        let actor = Combatant::builder(EntityId::PLAYER).mp(3, 50).build();
        assert!(check(Ability::LadyLuck, &actor, Loadout::default(), false).is_ok());

        let strict = AbilityTable {
            lady_luck_waives_mana_cost: false,
            ..AbilityTable::default()
        };
        let refused = check_requirements(
            Ability::LadyLuck,
            &actor,
            &Loadout::default(),
            TargetStatus::Valid,
            false,
            &strict,
        );
        assert!(matches!(
            refused,
            Err(AbilityError::InsufficientMana { needed: 10, available: 3, .. })
        ));

        // The waiver is LadyLuck's alone.
        let mut table = AbilityTable::default();
        table.grit.mp_cost = 10;
        let grit = Combatant {
            stance: Stance::Defensive,
            ..actor
        };
        assert!(matches!(
            check_requirements(
                Ability::Grit,
                &grit,
                &Loadout::default(),
                TargetStatus::Valid,
                false,
                &table,
            ),
            Err(AbilityError::InsufficientMana { .. })
        ));
    }

    #[test]
    fn stamina_shortfall_is_rejected() {
        let actor = Combatant::builder(EntityId::PLAYER).sp(5, 100).build();
        assert!(matches!(
            check(Ability::CarefulAim, &actor, Loadout::default(), false),
            Err(AbilityError::InsufficientStamina { needed: 10, .. })
        ));
    }
}
