//! Special moves.
//!
//! Each ability is described declaratively: a requirement row
//! ([`AbilityRequirements`]), a tuning row in
//! [`AbilityTable`](crate::config::AbilityTable) and, depending on the
//! ability, an effect buff or a transient attack tag. Execution lives on
//! [`GameEngine`](crate::engine::GameEngine).

mod error;
mod lady_luck;
mod requirements;

pub use error::AbilityError;
pub use lady_luck::{LuckOutcome, read_dice};
pub use requirements::{
    AbilityRequirements, GearRequirement, Loadout, TargetStatus, check_requirements,
};

use crate::config::{AbilityTable, AbilityTuning};
use crate::env::ArmorClass;
use crate::state::{BuffKind, CombatTags, StanceSet};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Ability {
    CarefulAim,
    EyeForAnEye,
    Grit,
    HeadlongStrike,
    LadyLuck,
    QuickRoll,
    RapidStrike,
    ShieldWall,
    SnapShot,
}

impl Ability {
    /// Ledger entry that blocks reuse.
    pub const fn cooldown(self) -> BuffKind {
        match self {
            Ability::CarefulAim => BuffKind::CooldownCarefulAim,
            Ability::EyeForAnEye => BuffKind::CooldownEyeForAnEye,
            Ability::Grit => BuffKind::CooldownGrit,
            Ability::HeadlongStrike => BuffKind::CooldownHeadlongStrike,
            Ability::LadyLuck => BuffKind::CooldownLadyLuck,
            Ability::QuickRoll => BuffKind::CooldownQuickRoll,
            Ability::RapidStrike => BuffKind::CooldownRapidStrike,
            Ability::ShieldWall => BuffKind::CooldownShieldWall,
            Ability::SnapShot => BuffKind::CooldownSnapShot,
        }
    }

    /// Buff applied on success, for abilities that grant one.
    pub const fn effect_buff(self) -> Option<BuffKind> {
        match self {
            Ability::CarefulAim => Some(BuffKind::CarefulAim),
            Ability::EyeForAnEye => Some(BuffKind::EyeForAnEye),
            Ability::Grit => Some(BuffKind::Grit),
            Ability::QuickRoll => Some(BuffKind::QuickRoll),
            Ability::ShieldWall => Some(BuffKind::ShieldWall),
            _ => None,
        }
    }

    /// Ability that grants `buff`, the inverse of [`Self::effect_buff`].
    pub const fn granting(buff: BuffKind) -> Option<Ability> {
        match buff {
            BuffKind::CarefulAim => Some(Ability::CarefulAim),
            BuffKind::EyeForAnEye => Some(Ability::EyeForAnEye),
            BuffKind::Grit => Some(Ability::Grit),
            BuffKind::QuickRoll => Some(Ability::QuickRoll),
            BuffKind::ShieldWall => Some(Ability::ShieldWall),
            _ => None,
        }
    }

    /// Transient tag set around the single attack this ability performs.
    pub const fn attack_tag(self) -> Option<CombatTags> {
        match self {
            Ability::HeadlongStrike => Some(CombatTags::HEADLONG_STRIKE),
            Ability::RapidStrike => Some(CombatTags::RAPID_STRIKE),
            Ability::SnapShot => Some(CombatTags::SNAP_SHOT),
            _ => None,
        }
    }

    pub fn tuning(self, table: &AbilityTable) -> AbilityTuning {
        match self {
            Ability::CarefulAim => table.careful_aim,
            Ability::EyeForAnEye => table.eye_for_an_eye,
            Ability::Grit => table.grit,
            Ability::HeadlongStrike => table.headlong_strike,
            Ability::LadyLuck => table.lady_luck,
            Ability::QuickRoll => table.quick_roll,
            Ability::RapidStrike => table.rapid_strike,
            Ability::ShieldWall => table.shield_wall,
            Ability::SnapShot => table.snap_shot,
        }
    }

    pub const fn requirements(self) -> AbilityRequirements {
        let any = AbilityRequirements::ANY;
        match self {
            Ability::CarefulAim => AbilityRequirements {
                stances: StanceSet::BALANCED.union(StanceSet::DEFENSIVE),
                ..any
            },
            Ability::EyeForAnEye => AbilityRequirements {
                stances: StanceSet::AGGRESSIVE,
                gear: GearRequirement::Melee,
                ..any
            },
            Ability::Grit => AbilityRequirements {
                stances: StanceSet::DEFENSIVE,
                ..any
            },
            Ability::HeadlongStrike => AbilityRequirements {
                stances: StanceSet::AGGRESSIVE,
                gear: GearRequirement::Melee,
                max_armor: ArmorClass::Medium,
                needs_target: true,
            },
            Ability::LadyLuck => AbilityRequirements {
                needs_target: true,
                ..any
            },
            Ability::QuickRoll => AbilityRequirements {
                stances: StanceSet::BALANCED.union(StanceSet::AGGRESSIVE),
                max_armor: ArmorClass::Light,
                ..any
            },
            Ability::RapidStrike => AbilityRequirements {
                stances: StanceSet::AGGRESSIVE.union(StanceSet::BALANCED),
                gear: GearRequirement::Melee,
                needs_target: true,
                ..any
            },
            Ability::ShieldWall => AbilityRequirements {
                stances: StanceSet::DEFENSIVE,
                gear: GearRequirement::Shield,
                ..any
            },
            Ability::SnapShot => AbilityRequirements {
                gear: GearRequirement::Ranged,
                needs_target: true,
                ..any
            },
        }
    }
}
