//! Combat stances.

/// Combat stance held by every combatant.
///
/// The three stances form a cycle: Aggressive beats Balanced, Balanced beats
/// Defensive and Defensive beats Aggressive. See
/// [`compare_stances`](crate::combat::compare_stances).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stance {
    Aggressive,
    #[default]
    Balanced,
    Defensive,
}

impl Stance {
    /// The stance this one beats in the advantage cycle.
    pub const fn beats(self) -> Stance {
        match self {
            Stance::Aggressive => Stance::Balanced,
            Stance::Balanced => Stance::Defensive,
            Stance::Defensive => Stance::Aggressive,
        }
    }
}

bitflags::bitflags! {
    /// A set of stances, used by ability requirements.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StanceSet: u8 {
        const AGGRESSIVE = 1 << 0;
        const BALANCED   = 1 << 1;
        const DEFENSIVE  = 1 << 2;
    }
}

impl StanceSet {
    pub const fn allows(self, stance: Stance) -> bool {
        self.contains(Self::of(stance))
    }

    pub const fn of(stance: Stance) -> Self {
        match stance {
            Stance::Aggressive => Self::AGGRESSIVE,
            Stance::Balanced => Self::BALANCED,
            Stance::Defensive => Self::DEFENSIVE,
        }
    }
}
