//! Behavioral tags carried by combatants.

bitflags::bitflags! {
    /// Boolean behavioral tags.
    ///
    /// Template tags (cowardice, agility, immunities, strength) are set at
    /// spawn and never change. Transient tags live for a single attack call and
    /// are cleared by whoever set them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CombatTags: u64 {
        // ===== behavior =====
        const COWARD            = 1 << 0;
        const AGILE             = 1 << 1;
        const CLUMSY            = 1 << 2;
        const UNLIVING          = 1 << 3;
        const AGGRO_ON_SIGHT    = 1 << 4;
        const OPENS_DOORS       = 1 << 5;

        // ===== defensive restrictions =====
        const CANNOT_DODGE      = 1 << 8;
        const CANNOT_BLOCK      = 1 << 9;
        const CANNOT_PARRY      = 1 << 10;
        const IMMUNITY_BLEED    = 1 << 11;
        const IMMUNITY_POISON   = 1 << 12;

        // ===== strength ladder (mutually exclusive) =====
        const ANEMIC            = 1 << 16;
        const FEEBLE            = 1 << 17;
        const PUNY              = 1 << 18;
        const STRONG            = 1 << 19;
        const BRAWNY            = 1 << 20;
        const VIGOROUS          = 1 << 21;
        const MIGHTY            = 1 << 22;

        // ===== transient, per attack =====
        const FREE_ATTACK       = 1 << 32;
        const RAPID_STRIKE      = 1 << 33;
        const SNAP_SHOT         = 1 << 34;
        const HEADLONG_STRIKE   = 1 << 35;
        const BOXCARS           = 1 << 36;

        // ===== transient success markers =====
        const EYE_FOR_AN_EYE_HIT = 1 << 40;
        const GRIT_HELD          = 1 << 41;
        const QUICK_ROLL_USED    = 1 << 42;
        const SHIELD_WALL_HELD   = 1 << 43;
    }
}

impl CombatTags {
    /// Tags that only live for the duration of one attack.
    pub const TRANSIENT: Self = Self::FREE_ATTACK
        .union(Self::RAPID_STRIKE)
        .union(Self::SNAP_SHOT)
        .union(Self::HEADLONG_STRIKE)
        .union(Self::BOXCARS);

    /// Markers set during a swing and consumed at the end of the attack.
    pub const SUCCESS_MARKERS: Self = Self::EYE_FOR_AN_EYE_HIT
        .union(Self::GRIT_HELD)
        .union(Self::QUICK_ROLL_USED)
        .union(Self::SHIELD_WALL_HELD);

    /// Unliving combatants neither bleed nor take poison.
    pub fn is_bleed_immune(self) -> bool {
        self.intersects(Self::IMMUNITY_BLEED | Self::UNLIVING)
    }

    pub fn is_poison_immune(self) -> bool {
        self.intersects(Self::IMMUNITY_POISON | Self::UNLIVING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unliving_implies_both_immunities() {
        let tags = CombatTags::UNLIVING;
        assert!(tags.is_bleed_immune());
        assert!(tags.is_poison_immune());
    }

    #[test]
    fn explicit_immunities_are_independent() {
        assert!(CombatTags::IMMUNITY_BLEED.is_bleed_immune());
        assert!(!CombatTags::IMMUNITY_BLEED.is_poison_immune());
    }

    #[test]
    fn transient_and_markers_do_not_overlap_template_tags() {
        let template = CombatTags::COWARD | CombatTags::MIGHTY | CombatTags::CANNOT_DODGE;
        assert!(!template.intersects(CombatTags::TRANSIENT));
        assert!(!template.intersects(CombatTags::SUCCESS_MARKERS));
    }
}
