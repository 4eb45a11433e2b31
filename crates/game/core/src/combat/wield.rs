//! Wield classification.
//!
//! The classification is derived fresh from the two hand slots before every
//! attack and never stored. Rules are an ordered elimination chain; the
//! order of the checks in [`classify`] is significant.

use arrayvec::ArrayVec;

use crate::env::{ArmorData, ItemDefinition, ItemKind, WeaponData};
use crate::state::EquipSlot;

/// Which hand performs a swing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Hand {
    Main,
    Off,
}

impl Hand {
    pub const fn slot(self) -> EquipSlot {
        match self {
            Hand::Main => EquipSlot::MainHand,
            Hand::Off => EquipSlot::OffHand,
        }
    }

    pub const fn other(self) -> Hand {
        match self {
            Hand::Main => Hand::Off,
            Hand::Off => Hand::Main,
        }
    }
}

/// What a single hand holds, reduced to what classification cares about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HandItem {
    Empty,
    Weapon(WeaponData),
    Shield(ArmorData),
    /// Anything that is neither weapon nor shield.
    Other,
}

impl HandItem {
    pub fn from_definition(definition: Option<&ItemDefinition>) -> Self {
        match definition.map(|d| &d.kind) {
            None => HandItem::Empty,
            Some(ItemKind::Weapon(weapon)) => HandItem::Weapon(*weapon),
            Some(ItemKind::Shield(shield)) => HandItem::Shield(*shield),
            Some(_) => HandItem::Other,
        }
    }

    pub fn weapon(&self) -> Option<&WeaponData> {
        match self {
            HandItem::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self, HandItem::Weapon(_))
    }

    pub fn is_shield(&self) -> bool {
        matches!(self, HandItem::Shield(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, HandItem::Empty)
    }
}

/// Discrete wield configuration.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WieldKind {
    /// Cannot attack at all.
    None,
    Unarmed,
    UnarmedShield,
    SingleWield,
    DualWield,
    OneHandShield,
    OneHandExtra,
    TwoHand,
    HandAndAHalf,
    ShieldOnly,
}

impl WieldKind {
    /// Configurations that fight with fists.
    pub const fn is_unarmed(self) -> bool {
        matches!(self, WieldKind::Unarmed | WieldKind::UnarmedShield)
    }

    /// Configurations holding a shield that can block.
    pub const fn has_shield(self) -> bool {
        matches!(
            self,
            WieldKind::OneHandShield | WieldKind::UnarmedShield | WieldKind::ShieldOnly
        )
    }

    /// Configurations wielding a weapon with both hands.
    pub const fn is_two_handed(self) -> bool {
        matches!(self, WieldKind::TwoHand | WieldKind::HandAndAHalf)
    }
}

/// Classification result: the configuration plus per-hand attack flags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wield {
    pub kind: WieldKind,
    pub main: HandItem,
    pub off: HandItem,
    pub main_attacks: bool,
    pub off_attacks: bool,
}

impl Wield {
    pub fn item(&self, hand: Hand) -> &HandItem {
        match hand {
            Hand::Main => &self.main,
            Hand::Off => &self.off,
        }
    }

    pub fn attacks(&self, hand: Hand) -> bool {
        match hand {
            Hand::Main => self.main_attacks,
            Hand::Off => self.off_attacks,
        }
    }

    /// Hands that swing in one attack. Unarmed configurations punch once,
    /// preferring the main hand.
    pub fn firing_hands(&self) -> ArrayVec<Hand, 2> {
        let mut hands: ArrayVec<Hand, 2> = [Hand::Main, Hand::Off]
            .into_iter()
            .filter(|hand| self.attacks(*hand))
            .collect();
        if self.kind.is_unarmed() {
            hands.truncate(1);
        }
        hands
    }

    /// Weapon swung by `hand`, or `None` when that hand punches.
    pub fn weapon(&self, hand: Hand) -> Option<&WeaponData> {
        self.item(hand).weapon()
    }

    /// Shield held in either hand.
    pub fn shield(&self) -> Option<(Hand, ArmorData)> {
        match (self.main, self.off) {
            (HandItem::Shield(shield), _) => Some((Hand::Main, shield)),
            (_, HandItem::Shield(shield)) => Some((Hand::Off, shield)),
            _ => None,
        }
    }

    /// True if any hand holds a melee (non-ranged) weapon.
    pub fn has_melee_weapon(&self) -> bool {
        [self.main, self.off]
            .iter()
            .filter_map(HandItem::weapon)
            .any(|w| !w.is_ranged())
    }

    /// True if any hand holds a ranged weapon.
    pub fn has_ranged_weapon(&self) -> bool {
        [self.main, self.off]
            .iter()
            .filter_map(HandItem::weapon)
            .any(WeaponData::is_ranged)
    }
}

fn wield(
    kind: WieldKind,
    main: HandItem,
    off: HandItem,
    main_attacks: bool,
    off_attacks: bool,
) -> Wield {
    Wield {
        kind,
        main,
        off,
        main_attacks,
        off_attacks,
    }
}

/// Classifies the two hand slots. Total over every combination.
pub fn classify(main: HandItem, off: HandItem) -> Wield {
    use HandItem::{Empty, Other, Shield, Weapon};

    match (main, off) {
        // 1. Both hands empty.
        (Empty, Empty) => wield(WieldKind::Unarmed, main, off, true, true),

        // 2. Two weapons.
        (Weapon(_), Weapon(_)) => wield(WieldKind::DualWield, main, off, true, true),

        // 3. Weapon and shield.
        (Weapon(_), Shield(_)) => wield(WieldKind::OneHandShield, main, off, true, false),
        (Shield(_), Weapon(_)) => wield(WieldKind::OneHandShield, main, off, false, true),

        // 4. Two-handed weapon in the main hand.
        (Weapon(w), _) if w.is_two_handed() => wield(WieldKind::TwoHand, main, off, true, false),

        // 5. One weapon, other hand empty.
        (Weapon(w), Empty) | (Empty, Weapon(w)) => {
            let kind = if w.is_hand_and_a_half() {
                WieldKind::HandAndAHalf
            } else {
                WieldKind::SingleWield
            };
            wield(kind, main, off, main.is_weapon(), off.is_weapon())
        }

        // 6. One weapon, other hand holds something else.
        (Weapon(_), Other) | (Other, Weapon(_)) => wield(
            WieldKind::OneHandExtra,
            main,
            off,
            main.is_weapon(),
            off.is_weapon(),
        ),

        // 7. Shield alone: punch with the free hand.
        (Shield(_), Empty) | (Empty, Shield(_)) => wield(
            WieldKind::UnarmedShield,
            main,
            off,
            main.is_empty(),
            off.is_empty(),
        ),

        // 8. No weapon, at least one empty hand.
        (Empty, Other) | (Other, Empty) => {
            wield(WieldKind::Unarmed, main, off, main.is_empty(), off.is_empty())
        }

        // 9. Shield with something else, or two shields.
        (Shield(_), Other) | (Other, Shield(_)) | (Shield(_), Shield(_)) => {
            wield(WieldKind::ShieldOnly, main, off, false, false)
        }

        // 10. Nothing usable.
        (Other, Other) => wield(WieldKind::None, main, off, false, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ArmorClass, DamageType, WeaponFlags};
    use crate::state::Skill;

    fn weapon(flags: WeaponFlags) -> HandItem {
        HandItem::Weapon(WeaponData {
            damage_type: DamageType::Edged,
            power: 5.0,
            speed: 2.0,
            crit: 5.0,
            bleed: 0.0,
            poison: 0.0,
            flags,
            ammo_type: 0,
            skill: Skill::Blades,
        })
    }

    fn shield() -> HandItem {
        HandItem::Shield(ArmorData {
            class: ArmorClass::Medium,
            power: 20.0,
        })
    }

    fn all_hand_items() -> Vec<HandItem> {
        vec![
            HandItem::Empty,
            weapon(WeaponFlags::empty()),
            weapon(WeaponFlags::TWO_HANDED),
            weapon(WeaponFlags::HAND_AND_A_HALF),
            weapon(WeaponFlags::RANGED | WeaponFlags::AMMO_REQUIRED),
            shield(),
            HandItem::Other,
        ]
    }

    #[test]
    fn classification_is_total_and_consistent() {
        for main in all_hand_items() {
            for off in all_hand_items() {
                let w = classify(main, off);
                assert_eq!(w, classify(main, off));
                // Only empty hands or weapons ever attack.
                for hand in [Hand::Main, Hand::Off] {
                    if w.attacks(hand) {
                        let item = w.item(hand);
                        assert!(item.is_weapon() || item.is_empty(), "{main:?} {off:?}");
                    }
                }
                if w.kind == WieldKind::None || w.kind == WieldKind::ShieldOnly {
                    assert!(w.firing_hands().is_empty());
                }
            }
        }
    }

    #[test]
    fn precedence_matches_the_rule_order() {
        let sword = weapon(WeaponFlags::empty());
        let greatsword = weapon(WeaponFlags::TWO_HANDED);
        let bastard = weapon(WeaponFlags::HAND_AND_A_HALF);

        assert_eq!(classify(HandItem::Empty, HandItem::Empty).kind, WieldKind::Unarmed);
        assert_eq!(classify(sword, sword).kind, WieldKind::DualWield);
        // A two-handed weapon with a second weapon is still dual wield.
        assert_eq!(classify(greatsword, sword).kind, WieldKind::DualWield);
        assert_eq!(classify(greatsword, shield()).kind, WieldKind::OneHandShield);
        assert_eq!(classify(greatsword, HandItem::Other).kind, WieldKind::TwoHand);
        assert_eq!(classify(bastard, HandItem::Empty).kind, WieldKind::HandAndAHalf);
        assert_eq!(classify(HandItem::Empty, sword).kind, WieldKind::SingleWield);
        assert_eq!(classify(sword, HandItem::Other).kind, WieldKind::OneHandExtra);
        assert_eq!(classify(shield(), HandItem::Empty).kind, WieldKind::UnarmedShield);
        assert_eq!(classify(HandItem::Other, HandItem::Empty).kind, WieldKind::Unarmed);
        assert_eq!(classify(shield(), HandItem::Other).kind, WieldKind::ShieldOnly);
        assert_eq!(classify(HandItem::Other, HandItem::Other).kind, WieldKind::None);
    }

    #[test]
    fn firing_hands_per_configuration() {
        let sword = weapon(WeaponFlags::empty());

        let dual = classify(sword, sword);
        assert_eq!(dual.firing_hands().as_slice(), &[Hand::Main, Hand::Off]);

        let off_hand_only = classify(HandItem::Other, sword);
        assert_eq!(off_hand_only.firing_hands().as_slice(), &[Hand::Off]);

        let fists = classify(HandItem::Empty, HandItem::Empty);
        assert_eq!(fists.firing_hands().as_slice(), &[Hand::Main]);

        let shielded = classify(shield(), HandItem::Empty);
        assert_eq!(shielded.firing_hands().as_slice(), &[Hand::Off]);
        assert_eq!(shielded.shield().map(|(hand, _)| hand), Some(Hand::Main));
    }
}
