//! Buff ledger: timed cooldowns, combat buffs and damage-over-time debuffs.
//!
//! Every combatant carries one [`BuffLedger`]. Entries are keyed by
//! [`BuffKind`] and a ledger never holds two entries of the same kind, so the
//! backing storage is sized to the number of kinds and can never overflow.
//!
//! # Tick-based Duration
//!
//! Durations count world ticks (one per simulated second). A
//! [`BuffDuration::Permanent`] entry is never decremented and stays until it
//! is cleared explicitly.

use arrayvec::ArrayVec;
use strum::EnumCount;

use crate::ability::Ability;

/// Types of ledger entries.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BuffKind {
    // ========================================================================
    // Ability cooldowns
    // ========================================================================
    CooldownCarefulAim,
    CooldownEyeForAnEye,
    CooldownGrit,
    CooldownHeadlongStrike,
    CooldownLadyLuck,
    CooldownQuickRoll,
    CooldownRapidStrike,
    CooldownShieldWall,
    CooldownSnapShot,

    // ========================================================================
    // Combat buffs
    // ========================================================================
    /// Flat hit-chance bonus, consumed by the next attack.
    CarefulAim,
    /// Guaranteed hit scaled by missing health; power is the multiplier.
    EyeForAnEye,
    /// Percentage of incoming damage redirected into absorption.
    Grit,
    /// Flat penalty to incoming hit chance, consumed when it applies.
    QuickRoll,
    /// Flat block-chance bonus.
    ShieldWall,

    // ========================================================================
    // Debuffs
    // ========================================================================
    /// Damage per tick.
    Bleed,
    /// Damage per tick.
    Poison,
    /// Every incoming attack hits and crits.
    SnakeEyes,
    /// Cowards do not flee again until this expires.
    RecentlyFled,
}

impl BuffKind {
    /// The ability whose readiness this cooldown tracks.
    pub const fn cooldown_of(self) -> Option<Ability> {
        match self {
            BuffKind::CooldownCarefulAim => Some(Ability::CarefulAim),
            BuffKind::CooldownEyeForAnEye => Some(Ability::EyeForAnEye),
            BuffKind::CooldownGrit => Some(Ability::Grit),
            BuffKind::CooldownHeadlongStrike => Some(Ability::HeadlongStrike),
            BuffKind::CooldownLadyLuck => Some(Ability::LadyLuck),
            BuffKind::CooldownQuickRoll => Some(Ability::QuickRoll),
            BuffKind::CooldownRapidStrike => Some(Ability::RapidStrike),
            BuffKind::CooldownShieldWall => Some(Ability::ShieldWall),
            BuffKind::CooldownSnapShot => Some(Ability::SnapShot),
            _ => None,
        }
    }

    pub const fn is_cooldown(self) -> bool {
        self.cooldown_of().is_some()
    }

    /// Damage-over-time kinds hurt their carrier every tick.
    pub const fn is_damage_over_time(self) -> bool {
        matches!(self, BuffKind::Bleed | BuffKind::Poison)
    }
}

/// Remaining lifetime of a ledger entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuffDuration {
    Ticks(u16),
    /// Never decremented; lasts until cleared.
    Permanent,
}

impl BuffDuration {
    pub const fn ticks(self) -> u16 {
        match self {
            BuffDuration::Ticks(t) => t,
            BuffDuration::Permanent => u16::MAX,
        }
    }

    fn max(self, other: BuffDuration) -> BuffDuration {
        match (self, other) {
            (BuffDuration::Ticks(a), BuffDuration::Ticks(b)) => BuffDuration::Ticks(a.max(b)),
            _ => BuffDuration::Permanent,
        }
    }

    fn saturating_add(self, other: BuffDuration) -> BuffDuration {
        match (self, other) {
            (BuffDuration::Ticks(a), BuffDuration::Ticks(b)) => {
                BuffDuration::Ticks(a.saturating_add(b))
            }
            _ => BuffDuration::Permanent,
        }
    }
}

impl From<u16> for BuffDuration {
    fn from(ticks: u16) -> Self {
        BuffDuration::Ticks(ticks)
    }
}

/// A single ledger entry.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buff {
    pub kind: BuffKind,
    /// Meaning depends on kind: percentage, flat damage per tick, multiplier.
    pub power: f32,
    pub remaining: BuffDuration,
}

impl Buff {
    pub fn is_permanent(&self) -> bool {
        matches!(self.remaining, BuffDuration::Permanent)
    }
}

/// How [`BuffLedger::set`] merges into an existing entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stacking {
    /// Add power to the existing entry instead of taking the larger value.
    pub additive_power: bool,
    /// Add duration to the existing entry instead of taking the longer value.
    pub additive_time: bool,
}

impl Stacking {
    /// Keep the larger power and the longer duration.
    pub const REPLACE: Self = Self {
        additive_power: false,
        additive_time: false,
    };

    /// Accumulate both power and duration.
    pub const ADDITIVE: Self = Self {
        additive_power: true,
        additive_time: true,
    };
}

/// Per-combatant ledger of timed effects.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffLedger {
    entries: ArrayVec<Buff, { BuffKind::COUNT }>,
}

impl BuffLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new entry, or merges into the existing one of the same kind.
    pub fn set(
        &mut self,
        kind: BuffKind,
        duration: impl Into<BuffDuration>,
        power: f32,
        stacking: Stacking,
    ) {
        let duration = duration.into();
        if let Some(existing) = self.entries.iter_mut().find(|b| b.kind == kind) {
            existing.power = if stacking.additive_power {
                existing.power + power
            } else {
                existing.power.max(power)
            };
            existing.remaining = if stacking.additive_time {
                existing.remaining.saturating_add(duration)
            } else {
                existing.remaining.max(duration)
            };
            return;
        }

        // One slot per kind: capacity is BuffKind::COUNT, so this cannot fail.
        self.entries.push(Buff {
            kind,
            power,
            remaining: duration,
        });
    }

    /// Removes the entry if present.
    pub fn clear(&mut self, kind: BuffKind) {
        self.entries.retain(|b| b.kind != kind);
    }

    pub fn has(&self, kind: BuffKind) -> bool {
        self.get(kind).is_some()
    }

    /// Power of the entry, 0.0 when absent.
    pub fn power(&self, kind: BuffKind) -> f32 {
        self.get(kind).map_or(0.0, |b| b.power)
    }

    /// Remaining ticks, 0 when absent and `u16::MAX` for permanent entries.
    pub fn time_remaining(&self, kind: BuffKind) -> u16 {
        self.get(kind).map_or(0, |b| b.remaining.ticks())
    }

    pub fn get(&self, kind: BuffKind) -> Option<&Buff> {
        self.entries.iter().find(|b| b.kind == kind)
    }

    /// Decrements one timed entry, removing it when it reaches zero.
    ///
    /// Returns true if the entry expired. Permanent and absent entries are
    /// left untouched.
    pub fn decrement(&mut self, kind: BuffKind) -> bool {
        let Some(index) = self.entries.iter().position(|b| b.kind == kind) else {
            return false;
        };
        let BuffDuration::Ticks(ticks) = self.entries[index].remaining else {
            return false;
        };

        let ticks = ticks.saturating_sub(1);
        if ticks == 0 {
            self.entries.remove(index);
            true
        } else {
            self.entries[index].remaining = BuffDuration::Ticks(ticks);
            false
        }
    }

    /// Kinds of all timed (non-permanent) entries in ledger order.
    pub fn timed_kinds(&self) -> ArrayVec<BuffKind, { BuffKind::COUNT }> {
        self.entries
            .iter()
            .filter(|b| !b.is_permanent())
            .map(|b| b.kind)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Buff> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
