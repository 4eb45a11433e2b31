//! Combat resolution formulas.
//!
//! This module provides pure functions for the numeric side of an attack.
//! The engine gathers inputs from state, draws the rolls, and feeds them
//! through these functions; nothing here touches state or randomness.
//!
//! # Core Functions
//!
//! - `classify`: wield configuration from the two hand slots
//! - `compare_stances`: stance matchup (+1 / 0 / -1)
//! - `hit_chance`, `parry_chance`, `block_chance`: defense rolls
//! - `base_damage`, `absorption_fraction`, `vary_damage`: damage pipeline
//! - `hit_location`: anatomy roll

pub mod damage;
pub mod hit;
pub mod location;
pub mod result;
pub mod stance;
pub mod wield;

pub use damage::{
    absorption_fraction, armor_modifier, base_damage, eye_for_an_eye_multiplier, grit_absorption,
    mitigate, strength_multiplier, vary_absorbed, vary_damage,
};
pub use hit::{
    BlockInputs, HitInputs, ParryInputs, block_chance, check, hit_chance, parry_chance,
    wield_multiplier,
};
pub use location::hit_location;
pub use result::{CombatError, SwingOutcome};
pub use stance::{compare_stances, damage_dealt_multiplier, damage_taken_multiplier};
pub use wield::{Hand, HandItem, Wield, WieldKind, classify};
