//! Hit location selection.

use crate::state::{Anatomy, HitLocation};

/// Picks the first anatomy entry whose threshold exceeds `roll` (0-99).
///
/// Returns `None` when the table does not cover the roll, which means the
/// anatomy data is broken.
pub fn hit_location(anatomy: &Anatomy, roll: u32) -> Option<HitLocation> {
    anatomy
        .locations
        .iter()
        .find(|location| roll < u32::from(location.threshold))
        .copied()
}
