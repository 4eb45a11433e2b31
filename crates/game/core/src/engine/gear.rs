//! Equipment lookups that resolve item handles through the catalog.

use crate::combat::{CombatError, Hand, HandItem, Wield, WieldKind, classify};
use crate::config::DamageTable;
use crate::env::{
    AmmoData, ArmorClass, ArmorData, DamageType, EquipModifiers, GameEnv, ItemDefinition,
    ItemKind, WeaponData, WeaponFlags,
};
use crate::state::{CombatTags, Combatant, EquipSlot, ItemHandle, Skill};

/// Fallback weapon swung by an empty hand.
pub fn unarmed_weapon(table: &DamageTable) -> WeaponData {
    WeaponData {
        damage_type: DamageType::Impact,
        power: table.unarmed_power,
        speed: table.unarmed_speed,
        crit: table.unarmed_crit,
        bleed: 0.0,
        poison: 0.0,
        flags: WeaponFlags::empty(),
        ammo_type: 0,
        skill: Skill::Unarmed,
    }
}

fn definition(
    env: &GameEnv<'_>,
    owner: &Combatant,
    handle: ItemHandle,
) -> Result<ItemDefinition, CombatError> {
    env.item(handle).ok_or(CombatError::UnknownItem {
        owner: owner.id,
        handle,
    })
}

fn equipped(
    env: &GameEnv<'_>,
    owner: &Combatant,
    slot: EquipSlot,
) -> Result<Option<ItemDefinition>, CombatError> {
    owner
        .equipment
        .get(slot)
        .map(|handle| definition(env, owner, handle))
        .transpose()
}

/// Classifies the combatant's hands.
pub fn wield_of(env: &GameEnv<'_>, combatant: &Combatant) -> Result<Wield, CombatError> {
    let main = equipped(env, combatant, EquipSlot::MainHand)?;
    let off = equipped(env, combatant, EquipSlot::OffHand)?;
    Ok(classify(
        HandItem::from_definition(main.as_ref()),
        HandItem::from_definition(off.as_ref()),
    ))
}

/// Sum of dodge, parry and block bonuses over every equipped item.
pub fn equipment_modifiers(
    env: &GameEnv<'_>,
    combatant: &Combatant,
) -> Result<EquipModifiers, CombatError> {
    combatant
        .equipment
        .equipped()
        .try_fold(EquipModifiers::default(), |total, handle| {
            Ok(total + definition(env, combatant, handle)?.modifiers)
        })
}

/// Armor worn in `slot`. Shields are not worn armor.
pub fn slot_armor(
    env: &GameEnv<'_>,
    combatant: &Combatant,
    slot: EquipSlot,
) -> Result<Option<ArmorData>, CombatError> {
    if matches!(slot, EquipSlot::MainHand | EquipSlot::OffHand) {
        return Ok(None);
    }
    Ok(equipped(env, combatant, slot)?.and_then(|def| match def.kind {
        ItemKind::Armor(armor) => Some(armor),
        _ => None,
    }))
}

/// Heaviest armor class worn in any armor slot.
pub fn worn_armor_class(
    env: &GameEnv<'_>,
    combatant: &Combatant,
) -> Result<ArmorClass, CombatError> {
    let mut heaviest = ArmorClass::None;
    for slot in [
        EquipSlot::Head,
        EquipSlot::Body,
        EquipSlot::Hands,
        EquipSlot::Legs,
        EquipSlot::Feet,
    ] {
        if let Some(armor) = slot_armor(env, combatant, slot)? {
            heaviest = heaviest.max(armor.class);
        }
    }
    Ok(heaviest)
}

/// First carried ammo stack of the given family.
pub fn find_ammo(
    env: &GameEnv<'_>,
    combatant: &Combatant,
    ammo_type: u16,
) -> Result<Option<(ItemHandle, AmmoData)>, CombatError> {
    for slot in combatant.inventory.iter() {
        if slot.quantity == 0 {
            continue;
        }
        let def = definition(env, combatant, slot.handle)?;
        if let Some(ammo) = def.ammo() {
            if ammo.ammo_type == ammo_type {
                return Ok(Some((slot.handle, *ammo)));
            }
        }
    }
    Ok(None)
}

/// Seconds one attack costs, after the global and ability multipliers.
pub fn attack_speed(
    env: &GameEnv<'_>,
    combatant: &Combatant,
    wield: &Wield,
) -> Result<f32, CombatError> {
    let tables = env.tables;
    let unarmed = tables.damage.unarmed_speed;
    let hand_speed = |hand: Hand| wield.weapon(hand).map_or(unarmed, |w| w.speed);

    let base = match wield.kind {
        WieldKind::DualWield => hand_speed(Hand::Main).max(hand_speed(Hand::Off)),
        kind if kind.is_unarmed() => unarmed,
        _ => match wield.firing_hands().first() {
            Some(hand) => hand_speed(*hand),
            None => {
                return Err(CombatError::MissingAttackSpeed {
                    attacker: combatant.id,
                    wield: wield.kind.into(),
                });
            }
        },
    };

    let abilities = &tables.abilities;
    let mut speed = base * tables.time.attack_speed_multiplier;
    if combatant.tags.contains(CombatTags::RAPID_STRIKE) {
        speed *= abilities.rapid_strike.speed_multiplier;
    }
    if combatant.tags.contains(CombatTags::SNAP_SHOT) {
        speed *= abilities.snap_shot.speed_multiplier;
    }
    if combatant.tags.contains(CombatTags::HEADLONG_STRIKE) {
        speed *= abilities.headlong_strike.speed_multiplier;
    }
    Ok(speed)
}
