//! The premade party and its starting supplies.

use encounter_core::{Actor, ActorId, Consumable, Inventory, InventoryError};

use crate::archetypes::{DIABOLIST, FURIOSO, GENDARME, HEATHEN};
use crate::armor::{
    BARE, BLACK_HOOD, CAPE, FLAMING_TOPKNOT, HEAVY_MAIL, LIGHT_MAIL, MOON_CIRCLET, WINGED_HELM,
};
use crate::arms::{
    BASTARD_SWORD, DAGGER_AND_WHIP, PAIRED_SWORDS, POLEARM, SHIELD_AND_CLUB, SHIELD_AND_SWORD,
};

pub fn valeria() -> Actor {
    Actor::new(ActorId(1), "Valeria")
        .with_description("Valeria, a gendarme in heavy mail behind shield and sword")
        .with_archetype(GENDARME)
        .with_armor(HEAVY_MAIL)
        .with_headgear(WINGED_HELM)
        .with_arms(SHIELD_AND_SWORD, Some(POLEARM))
}

pub fn sonja() -> Actor {
    Actor::new(ActorId(2), "Sonja")
        .with_description("Sonja, a heathen twirling paired swords")
        .with_archetype(HEATHEN)
        .with_armor(BARE)
        .with_headgear(FLAMING_TOPKNOT)
        .with_arms(PAIRED_SWORDS, Some(DAGGER_AND_WHIP))
}

pub fn bosh() -> Actor {
    Actor::new(ActorId(3), "Bosh")
        .with_description("Bosh, a furioso hefting a bastard sword")
        .with_archetype(FURIOSO)
        .with_armor(LIGHT_MAIL)
        .with_headgear(BLACK_HOOD)
        .with_arms(BASTARD_SWORD, Some(SHIELD_AND_CLUB))
}

pub fn thoth() -> Actor {
    Actor::new(ActorId(4), "Thoth")
        .with_description("Thoth, a diabolist wrapped in a cape")
        .with_archetype(DIABOLIST)
        .with_armor(CAPE)
        .with_headgear(MOON_CIRCLET)
        .with_arms(DAGGER_AND_WHIP, Some(SHIELD_AND_SWORD))
}

/// Valeria, Sonja, Bosh and Thoth, in marching order.
pub fn premade_party() -> Vec<Actor> {
    vec![valeria(), sonja(), bosh(), thoth()]
}

/// One of each consumable.
pub fn default_inventory() -> Result<Inventory, InventoryError> {
    let mut inventory = Inventory::new();
    for item in [Consumable::Elixir, Consumable::FireBomb, Consumable::DevilsDust] {
        inventory.add(item)?;
    }
    Ok(inventory)
}
