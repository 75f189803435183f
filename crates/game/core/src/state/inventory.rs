//! The party's shared bag of consumables.

use arrayvec::ArrayVec;
use strum::{Display, EnumIter};

use crate::config::EncounterConfig;
use crate::error::InventoryError;

/// Single-use items any party member may reach for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Consumable {
    #[strum(serialize = "elixir")]
    Elixir,
    #[strum(serialize = "fire bomb")]
    FireBomb,
    #[strum(serialize = "devil's dust")]
    DevilsDust,
}

impl Consumable {
    pub const fn description(self) -> &'static str {
        match self {
            Self::Elixir => "restores 7-12 stamina",
            Self::FireBomb => "deals 7-12 hellfire damage (always hits)",
            Self::DevilsDust => "increases power by 2 and speed to fast for 4 rounds",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: ArrayVec<Consumable, { EncounterConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Consumable) -> Result<(), InventoryError> {
        self.items.try_push(item).map_err(|_| InventoryError::Full)
    }

    pub fn remove(&mut self, slot: usize) -> Result<Consumable, InventoryError> {
        if slot >= self.items.len() {
            return Err(InventoryError::EmptySlot(slot));
        }
        Ok(self.items.remove(slot))
    }

    pub fn items(&self) -> &[Consumable] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }
}

impl TryFrom<&[Consumable]> for Inventory {
    type Error = InventoryError;

    fn try_from(items: &[Consumable]) -> Result<Self, Self::Error> {
        let mut inventory = Self::new();
        for &item in items {
            inventory.add(item)?;
        }
        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_at_most_three_items() {
        let mut inventory = Inventory::new();
        inventory.add(Consumable::Elixir).unwrap();
        inventory.add(Consumable::FireBomb).unwrap();
        inventory.add(Consumable::DevilsDust).unwrap();
        assert!(inventory.is_full());
        assert_eq!(inventory.add(Consumable::Elixir), Err(InventoryError::Full));
    }

    #[test]
    fn remove_shifts_remaining_items() {
        let mut inventory =
            Inventory::try_from(&[Consumable::Elixir, Consumable::FireBomb][..]).unwrap();
        assert_eq!(inventory.remove(0), Ok(Consumable::Elixir));
        assert_eq!(inventory.items(), &[Consumable::FireBomb]);
        assert_eq!(inventory.remove(3), Err(InventoryError::EmptySlot(3)));
    }
}
