//! Item and equipment data.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::core::{non_negative, ConfigError};

/// Where an item is worn. At most one item per slot is equipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Helmet,
    Armor,
    Boots,
    Accessory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

/// Optional stat bonuses granted while equipped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ItemStats {
    pub attack: Option<f32>,
    pub defense: Option<f32>,
    pub health: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub slot: EquipSlot,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub stats: ItemStats,
}

impl InventoryItem {
    /// Bonuses must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ItemStats {
            attack,
            defense,
            health,
        } = self.stats;
        for (stat, value) in [("attack", attack), ("defense", defense), ("health", health)] {
            if let Some(value) = value {
                non_negative(&format!("items.{}.{}", self.id, stat), value)?;
            }
        }
        Ok(())
    }
}

/// Summed bonuses of everything equipped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatBonus {
    pub attack: f32,
    pub defense: f32,
    pub health: f32,
}

/// Equipped items, keyed by slot.
#[derive(Debug, Clone, Default)]
pub struct Equipment {
    slots: BTreeMap<EquipSlot, InventoryItem>,
}

impl Equipment {
    /// Put `item` in its slot, returning whatever was there before.
    pub fn equip(&mut self, item: InventoryItem) -> Option<InventoryItem> {
        self.slots.insert(item.slot, item)
    }

    pub fn get(&self, slot: EquipSlot) -> Option<&InventoryItem> {
        self.slots.get(&slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EquipSlot, &InventoryItem)> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn bonus(&self) -> StatBonus {
        self.slots.values().fold(StatBonus::default(), |acc, item| StatBonus {
            attack: acc.attack + item.stats.attack.unwrap_or(0.0),
            defense: acc.defense + item.stats.defense.unwrap_or(0.0),
            health: acc.health + item.stats.health.unwrap_or(0.0),
        })
    }
}
