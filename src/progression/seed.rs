//! Starting roster loaded from `assets/data/session.ron`.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashSet;

use super::quests::{Quest, QuestKind, QuestObjective, QuestRewards};
use super::skills::{Skill, SkillKind};
use crate::core::{non_negative, ConfigError, DataFile};
use crate::enemies::EnemyKind;
use crate::inventory::{EquipSlot, InventoryItem, ItemStats, Rarity};
use crate::shadows::{Shadow, ShadowKind};

/// Skills, shadows, items and quests the player starts a session with.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSeed {
    /// Hotbar order: slot 0 is the first entry.
    pub skills: Vec<Skill>,
    pub shadows: Vec<Shadow>,
    pub inventory: Vec<InventoryItem>,
    /// Equipped at session start. Later entries win on slot clashes.
    pub equipped: Vec<InventoryItem>,
    pub quests: Vec<Quest>,
}

impl DataFile for SessionSeed {
    const PATH: &'static str = "assets/data/session.ron";

    fn validate(&self) -> Result<(), ConfigError> {
        unique_ids("skills", self.skills.iter().map(|s| s.id.as_str()))?;
        unique_ids("shadows", self.shadows.iter().map(|s| s.id.as_str()))?;
        unique_ids(
            "items",
            self.inventory
                .iter()
                .chain(self.equipped.iter())
                .map(|i| i.id.as_str()),
        )?;
        unique_ids("quests", self.quests.iter().map(|q| q.id.as_str()))?;

        for skill in &self.skills {
            skill.validate()?;
        }
        for shadow in &self.shadows {
            non_negative(&format!("shadows.{}.attack", shadow.id), shadow.attack)?;
        }
        for item in self.inventory.iter().chain(self.equipped.iter()) {
            item.validate()?;
        }
        for quest in &self.quests {
            quest.validate()?;
        }
        Ok(())
    }
}

fn unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::invalid(kind, format!("duplicate id '{id}'")));
        }
    }
    Ok(())
}

impl Default for SessionSeed {
    fn default() -> Self {
        Self {
            skills: vec![
                skill("dagger-rush", "Dagger Rush", SkillKind::Attack, 50.0, 5.0,
                    "Slash through every enemy in the dungeon."),
                skill("arise", "Arise", SkillKind::Summon, 0.0, 10.0,
                    "Raise the next shadow from your army."),
                skill("bloodlust", "Bloodlust", SkillKind::Buff, 0.0, 30.0,
                    "Fear radiates outward, unnerving nearby foes."),
            ],
            shadows: vec![
                shadow("igris", "Igris", 10, ShadowKind::Warrior, 25.0),
                shadow("tank", "Tank", 8, ShadowKind::Tank, 15.0),
                shadow("iron", "Iron", 8, ShadowKind::Tank, 18.0),
                shadow("tusk", "Tusk", 9, ShadowKind::Mage, 22.0),
                shadow("beru", "Beru", 12, ShadowKind::Assassin, 35.0),
                shadow("greed", "Greed", 7, ShadowKind::Warrior, 20.0),
            ],
            inventory: vec![
                item("venom-fang", "Kasaka's Venom Fang", EquipSlot::Weapon, Rarity::Rare,
                    ItemStats { attack: Some(15.0), ..Default::default() }),
                item("knight-killer", "Knight Killer", EquipSlot::Weapon, Rarity::Epic,
                    ItemStats { attack: Some(25.0), ..Default::default() }),
                item("knight-helm", "High Knight's Helmet", EquipSlot::Helmet, Rarity::Rare,
                    ItemStats { defense: Some(5.0), health: Some(20.0), ..Default::default() }),
                item("boots-of-haste", "Boots of Haste", EquipSlot::Boots, Rarity::Common,
                    ItemStats { defense: Some(2.0), ..Default::default() }),
            ],
            equipped: vec![item(
                "rusty-dagger",
                "Rusty Dagger",
                EquipSlot::Weapon,
                Rarity::Common,
                ItemStats { attack: Some(5.0), ..Default::default() },
            )],
            quests: vec![
                Quest {
                    id: "double-dungeon".to_string(),
                    title: "The Double Dungeon".to_string(),
                    description: "Defeat the beasts guarding the dungeon.".to_string(),
                    kind: QuestKind::Main,
                    progress: 0,
                    max_progress: 4,
                    rewards: QuestRewards { exp: 200, gold: 500 },
                    objective: QuestObjective::Defeat { kind: None },
                    completed: false,
                },
                Quest {
                    id: "elite-hunter".to_string(),
                    title: "Elite Hunter".to_string(),
                    description: "Bring down an elite beast.".to_string(),
                    kind: QuestKind::Side,
                    progress: 0,
                    max_progress: 1,
                    rewards: QuestRewards { exp: 100, gold: 200 },
                    objective: QuestObjective::Defeat { kind: Some(EnemyKind::Elite) },
                    completed: false,
                },
                Quest {
                    id: "daily-training".to_string(),
                    title: "Daily Training".to_string(),
                    description: "100 push-ups, 100 sit-ups, 100 squats.".to_string(),
                    kind: QuestKind::Event,
                    progress: 0,
                    max_progress: 100,
                    rewards: QuestRewards { exp: 50, gold: 0 },
                    objective: QuestObjective::Manual,
                    completed: false,
                },
            ],
        }
    }
}

fn skill(id: &str, name: &str, kind: SkillKind, damage: f32, cooldown: f32, description: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        damage,
        cooldown,
        current_cooldown: 0.0,
        level: 1,
        max_level: 10,
        description: description.to_string(),
    }
}

fn shadow(id: &str, name: &str, level: u32, kind: ShadowKind, attack: f32) -> Shadow {
    Shadow {
        id: id.to_string(),
        name: name.to_string(),
        level,
        kind,
        attack,
    }
}

fn item(id: &str, name: &str, slot: EquipSlot, rarity: Rarity, stats: ItemStats) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        slot,
        rarity,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_is_valid() {
        assert!(SessionSeed::default().validate().is_ok());
    }

    #[test]
    fn duplicate_skill_ids_are_rejected() {
        let mut seed = SessionSeed::default();
        let copy = seed.skills[0].clone();
        seed.skills.push(copy);
        assert!(matches!(seed.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn negative_item_health_is_rejected() {
        let mut seed = SessionSeed::default();
        seed.equipped[0].stats.health = Some(-200.0);
        assert!(matches!(seed.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn shipped_session_file_parses() {
        let seed: SessionSeed = crate::core::read_ron(SessionSeed::PATH).unwrap();
        assert!(seed.validate().is_ok());
        assert!(!seed.skills.is_empty());
    }
}
