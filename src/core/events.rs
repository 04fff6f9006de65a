//! Global events used for cross-system communication.
//!
//! Two kinds of events flow through the app. Intents come from the
//! presentation/input layer and are applied to the store during the
//! input phase of the next tick. Notifications are sent by the
//! simulation after the store has changed, for presentation to react to.

use bevy::prelude::*;

use crate::enemies::EnemyKind;
use crate::progression::SkillKind;

// === Intents ===

/// The pointer hit an enemy. Applies the configured click damage.
#[derive(Event, Debug, Clone)]
pub struct EnemyClicked {
    pub enemy_id: String,
}

/// A hotbar slot was triggered (keys 1-3 in the reference layout).
#[derive(Event, Debug, Clone, Copy)]
pub struct SkillIntent {
    /// Zero-based index into the skill list.
    pub slot: usize,
}

/// Promote a roster shadow to active.
#[derive(Event, Debug, Clone)]
pub struct SummonRequest {
    pub shadow_id: String,
}

/// Return an active shadow to the roster.
#[derive(Event, Debug, Clone)]
pub struct DismissRequest {
    pub shadow_id: String,
}

/// Equip an item from the inventory.
#[derive(Event, Debug, Clone)]
pub struct EquipRequest {
    pub item_id: String,
}

/// Panels the presentation layer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiPanel {
    Inventory,
    SkillTree,
    Quests,
}

/// Flip the visibility flag of one panel.
#[derive(Event, Debug, Clone, Copy)]
pub struct UiToggle(pub UiPanel);

/// Flip between `InGame` and `Paused`.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct TogglePause;

// === Notifications ===

/// Where a hit on an enemy came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DamageSource {
    Click,
    Skill(String),
    Shadow(String),
}

/// An enemy lost health.
#[derive(Event, Debug, Clone)]
pub struct EnemyDamaged {
    pub enemy_id: String,
    /// Health actually removed (after clamping).
    pub amount: f32,
    pub source: DamageSource,
}

/// The player was struck by an enemy.
#[derive(Event, Debug, Clone)]
pub struct PlayerDamaged {
    pub attacker: String,
    /// Health actually removed (after clamping).
    pub amount: f32,
}

/// An enemy was removed by the death sweep.
#[derive(Event, Debug, Clone)]
pub struct EnemyDefeated {
    pub enemy_id: String,
    pub kind: EnemyKind,
    /// Experience granted for this kill.
    pub exp: u32,
}

/// Sent once per level gained.
#[derive(Event, Debug, Clone, Copy)]
pub struct LevelUpEvent {
    pub new_level: u32,
}

/// A skill came off cooldown and was used.
#[derive(Event, Debug, Clone)]
pub struct SkillUsed {
    pub skill_id: String,
    pub kind: SkillKind,
}

/// A roster shadow became active.
#[derive(Event, Debug, Clone)]
pub struct ShadowSummoned {
    pub shadow_id: String,
}

/// A quest reached its maximum progress.
#[derive(Event, Debug, Clone)]
pub struct QuestCompleted {
    pub quest_id: String,
}

/// The player's health reached zero.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PlayerDied;
