//! Quests and their rewards.

use serde::Deserialize;

use crate::core::ConfigError;
use crate::enemies::EnemyKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum QuestKind {
    Main,
    Side,
    Event,
}

/// What moves a quest forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum QuestObjective {
    /// One step per enemy removed by the death sweep. `None` matches any kind.
    Defeat { kind: Option<EnemyKind> },
    /// Only `advance_quest` calls.
    #[default]
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct QuestRewards {
    pub exp: u32,
    pub gold: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub kind: QuestKind,
    #[serde(default)]
    pub progress: u32,
    pub max_progress: u32,
    #[serde(default)]
    pub rewards: QuestRewards,
    #[serde(default)]
    pub objective: QuestObjective,
    #[serde(default)]
    pub completed: bool,
}

impl Quest {
    /// Move progress forward, capped at `max_progress`.
    ///
    /// Returns `true` only on the call that completes the quest.
    pub fn advance(&mut self, amount: u32) -> bool {
        if self.completed {
            return false;
        }
        self.progress = self.progress.saturating_add(amount).min(self.max_progress);
        if self.progress == self.max_progress {
            self.completed = true;
            return true;
        }
        false
    }

    pub fn counts_kill(&self, kind: EnemyKind) -> bool {
        match self.objective {
            QuestObjective::Defeat { kind: None } => true,
            QuestObjective::Defeat { kind: Some(wanted) } => wanted == kind,
            QuestObjective::Manual => false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_progress == 0 {
            return Err(ConfigError::invalid(
                format!("quests.{}.max_progress", self.id),
                "must be > 0",
            ));
        }
        if self.progress > self.max_progress {
            return Err(ConfigError::invalid(
                format!("quests.{}.progress", self.id),
                format!("must be <= {}", self.max_progress),
            ));
        }
        Ok(())
    }
}
