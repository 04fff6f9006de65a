//! Cooldown-gated skills.

use serde::Deserialize;

use crate::core::{non_negative, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SkillKind {
    /// Damages every active enemy.
    Attack,
    /// Brings a roster shadow into the fight.
    Summon,
    /// No effect in the simulation; presentation reacts to `SkillUsed`.
    Buff,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub kind: SkillKind,
    #[serde(default)]
    pub damage: f32,
    /// Seconds between uses.
    pub cooldown: f32,
    /// Seconds left. Usable only at zero.
    #[serde(default)]
    pub current_cooldown: f32,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default = "default_level")]
    pub max_level: u32,
    #[serde(default)]
    pub description: String,
}

fn default_level() -> u32 {
    1
}

impl Skill {
    pub fn is_ready(&self) -> bool {
        self.current_cooldown <= 0.0
    }

    /// Start the cooldown if the skill is ready.
    pub fn trigger(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.current_cooldown = self.cooldown;
        true
    }

    /// Count the cooldown down, never below zero.
    pub fn tick(&mut self, delta: f32) {
        self.current_cooldown = (self.current_cooldown - delta.max(0.0)).max(0.0);
    }

    /// 1.0 right after use, 0.0 when ready.
    pub fn cooldown_fraction(&self) -> f32 {
        if self.cooldown > 0.0 {
            self.current_cooldown / self.cooldown
        } else {
            0.0
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let field = |name: &str| format!("skills.{}.{}", self.id, name);
        non_negative(&field("damage"), self.damage)?;
        non_negative(&field("cooldown"), self.cooldown)?;
        if !(0.0..=self.cooldown).contains(&self.current_cooldown) {
            return Err(ConfigError::invalid(
                field("current_cooldown"),
                format!("must be within [0, {}]", self.cooldown),
            ));
        }
        if self.level == 0 || self.level > self.max_level {
            return Err(ConfigError::invalid(
                field("level"),
                format!("must be within [1, {}]", self.max_level),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(cooldown: f32) -> Skill {
        Skill {
            id: "rush".to_string(),
            name: "Dagger Rush".to_string(),
            kind: SkillKind::Attack,
            damage: 50.0,
            cooldown,
            current_cooldown: 0.0,
            level: 1,
            max_level: 10,
            description: String::new(),
        }
    }

    #[test]
    fn trigger_resets_to_full_cooldown() {
        let mut skill = skill(5.0);
        assert!(skill.trigger());
        assert_eq!(skill.current_cooldown, 5.0);
        assert!(!skill.trigger());
        assert_eq!(skill.current_cooldown, 5.0);
    }

    #[test]
    fn tick_floors_at_zero() {
        let mut skill = skill(5.0);
        skill.trigger();
        skill.tick(7.0);
        assert_eq!(skill.current_cooldown, 0.0);
        assert!(skill.is_ready());
    }

    #[test]
    fn level_above_max_is_invalid() {
        let mut skill = skill(5.0);
        skill.level = 11;
        assert!(skill.validate().is_err());
    }
}
