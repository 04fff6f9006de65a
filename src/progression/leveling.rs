//! Experience and level-up policy.

use serde::Deserialize;

use crate::core::{non_negative, ConfigError};
use crate::player::Player;

/// Stat growth applied on every level gained.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelingConfig {
    /// `max_exp` is multiplied by this (rounded to nearest) per level.
    pub exp_growth: f32,
    pub health_per_level: f32,
    pub mana_per_level: f32,
    pub attack_per_level: f32,
    pub defense_per_level: f32,
}

impl Default for LevelingConfig {
    fn default() -> Self {
        Self {
            exp_growth: 1.2,
            health_per_level: 20.0,
            mana_per_level: 10.0,
            attack_per_level: 5.0,
            defense_per_level: 2.0,
        }
    }
}

impl LevelingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.exp_growth.is_finite() && self.exp_growth >= 1.0) {
            return Err(ConfigError::invalid(
                "leveling.exp_growth",
                format!("must be >= 1, got {}", self.exp_growth),
            ));
        }
        non_negative("leveling.health_per_level", self.health_per_level)?;
        non_negative("leveling.mana_per_level", self.mana_per_level)?;
        non_negative("leveling.attack_per_level", self.attack_per_level)?;
        non_negative("leveling.defense_per_level", self.defense_per_level)
    }
}

/// Add experience, levelling up as many times as it pays for.
///
/// Each level consumes the current `max_exp`; the remainder carries over.
/// Returns the levels gained.
pub fn grant_experience(player: &mut Player, amount: u32, config: &LevelingConfig) -> u32 {
    player.exp = player.exp.saturating_add(amount);

    let mut gained = 0;
    while player.max_exp > 0 && player.exp >= player.max_exp {
        player.exp -= player.max_exp;
        player.level += 1;
        gained += 1;

        player.max_exp = (player.max_exp as f64 * config.exp_growth as f64).round() as u32;
        player.base.max_health += config.health_per_level;
        player.base.attack += config.attack_per_level;
        player.base.defense += config.defense_per_level;
        player.mana.set_maximum(player.mana.maximum + config.mana_per_level);
    }

    if gained > 0 {
        player.refresh_max_health();
        player.health.refill();
        player.mana.refill();
    }

    gained
}
