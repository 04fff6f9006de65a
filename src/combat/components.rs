//! Combat-related data and tuning.

use serde::Deserialize;

use crate::core::{non_negative, ConfigError};

/// Health pool shared by the player and enemies.
///
/// `0 <= current <= maximum` holds after every method call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f32,
    pub maximum: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Start below full, clamped into `[0, max]`. NaN starts full.
    pub fn with_current(current: f32, max: f32) -> Self {
        let maximum = max.max(0.0);
        let current = if current.is_nan() {
            maximum
        } else {
            current.clamp(0.0, maximum)
        };
        Self { current, maximum }
    }

    /// Remove up to `amount` health, returning how much was removed.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.current);
        self.current -= actual;
        actual
    }

    pub fn refill(&mut self) {
        self.current = self.maximum;
    }

    /// Change the maximum, pulling `current` down if it no longer fits.
    pub fn set_maximum(&mut self, maximum: f32) {
        self.maximum = maximum.max(0.0);
        self.current = self.current.min(self.maximum);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percentage(&self) -> f32 {
        if self.maximum > 0.0 {
            self.current / self.maximum
        } else {
            0.0
        }
    }
}

/// How the target's defense enters the damage formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum DefensePolicy {
    /// Defense is tracked but never reduces damage.
    #[default]
    Ignore,
    /// Defense is subtracted from the raw damage, floored at zero.
    Subtract,
}

/// Combat tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Damage of a pointer click on an enemy.
    pub click_damage: f32,
    /// Cap on concurrently active shadows.
    pub max_active_shadows: usize,
    pub defense_policy: DefensePolicy,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            click_damage: 25.0,
            max_active_shadows: 5,
            defense_policy: DefensePolicy::Ignore,
        }
    }
}

impl CombatConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("combat.click_damage", self.click_damage)
    }
}
