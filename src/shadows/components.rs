//! Shadow (ally) data.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::{non_negative, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum ShadowKind {
    Warrior,
    Mage,
    Tank,
    #[default]
    Assassin,
}

/// A shadow in the player's roster. Inert until summoned.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shadow {
    pub id: String,
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub kind: ShadowKind,
    pub attack: f32,
}

fn default_level() -> u32 {
    1
}

/// A deployed shadow taking part in combat.
#[derive(Debug, Clone)]
pub struct ActiveShadow {
    pub shadow: Shadow,
    pub position: Vec3,
    /// Yaw in radians.
    pub facing: f32,
    /// Seconds until the next strike is allowed.
    pub attack_cooldown: f32,
    /// Enemy chosen on the last evaluation.
    pub target: Option<String>,
}

impl ActiveShadow {
    pub fn deploy(shadow: Shadow, position: Vec3) -> Self {
        Self {
            shadow,
            position,
            facing: 0.0,
            attack_cooldown: 0.0,
            target: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.shadow.id
    }
}

/// Shadow AI tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShadowAiConfig {
    /// Speed toward the targeted enemy, units per second
    pub chase_speed: f32,
    /// Planar distance at which a shadow strikes
    pub attack_range: f32,
    /// Seconds between strikes
    pub attack_cooldown: f32,
    /// Speed toward the player when no enemy exists
    pub follow_speed: f32,
    /// Shadows idle once this close to the player
    pub follow_distance: f32,
}

impl Default for ShadowAiConfig {
    fn default() -> Self {
        Self {
            chase_speed: 3.0,
            attack_range: 1.5,
            attack_cooldown: 1.0,
            follow_speed: 4.0,
            follow_distance: 2.0,
        }
    }
}

impl ShadowAiConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("shadow_ai.chase_speed", self.chase_speed)?;
        non_negative("shadow_ai.attack_range", self.attack_range)?;
        non_negative("shadow_ai.attack_cooldown", self.attack_cooldown)?;
        non_negative("shadow_ai.follow_speed", self.follow_speed)?;
        non_negative("shadow_ai.follow_distance", self.follow_distance)
    }
}
