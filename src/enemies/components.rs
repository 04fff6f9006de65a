//! Enemy-related data.

use bevy::prelude::*;
use serde::Deserialize;

use crate::combat::Health;
use crate::core::{non_negative, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum EnemyKind {
    Normal,
    Elite,
    Boss,
}

impl EnemyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Normal => "normal",
            EnemyKind::Elite => "elite",
            EnemyKind::Boss => "boss",
        }
    }

    /// Name shown for spawned enemies of this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            EnemyKind::Normal => "Dungeon Beast",
            EnemyKind::Elite => "Elite Beast",
            EnemyKind::Boss => "Statue of God",
        }
    }

    pub fn ai_pattern(&self) -> AiPattern {
        match self {
            EnemyKind::Boss => AiPattern::Aggressive,
            _ => AiPattern::Standard,
        }
    }
}

/// Behaviour tag carried by every enemy. Movement speed is keyed on
/// `EnemyKind`; the pattern is exposed for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum AiPattern {
    #[default]
    Standard,
    Aggressive,
}

/// AI state machine for enemy behavior.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub enum EnemyAiState {
    /// Moving toward the player.
    #[default]
    Chasing,
    /// In range, striking whenever the attack timer runs out.
    Attacking,
    /// Health reached zero. Removed by the next death sweep.
    Dead,
}

/// Everything needed to put an enemy into play. The caller picks the id.
#[derive(Debug, Clone)]
pub struct EnemySpec {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub health: f32,
    pub max_health: f32,
    pub attack: f32,
    pub position: Vec3,
    pub kind: EnemyKind,
    pub ai_pattern: AiPattern,
}

/// An active enemy.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub health: Health,
    pub attack: f32,
    pub position: Vec3,
    pub kind: EnemyKind,
    pub ai_pattern: AiPattern,
    /// Yaw in radians, `atan2(dx, dz)` toward the player.
    pub facing: f32,
    pub state: EnemyAiState,
    /// Counts down while attacking. Starts at zero, so the first strike
    /// lands on the first tick in range.
    pub attack_timer: f32,
}

impl Enemy {
    pub fn from_spec(spec: EnemySpec) -> Self {
        Self {
            id: spec.id,
            name: spec.name,
            level: spec.level,
            health: Health::with_current(spec.health, spec.max_health),
            attack: spec.attack.max(0.0),
            position: spec.position,
            kind: spec.kind,
            ai_pattern: spec.ai_pattern,
            facing: 0.0,
            state: EnemyAiState::Chasing,
            attack_timer: 0.0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.state == EnemyAiState::Dead
    }
}

/// Enemy AI tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnemyAiConfig {
    /// Speed toward the player, units per second
    pub chase_speed: f32,
    /// Speed for bosses
    pub boss_chase_speed: f32,
    /// Planar distance at which an enemy stops and attacks
    pub attack_range: f32,
    /// Seconds between strikes
    pub attack_cooldown: f32,
    /// Kill experience per enemy level
    pub exp_per_level: u32,
    /// Bosses bob when the player is closer than this
    pub boss_bob_range: f32,
}

impl Default for EnemyAiConfig {
    fn default() -> Self {
        Self {
            chase_speed: 2.0,
            boss_chase_speed: 1.5,
            attack_range: 1.0,
            attack_cooldown: 1.5,
            exp_per_level: 20,
            boss_bob_range: 5.0,
        }
    }
}

impl EnemyAiConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("enemy_ai.chase_speed", self.chase_speed)?;
        non_negative("enemy_ai.boss_chase_speed", self.boss_chase_speed)?;
        non_negative("enemy_ai.attack_range", self.attack_range)?;
        non_negative("enemy_ai.attack_cooldown", self.attack_cooldown)?;
        non_negative("enemy_ai.boss_bob_range", self.boss_bob_range)
    }

    pub fn speed_for(&self, kind: EnemyKind) -> f32 {
        match kind {
            EnemyKind::Boss => self.boss_chase_speed,
            _ => self.chase_speed,
        }
    }
}
