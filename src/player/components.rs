//! Player-related data.

use bevy::prelude::*;
use serde::Deserialize;

use crate::combat::Health;
use crate::core::{non_negative, positive, ConfigError};
use crate::inventory::{Equipment, InventoryItem};

/// The player character. Created once per session, never destroyed.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub position: Vec3,
    /// Yaw in radians, `atan2(dx, dz)` of the last movement.
    pub facing: f32,
    /// `maximum` already includes equipment bonuses.
    pub health: Health,
    pub mana: Mana,
    /// Stats before equipment.
    pub base: BaseStats,
    pub level: u32,
    pub exp: u32,
    pub max_exp: u32,
    pub gold: u32,
    pub equipment: Equipment,
    pub inventory: Vec<InventoryItem>,
}

/// Stats that grow with level and that equipment adds to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseStats {
    pub max_health: f32,
    pub attack: f32,
    pub defense: f32,
}

impl Player {
    pub fn new(config: &PlayerConfig) -> Self {
        let (x, y, z) = config.start_position;
        Self {
            name: config.name.clone(),
            position: Vec3::new(x, y, z),
            facing: 0.0,
            health: Health::new(config.max_health),
            mana: Mana::new(config.max_mana),
            base: BaseStats {
                max_health: config.max_health,
                attack: config.attack,
                defense: config.defense,
            },
            level: 1,
            exp: 0,
            max_exp: config.max_exp,
            gold: config.gold,
            equipment: Equipment::default(),
            inventory: Vec::new(),
        }
    }

    /// Attack including equipment.
    pub fn attack(&self) -> f32 {
        self.base.attack + self.equipment.bonus().attack
    }

    /// Defense including equipment.
    pub fn defense(&self) -> f32 {
        self.base.defense + self.equipment.bonus().defense
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }

    pub fn exp_fraction(&self) -> f32 {
        if self.max_exp == 0 {
            0.0
        } else {
            self.exp as f32 / self.max_exp as f32
        }
    }

    /// Recompute the health maximum from base stats and equipment.
    pub(crate) fn refresh_max_health(&mut self) {
        let maximum = self.base.max_health + self.equipment.bonus().health;
        self.health.set_maximum(maximum);
    }
}

/// Mana pool. `0 <= current <= maximum`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mana {
    pub current: f32,
    pub maximum: f32,
}

impl Mana {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    pub fn refill(&mut self) {
        self.current = self.maximum;
    }

    pub fn set_maximum(&mut self, maximum: f32) {
        self.maximum = maximum.max(0.0);
        self.current = self.current.min(self.maximum);
    }

    pub fn percentage(&self) -> f32 {
        if self.maximum > 0.0 {
            self.current / self.maximum
        } else {
            0.0
        }
    }
}

/// Resolved movement input for the current frame, on the ground plane.
///
/// `x` maps to world X and `y` to world Z. Written by the input layer,
/// read once per tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent(pub Vec2);

/// Player tuning and starting stats.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub start_position: (f32, f32, f32),
    pub max_health: f32,
    pub max_mana: f32,
    pub attack: f32,
    pub defense: f32,
    pub max_exp: u32,
    pub gold: u32,
    /// Movement speed in units per second
    pub move_speed: f32,
    /// The arena is the square `[-extent, extent]` on X and Z
    pub arena_half_extent: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: "Sung Jinwoo".to_string(),
            start_position: (0.0, 0.5, 0.0),
            max_health: 100.0,
            max_mana: 50.0,
            attack: 10.0,
            defense: 5.0,
            max_exp: 100,
            gold: 0,
            move_speed: 5.0,
            arena_half_extent: 10.0,
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player.max_health", self.max_health)?;
        non_negative("player.max_mana", self.max_mana)?;
        non_negative("player.attack", self.attack)?;
        non_negative("player.defense", self.defense)?;
        non_negative("player.move_speed", self.move_speed)?;
        positive("player.arena_half_extent", self.arena_half_extent)?;
        if self.max_exp == 0 {
            return Err(ConfigError::invalid("player.max_exp", "must be > 0"));
        }
        Ok(())
    }
}
