//! Wave definitions loaded from `assets/data/waves.ron`.

use bevy::prelude::*;
use serde::Deserialize;

use super::components::EnemyKind;
use crate::core::{non_negative, positive, ConfigError, DataFile};

/// A batch of identical enemies within a wave.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SpawnGroup {
    pub kind: EnemyKind,
    pub count: u32,
    pub level: u32,
    pub health: f32,
    pub attack: f32,
}

/// One wave: spawned `delay` seconds after the previous one.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WaveDefinition {
    pub delay: f32,
    pub groups: Vec<SpawnGroup>,
}

/// Every wave of a session, in order.
#[derive(Resource, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WaveTable {
    /// Enemies spawn on a ring around the origin, `(min, max)` radius.
    pub spawn_radius: (f32, f32),
    pub waves: Vec<WaveDefinition>,
}

impl Default for WaveTable {
    fn default() -> Self {
        Self {
            spawn_radius: (5.0, 10.0),
            waves: vec![WaveDefinition {
                delay: 2.0,
                groups: vec![
                    SpawnGroup {
                        kind: EnemyKind::Normal,
                        count: 3,
                        level: 2,
                        health: 50.0,
                        attack: 8.0,
                    },
                    SpawnGroup {
                        kind: EnemyKind::Elite,
                        count: 1,
                        level: 5,
                        health: 150.0,
                        attack: 15.0,
                    },
                    SpawnGroup {
                        kind: EnemyKind::Boss,
                        count: 0,
                        level: 10,
                        health: 500.0,
                        attack: 30.0,
                    },
                ],
            }],
        }
    }
}

impl DataFile for WaveTable {
    const PATH: &'static str = "assets/data/waves.ron";

    fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = self.spawn_radius;
        non_negative("waves.spawn_radius.min", min)?;
        non_negative("waves.spawn_radius.max", max)?;
        if min > max {
            return Err(ConfigError::invalid(
                "waves.spawn_radius",
                format!("min {min} exceeds max {max}"),
            ));
        }

        for (i, wave) in self.waves.iter().enumerate() {
            non_negative(&format!("waves[{i}].delay"), wave.delay)?;
            for group in &wave.groups {
                positive(&format!("waves[{i}].{}.health", group.kind.as_str()), group.health)?;
                non_negative(&format!("waves[{i}].{}.attack", group.kind.as_str()), group.attack)?;
            }
        }
        Ok(())
    }
}
