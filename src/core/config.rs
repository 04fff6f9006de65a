//! Tuning and seed data loaded from RON files under `assets/data/`.
//!
//! Every data file has built-in defaults, so a missing or broken file
//! never stops a session from starting.

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::ConfigError;
use crate::combat::CombatConfig;
use crate::enemies::EnemyAiConfig;
use crate::player::PlayerConfig;
use crate::progression::LevelingConfig;
use crate::shadows::ShadowAiConfig;

/// A RON document with a fixed location and built-in defaults.
pub trait DataFile: DeserializeOwned + Default {
    /// Path relative to the working directory.
    const PATH: &'static str;

    /// Check value ranges after parsing.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Load from `PATH`, falling back to defaults on any failure.
    fn load() -> Self {
        Self::load_from(Self::PATH)
    }

    fn load_from(path: &str) -> Self {
        match read_ron::<Self>(path).and_then(|data| data.validate().map(|()| data)) {
            Ok(data) => {
                info!("Loaded {}", path);
                data
            }
            Err(ConfigError::FileNotFound(_)) => {
                warn!("Could not find {}. Using defaults.", path);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

/// Read and parse a RON file without validating it.
pub fn read_ron<T: DeserializeOwned>(path: &str) -> Result<T, ConfigError> {
    if !Path::new(path).exists() {
        return Err(ConfigError::FileNotFound(path.to_string()));
    }

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        details: e.to_string(),
    })?;

    ron::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_string(),
        details: e.to_string(),
    })
}

/// All gameplay constants, grouped by the component that reads them.
#[derive(Resource, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub leveling: LevelingConfig,
    pub enemy_ai: EnemyAiConfig,
    pub shadow_ai: ShadowAiConfig,
    pub combat: CombatConfig,
}

impl DataFile for GameConfig {
    const PATH: &'static str = "assets/data/config.ron";

    fn validate(&self) -> Result<(), ConfigError> {
        self.player.validate()?;
        self.leveling.validate()?;
        self.enemy_ai.validate()?;
        self.shadow_ai.validate()?;
        self.combat.validate()
    }
}

/// Fail unless `value` is finite and at least zero.
pub(crate) fn non_negative(field: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be >= 0, got {value}")))
    }
}

/// Fail unless `value` is finite and strictly positive.
pub(crate) fn positive(field: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be > 0, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config: GameConfig = ron::from_str("(combat: (click_damage: 40.0))").unwrap();
        assert_eq!(config.combat.click_damage, 40.0);
        assert_eq!(config.combat.max_active_shadows, 5);
        assert_eq!(config.enemy_ai.chase_speed, 2.0);
    }

    #[test]
    fn negative_speed_is_rejected() {
        let mut config = GameConfig::default();
        config.shadow_ai.chase_speed = -3.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { ref field, .. }) if field == "shadow_ai.chase_speed"
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = GameConfig::load_from("assets/data/does_not_exist.ron");
        assert_eq!(config.combat.click_damage, 25.0);
    }

    #[test]
    fn missing_file_reports_not_found() {
        let result = read_ron::<GameConfig>("assets/data/does_not_exist.ron");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
