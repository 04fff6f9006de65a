//! Enemies module - enemy records, AI, and wave spawning.

mod ai;
mod components;
mod data;
mod plugin;
mod spawning;

pub use ai::{boss_bob_height, enemy_ai, evaluate as evaluate_enemy, planar_distance, EnemyStep};
pub use components::*;
pub use data::{SpawnGroup, WaveDefinition, WaveTable};
pub use plugin::EnemyPlugin;
pub use spawning::{check_dungeon_cleared, spawn_waves, wave_specs, SpawnRng, WaveSchedule};
