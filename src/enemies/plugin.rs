//! Enemy plugin - registers enemy AI and wave spawning.

use bevy::prelude::*;

use super::ai;
use super::data::WaveTable;
use super::spawning::{self, SpawnRng, WaveSchedule};
use crate::combat::sweep_dead_enemies;
use crate::core::{DataFile, SimSet};
use crate::player::player_movement;

/// Enemy plugin - handles wave spawning, enemy AI and the cleared check.
///
/// A `WaveTable` or `SpawnRng` inserted before this plugin is kept.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<WaveTable>() {
            app.insert_resource(WaveTable::load());
        }
        if !app.world().contains_resource::<SpawnRng>() {
            app.insert_resource(SpawnRng::default());
        }

        app.init_resource::<WaveSchedule>()
            // New waves join after movement and before intents, so they
            // can be hit and act this same tick
            .add_systems(
                Update,
                spawning::spawn_waves
                    .in_set(SimSet::Input)
                    .after(player_movement),
            )
            .add_systems(Update, ai::enemy_ai.in_set(SimSet::Enemies))
            .add_systems(
                Update,
                spawning::check_dungeon_cleared
                    .in_set(SimSet::Resolve)
                    .after(sweep_dead_enemies),
            );
    }
}
