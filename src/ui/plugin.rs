//! UI plugin - HUD snapshot, panel toggles, and run-state notices.

use bevy::prelude::*;

use super::hud;
use crate::core::{GameState, SimSet, UiToggle};
use crate::player::player_movement;
use crate::store::GameStore;

/// UI plugin - handles everything the presentation layer reads.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app
            // Panels
            .add_systems(
                Update,
                handle_panel_toggles
                    .in_set(SimSet::Input)
                    .before(player_movement),
            )

            // Pause
            .add_systems(OnEnter(GameState::Paused), announce_pause)
            .add_systems(OnExit(GameState::Paused), announce_resume)

            // End of run
            .add_systems(OnEnter(GameState::GameOver), announce_game_over)
            .add_systems(OnEnter(GameState::Cleared), announce_cleared);
    }
}

fn handle_panel_toggles(mut toggles: EventReader<UiToggle>, mut store: ResMut<GameStore>) {
    for UiToggle(panel) in toggles.read() {
        store.toggle_panel(*panel);
    }
}

fn announce_pause() {
    info!("Paused");
}

fn announce_resume() {
    info!("Resumed");
}

fn announce_game_over(store: Res<GameStore>) {
    let player = store.player();
    info!(
        "GAME OVER - {} fell at level {} with {} gold",
        player.name, player.level, player.gold
    );
}

fn announce_cleared(store: Res<GameStore>) {
    let player = store.player();
    info!(
        "DUNGEON CLEARED - level {}, {} gold, {} shadows in play",
        player.level,
        player.gold,
        store.active_shadows().len()
    );
}
