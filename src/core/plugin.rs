//! Core plugin that sets up game states, tick ordering and global events.

use bevy::prelude::*;

use super::config::{DataFile, GameConfig};
use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, Paused, ...)
/// - The `SimSet` chain that orders one tick
/// - Global events (intents and notifications)
/// - The `GameConfig` resource, unless one was inserted already
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            app.insert_resource(GameConfig::load());
        }

        app
            // Initialize game states
            .init_state::<GameState>()

            // Intents
            .add_event::<EnemyClicked>()
            .add_event::<SkillIntent>()
            .add_event::<SummonRequest>()
            .add_event::<DismissRequest>()
            .add_event::<EquipRequest>()
            .add_event::<UiToggle>()
            .add_event::<TogglePause>()

            // Notifications
            .add_event::<EnemyDamaged>()
            .add_event::<PlayerDamaged>()
            .add_event::<EnemyDefeated>()
            .add_event::<LevelUpEvent>()
            .add_event::<SkillUsed>()
            .add_event::<ShadowSummoned>()
            .add_event::<QuestCompleted>()
            .add_event::<PlayerDied>()

            // One tick: input, enemies, shadows, resolve, publish
            .configure_sets(
                Update,
                (
                    SimSet::Input,
                    SimSet::Enemies,
                    SimSet::Shadows,
                    SimSet::Resolve,
                    SimSet::Publish,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )

            // Nothing to wait for once the resources exist
            .add_systems(OnEnter(GameState::Loading), finish_loading)

            // Pause/unpause on request
            .add_systems(
                Update,
                handle_pause_toggle
                    .run_if(in_state(GameState::InGame).or(in_state(GameState::Paused))),
            );
    }
}

/// Transition from Loading to InGame.
fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Flip between InGame and Paused.
fn handle_pause_toggle(
    mut requests: EventReader<TogglePause>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    // Several toggles in one frame cancel out pairwise
    if requests.read().count() % 2 == 0 {
        return;
    }

    match current_state.get() {
        GameState::InGame => next_state.set(GameState::Paused),
        GameState::Paused => next_state.set(GameState::InGame),
        _ => {}
    }
}
