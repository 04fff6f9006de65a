//! Shadow Monarch - Entry Point
//!
//! Runs a session headless at 60 Hz with an automatic player: every
//! shadow in the roster is raised at the start, and the first attack
//! skill fires whenever it is ready, checked once per second. The process
//! exits when the dungeon is cleared or the player falls.
//!
//! Set `RUST_LOG=shadow_monarch=debug` for per-enemy detail.

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use std::time::Duration;

use shadow_monarch::core::{GameState, SimSet, SkillIntent, SummonRequest};
use shadow_monarch::progression::SkillKind;
use shadow_monarch::store::GameStore;
use shadow_monarch::ShadowMonarchPlugin;

fn main() {
    App::new()
        // Bevy headless plugins
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / 60.0),
        )))
        .add_plugins(LogPlugin::default())
        .add_plugins(StatesPlugin)

        // Our game plugin
        .add_plugins(ShadowMonarchPlugin)

        // Automatic player
        .insert_resource(SkillTimer(Timer::from_seconds(1.0, TimerMode::Repeating)))
        .add_systems(OnEnter(GameState::InGame), raise_army)
        .add_systems(Update, cast_attack_skill.in_set(SimSet::Input))
        .add_systems(Update, exit_when_over)

        .run();
}

#[derive(Resource)]
struct SkillTimer(Timer);

/// Ask for every roster shadow. The store enforces the cap.
fn raise_army(store: Res<GameStore>, mut requests: EventWriter<SummonRequest>) {
    for shadow in store.roster() {
        requests.send(SummonRequest {
            shadow_id: shadow.id.clone(),
        });
    }
}

fn cast_attack_skill(
    time: Res<Time>,
    mut timer: ResMut<SkillTimer>,
    store: Res<GameStore>,
    mut intents: EventWriter<SkillIntent>,
) {
    if !timer.0.tick(time.delta()).just_finished() || store.enemies().is_empty() {
        return;
    }

    let ready = store
        .skills()
        .iter()
        .position(|s| s.kind == SkillKind::Attack && s.is_ready());
    if let Some(slot) = ready {
        intents.send(SkillIntent { slot });
    }
}

fn exit_when_over(state: Res<State<GameState>>, mut app_exit: EventWriter<AppExit>) {
    if state.get().is_terminal() {
        app_exit.send(AppExit::Success);
    }
}
