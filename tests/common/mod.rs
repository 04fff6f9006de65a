//! Shared harness: a headless app on a fixed 100 ms clock.

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use shadow_monarch::core::{GameConfig, GameState};
use shadow_monarch::enemies::{AiPattern, EnemyKind, EnemySpec, SpawnRng, WaveTable};
use shadow_monarch::progression::SessionSeed;
use shadow_monarch::store::GameStore;
use shadow_monarch::ShadowMonarchPlugin;

pub const TICK: Duration = Duration::from_millis(100);

/// App with default tuning and the given waves, already in `InGame`.
///
/// Every later `app.update()` is one 100 ms tick.
pub fn session_with_waves(waves: WaveTable) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(StatesPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(TICK))
        .insert_resource(GameConfig::default())
        .insert_resource(SessionSeed::default())
        .insert_resource(waves)
        .insert_resource(SpawnRng::seeded(42))
        .add_plugins(ShadowMonarchPlugin);

    // Loading runs on the first update; the switch to InGame lands on the next
    app.update();
    app
}

/// Session without scheduled waves. Tests add enemies by hand.
pub fn session() -> App {
    session_with_waves(WaveTable {
        waves: vec![],
        ..Default::default()
    })
}

pub fn store(app: &App) -> &GameStore {
    app.world().resource::<GameStore>()
}

pub fn store_mut(app: &mut App) -> Mut<'_, GameStore> {
    app.world_mut().resource_mut::<GameStore>()
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

/// Events of type `E` still buffered after the last update.
pub fn events<E: Event + Clone>(app: &App) -> Vec<E> {
    let events = app.world().resource::<Events<E>>();
    events.get_cursor().read(events).cloned().collect()
}

pub fn beast(id: &str, position: Vec3) -> EnemySpec {
    EnemySpec {
        id: id.to_string(),
        name: "Dungeon Beast".to_string(),
        level: 2,
        health: 50.0,
        max_health: 50.0,
        attack: 8.0,
        position,
        kind: EnemyKind::Normal,
        ai_pattern: AiPattern::Standard,
    }
}
