//! Wave spawning and the end-of-dungeon check.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use super::components::EnemySpec;
use super::data::{WaveDefinition, WaveTable};
use crate::core::GameState;
use crate::store::GameStore;

/// Random source for spawn placement. Seed it for reproducible runs.
#[derive(Resource)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Progress through the [`WaveTable`].
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct WaveSchedule {
    /// Index of the next wave to spawn.
    pub next_wave: usize,
    /// Seconds since the previous wave (or session start).
    pub elapsed: f32,
    /// Enemies put into play so far.
    pub spawned: u32,
}

impl WaveSchedule {
    pub fn is_finished(&self, table: &WaveTable) -> bool {
        self.next_wave >= table.waves.len()
    }

    /// Advance by `delta` seconds, returning the index of a wave that is due.
    pub fn tick(&mut self, delta: f32, table: &WaveTable) -> Option<usize> {
        let wave = table.waves.get(self.next_wave)?;
        self.elapsed += delta;
        if self.elapsed < wave.delay {
            return None;
        }

        self.elapsed = 0.0;
        self.next_wave += 1;
        Some(self.next_wave - 1)
    }
}

/// Build the specs for one wave. Ids are `"{kind}-{wave}-{n}"`, unique per session.
pub fn wave_specs(
    wave_index: usize,
    wave: &WaveDefinition,
    spawn_radius: (f32, f32),
    rng: &mut impl Rng,
) -> Vec<EnemySpec> {
    wave.groups
        .iter()
        .flat_map(|group| (0..group.count).map(move |_| group))
        .enumerate()
        .map(|(n, group)| EnemySpec {
            id: format!("{}-{}-{}", group.kind.as_str(), wave_index + 1, n + 1),
            name: group.kind.display_name().to_string(),
            level: group.level,
            health: group.health,
            max_health: group.health,
            attack: group.attack,
            position: spawn_position(spawn_radius, rng),
            kind: group.kind,
            ai_pattern: group.kind.ai_pattern(),
        })
        .collect()
}

fn spawn_position((min, max): (f32, f32), rng: &mut impl Rng) -> Vec3 {
    let angle = rng.gen_range(0.0..TAU);
    let radius = rng.gen_range(min..=max);
    Vec3::new(angle.cos() * radius, 0.5, angle.sin() * radius)
}

/// Put every wave that is due into play and flag combat.
pub fn spawn_waves(
    time: Res<Time>,
    table: Res<WaveTable>,
    mut schedule: ResMut<WaveSchedule>,
    mut rng: ResMut<SpawnRng>,
    mut store: ResMut<GameStore>,
) {
    let Some(index) = schedule.tick(time.delta_secs(), &table) else {
        return;
    };
    let wave = &table.waves[index];

    let mut added = 0;
    for spec in wave_specs(index, wave, table.spawn_radius, &mut rng.0) {
        if store.add_enemy(spec) {
            added += 1;
        }
    }
    schedule.spawned += added;

    info!("Wave {} spawned {} enemies", index + 1, added);
    if added > 0 {
        store.start_combat();
    }
}

/// Cleared once every wave is out and the last enemy is gone.
pub fn check_dungeon_cleared(
    table: Res<WaveTable>,
    schedule: Res<WaveSchedule>,
    store: Res<GameStore>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if store.player().is_dead() || schedule.spawned == 0 {
        return;
    }
    if schedule.is_finished(&table) && store.enemies().is_empty() {
        info!("Dungeon cleared");
        next_state.set(GameState::Cleared);
    }
}
