//! HUD snapshot - everything presentation needs, rebuilt once per tick.

use bevy::prelude::*;

use crate::core::{GameConfig, SimSet};
use crate::enemies::{boss_bob_height, planar_distance, EnemyAiConfig};
use crate::shadows::shadow_bob_height;
use crate::store::{GameStore, PanelFlags};

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.init_resource::<HudSnapshot>()
        .add_systems(Update, update_hud.in_set(SimSet::Publish));
}

/// An enemy as drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyMarker {
    pub id: String,
    pub name: String,
    pub position: Vec3,
    pub facing: f32,
    pub health: f32,
    /// Render height. `None` means the enemy stays at `position.y`.
    pub bob: Option<f32>,
}

/// A shadow as drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowMarker {
    pub id: String,
    pub name: String,
    pub position: Vec3,
    pub facing: f32,
    pub bob: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillSlot {
    pub name: String,
    /// 0 when ready, 1 right after use.
    pub cooldown: f32,
}

/// Read-only view of the store for the presentation layer.
///
/// Bars are fractions in `[0, 1]`.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct HudSnapshot {
    pub health: f32,
    pub mana: f32,
    pub exp: f32,
    pub level: u32,
    pub gold: u32,
    pub skills: Vec<SkillSlot>,
    pub enemies: Vec<EnemyMarker>,
    pub shadows: Vec<ShadowMarker>,
    pub active_shadows: usize,
    pub max_shadows: usize,
    pub panels: PanelFlags,
    pub in_combat: bool,
}

impl HudSnapshot {
    pub fn from_store(store: &GameStore, elapsed: f32, enemy_ai: &EnemyAiConfig) -> Self {
        let player = store.player();

        Self {
            health: player.health.percentage(),
            mana: player.mana.percentage(),
            exp: player.exp_fraction(),
            level: player.level,
            gold: player.gold,
            skills: store
                .skills()
                .iter()
                .map(|s| SkillSlot {
                    name: s.name.clone(),
                    cooldown: s.cooldown_fraction(),
                })
                .collect(),
            enemies: store
                .enemies()
                .iter()
                .map(|e| EnemyMarker {
                    id: e.id.clone(),
                    name: e.name.clone(),
                    position: e.position,
                    facing: e.facing,
                    health: e.health.percentage(),
                    bob: boss_bob_height(
                        e.kind,
                        planar_distance(e.position, player.position),
                        elapsed,
                        enemy_ai,
                    ),
                })
                .collect(),
            shadows: store
                .active_shadows()
                .iter()
                .map(|s| ShadowMarker {
                    id: s.id().to_string(),
                    name: s.shadow.name.clone(),
                    position: s.position,
                    facing: s.facing,
                    bob: shadow_bob_height(elapsed, s.shadow.level),
                })
                .collect(),
            active_shadows: store.active_shadows().len(),
            max_shadows: store.max_active_shadows(),
            panels: store.panels(),
            in_combat: store.in_combat(),
        }
    }
}

fn update_hud(
    time: Res<Time>,
    config: Res<GameConfig>,
    store: Res<GameStore>,
    mut hud: ResMut<HudSnapshot>,
) {
    *hud = HudSnapshot::from_store(&store, time.elapsed_secs(), &config.enemy_ai);
}
