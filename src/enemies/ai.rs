//! Enemy AI: chase the player, strike when in range.

use bevy::prelude::*;

use super::components::{Enemy, EnemyAiConfig, EnemyKind};
use crate::combat::resolve_damage;
use crate::core::{GameConfig, PlayerDamaged};
use crate::store::GameStore;

/// What one enemy does this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyStep {
    /// Out of range: move toward the player.
    Chase { position: Vec3, facing: f32 },
    /// In range: hold position. `strike` carries raw attack when the timer ran out.
    Attack { timer: f32, strike: Option<f32> },
    /// Health is gone.
    Dead,
}

/// Horizontal distance, ignoring height.
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(b.x - a.x, b.z - a.z).length()
}

/// Decide one enemy's step. Pure: reads a snapshot, changes nothing.
pub fn evaluate(enemy: &Enemy, player_position: Vec3, delta: f32, config: &EnemyAiConfig) -> EnemyStep {
    if enemy.health.current <= 0.0 {
        return EnemyStep::Dead;
    }

    let dx = player_position.x - enemy.position.x;
    let dz = player_position.z - enemy.position.z;
    let distance = Vec2::new(dx, dz).length();

    if distance > config.attack_range {
        let speed = config.speed_for(enemy.kind);
        let step = Vec3::new(dx / distance, 0.0, dz / distance) * speed * delta;
        return EnemyStep::Chase {
            position: enemy.position + step,
            facing: dx.atan2(dz),
        };
    }

    let timer = enemy.attack_timer - delta;
    if timer <= 0.0 {
        EnemyStep::Attack {
            timer: config.attack_cooldown,
            strike: Some(enemy.attack),
        }
    } else {
        EnemyStep::Attack { timer, strike: None }
    }
}

/// Vertical offset for rendering. Bosses bob when the player is close.
pub fn boss_bob_height(kind: EnemyKind, distance: f32, elapsed: f32, config: &EnemyAiConfig) -> Option<f32> {
    (kind == EnemyKind::Boss && distance < config.boss_bob_range)
        .then(|| 0.5 + (elapsed * 2.0).sin() * 0.2)
}

/// Run every enemy's step against the store.
///
/// A dead player makes enemies idle.
pub fn enemy_ai(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut store: ResMut<GameStore>,
    mut damaged: EventWriter<PlayerDamaged>,
) {
    if store.player().is_dead() {
        return;
    }

    let delta = time.delta_secs();
    let player_position = store.player().position;

    let steps: Vec<(String, EnemyStep)> = store
        .enemies()
        .iter()
        .filter(|e| !e.is_dead())
        .map(|e| (e.id.clone(), evaluate(e, player_position, delta, &config.enemy_ai)))
        .collect();

    for (id, step) in steps {
        match step {
            EnemyStep::Dead => {
                if store.mark_enemy_dead(&id) {
                    debug!("Enemy {} is down", id);
                }
            }
            EnemyStep::Chase { position, facing } => store.chase(&id, position, facing),
            EnemyStep::Attack { timer, strike } => {
                store.hold_attack(&id, timer);
                let Some(attack) = strike else {
                    continue;
                };
                let defense = store.player().defense();
                let damage = resolve_damage(attack, defense, None, config.combat.defense_policy);
                let dealt = store.take_damage(damage);
                damaged.send(PlayerDamaged {
                    attacker: id,
                    amount: dealt,
                });
            }
        }
    }
}
