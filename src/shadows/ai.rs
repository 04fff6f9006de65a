//! Shadow AI: hunt the nearest enemy, otherwise stay near the player.

use bevy::prelude::*;

use super::components::{ActiveShadow, ShadowAiConfig};
use crate::combat::resolve_damage;
use crate::core::{DamageSource, EnemyDamaged, GameConfig};
use crate::enemies::{planar_distance, Enemy};
use crate::store::GameStore;

/// One shadow's decision for this tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowStep {
    pub position: Vec3,
    /// `None` leaves the facing unchanged.
    pub facing: Option<f32>,
    pub target: Option<String>,
    pub attack_cooldown: f32,
    /// Enemy id and raw damage of a strike landing this tick.
    pub strike: Option<(String, f32)>,
}

/// Nearest enemy on the ground plane. Ties go to the earliest in `enemies`.
///
/// Enemies already flagged dead are skipped.
pub fn nearest_enemy<'a>(from: Vec3, enemies: &'a [Enemy]) -> Option<(&'a Enemy, f32)> {
    let mut best: Option<(&Enemy, f32)> = None;
    for enemy in enemies.iter().filter(|e| !e.is_dead()) {
        let distance = planar_distance(from, enemy.position);
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((enemy, distance));
        }
    }
    best
}

/// Decide one shadow's step. Pure.
pub fn evaluate(
    shadow: &ActiveShadow,
    enemies: &[Enemy],
    player_position: Vec3,
    delta: f32,
    config: &ShadowAiConfig,
) -> ShadowStep {
    let mut attack_cooldown = (shadow.attack_cooldown - delta).max(0.0);

    let Some((target, distance)) = nearest_enemy(shadow.position, enemies) else {
        return ShadowStep {
            position: follow(shadow.position, player_position, delta, config),
            facing: None,
            target: None,
            attack_cooldown,
            strike: None,
        };
    };

    let dx = target.position.x - shadow.position.x;
    let dz = target.position.z - shadow.position.z;
    let facing = Some(dx.atan2(dz));

    if distance > config.attack_range {
        let step = Vec3::new(dx / distance, 0.0, dz / distance) * config.chase_speed * delta;
        return ShadowStep {
            position: shadow.position + step,
            facing,
            target: Some(target.id.clone()),
            attack_cooldown,
            strike: None,
        };
    }

    let mut strike = None;
    if attack_cooldown <= 0.0 {
        strike = Some((target.id.clone(), shadow.shadow.attack));
        attack_cooldown = config.attack_cooldown;
    }

    ShadowStep {
        position: shadow.position,
        facing,
        target: Some(target.id.clone()),
        attack_cooldown,
        strike,
    }
}

fn follow(position: Vec3, player_position: Vec3, delta: f32, config: &ShadowAiConfig) -> Vec3 {
    let dx = player_position.x - position.x;
    let dz = player_position.z - position.z;
    let distance = Vec2::new(dx, dz).length();
    if distance <= config.follow_distance {
        return position;
    }
    position + Vec3::new(dx / distance, 0.0, dz / distance) * config.follow_speed * delta
}

/// Vertical offset for rendering.
pub fn shadow_bob_height(elapsed: f32, level: u32) -> f32 {
    0.3 + (elapsed * 3.0 + level as f32).sin() * 0.1
}

/// Run every active shadow's step against the store, in summon order.
///
/// Each shadow sees the damage dealt by the shadows before it.
pub fn shadow_ai(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut store: ResMut<GameStore>,
    mut damaged: EventWriter<EnemyDamaged>,
) {
    let delta = time.delta_secs();
    let ids: Vec<String> = store.active_shadows().iter().map(|s| s.id().to_string()).collect();

    for id in ids {
        let Some(shadow) = store.active_shadow(&id) else {
            continue;
        };
        let step = evaluate(
            shadow,
            store.enemies(),
            store.player().position,
            delta,
            &config.shadow_ai,
        );

        store.move_shadow(&id, step.position, step.facing);
        store.set_shadow_combat(&id, step.target, step.attack_cooldown);

        if let Some((enemy_id, attack)) = step.strike {
            let damage = resolve_damage(attack, 0.0, None, config.combat.defense_policy);
            if let Some(dealt) = store.damage_enemy(&enemy_id, damage) {
                damaged.send(EnemyDamaged {
                    enemy_id,
                    amount: dealt,
                    source: DamageSource::Shadow(id),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::{AiPattern, EnemyKind, EnemySpec};
    use crate::shadows::{Shadow, ShadowKind};

    fn enemy(id: &str, position: Vec3) -> Enemy {
        Enemy::from_spec(EnemySpec {
            id: id.to_string(),
            name: "Dungeon Beast".to_string(),
            level: 2,
            health: 50.0,
            max_health: 50.0,
            attack: 8.0,
            position,
            kind: EnemyKind::Normal,
            ai_pattern: AiPattern::Standard,
        })
    }

    fn shadow_at(position: Vec3) -> ActiveShadow {
        ActiveShadow::deploy(
            Shadow {
                id: "igris".to_string(),
                name: "Igris".to_string(),
                level: 10,
                kind: ShadowKind::Warrior,
                attack: 25.0,
            },
            position,
        )
    }

    #[test]
    fn nearest_enemy_is_chosen() {
        let enemies = vec![enemy("A", Vec3::ZERO), enemy("B", Vec3::new(1.0, 0.0, 0.0))];
        let (target, distance) = nearest_enemy(Vec3::ZERO, &enemies).unwrap();
        assert_eq!(target.id, "A");
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn ties_go_to_the_first_enemy() {
        let enemies = vec![
            enemy("A", Vec3::new(2.0, 0.0, 0.0)),
            enemy("B", Vec3::new(-2.0, 0.0, 0.0)),
        ];
        assert_eq!(nearest_enemy(Vec3::ZERO, &enemies).unwrap().0.id, "A");
    }

    #[test]
    fn far_target_is_chased() {
        let enemies = vec![enemy("A", Vec3::new(0.0, 0.5, 10.0))];
        let step = evaluate(&shadow_at(Vec3::ZERO), &enemies, Vec3::ZERO, 1.0, &ShadowAiConfig::default());

        assert_eq!(step.position, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(step.facing, Some(0.0));
        assert_eq!(step.target.as_deref(), Some("A"));
        assert!(step.strike.is_none());
    }

    #[test]
    fn strike_in_range_then_cooldown() {
        let config = ShadowAiConfig::default();
        let enemies = vec![enemy("A", Vec3::new(1.0, 0.0, 0.0))];
        let mut shadow = shadow_at(Vec3::ZERO);

        let step = evaluate(&shadow, &enemies, Vec3::ZERO, 0.1, &config);
        assert_eq!(step.strike, Some(("A".to_string(), 25.0)));
        assert_eq!(step.attack_cooldown, 1.0);

        shadow.attack_cooldown = step.attack_cooldown;
        let step = evaluate(&shadow, &enemies, Vec3::ZERO, 0.4, &config);
        assert!(step.strike.is_none());
        assert!((step.attack_cooldown - 0.6).abs() < 1e-6);
    }

    #[test]
    fn without_enemies_shadow_follows_player() {
        let config = ShadowAiConfig::default();
        let far = evaluate(&shadow_at(Vec3::new(10.0, 0.0, 0.0)), &[], Vec3::ZERO, 0.5, &config);
        assert_eq!(far.position, Vec3::new(8.0, 0.0, 0.0));
        assert!(far.target.is_none());

        let near = evaluate(&shadow_at(Vec3::new(1.0, 0.0, 0.0)), &[], Vec3::ZERO, 0.5, &config);
        assert_eq!(near.position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn dead_enemies_are_not_targeted() {
        let mut dead = enemy("A", Vec3::ZERO);
        dead.state = crate::enemies::EnemyAiState::Dead;
        let enemies = vec![dead, enemy("B", Vec3::new(5.0, 0.0, 0.0))];
        assert_eq!(nearest_enemy(Vec3::ZERO, &enemies).unwrap().0.id, "B");
    }

    #[test]
    fn bob_height_stays_in_band() {
        for t in [0.0, 0.7, 3.3] {
            let h = shadow_bob_height(t, 10);
            assert!((0.2..=0.4).contains(&h));
        }
    }
}
