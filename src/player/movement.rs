//! Player movement on the arena floor.

use bevy::prelude::*;

use super::components::{MoveIntent, PlayerConfig};
use crate::core::GameConfig;
use crate::store::GameStore;

/// Where the player ends up after one tick of `intent`.
///
/// Returns the new position and facing, or `None` when standing still.
/// Intents longer than one unit are normalized; the result is clamped to
/// the arena square.
pub fn step_player(
    position: Vec3,
    intent: Vec2,
    delta: f32,
    config: &PlayerConfig,
) -> Option<(Vec3, f32)> {
    if intent == Vec2::ZERO || !intent.is_finite() {
        return None;
    }

    let direction = if intent.length_squared() > 1.0 {
        intent.normalize()
    } else {
        intent
    };

    let step = direction * config.move_speed * delta;
    let extent = config.arena_half_extent;
    let next = Vec3::new(
        (position.x + step.x).clamp(-extent, extent),
        position.y,
        (position.z + step.y).clamp(-extent, extent),
    );

    // Face the direction of travel
    let facing = direction.x.atan2(direction.y);

    Some((next, facing))
}

/// Apply the frame's movement intent to the player of record.
pub fn player_movement(
    time: Res<Time>,
    intent: Res<MoveIntent>,
    config: Res<GameConfig>,
    mut store: ResMut<GameStore>,
) {
    let position = store.player().position;
    if let Some((next, facing)) = step_player(position, intent.0, time.delta_secs(), &config.player) {
        store.move_player(next, facing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_at_configured_speed() {
        let config = PlayerConfig::default();
        let (next, _) = step_player(Vec3::new(0.0, 0.5, 0.0), Vec2::X, 0.5, &config).unwrap();
        assert!((next.x - 2.5).abs() < 1e-5);
        assert_eq!(next.y, 0.5);
        assert_eq!(next.z, 0.0);
    }

    #[test]
    fn clamps_to_arena() {
        let config = PlayerConfig::default();
        let (next, _) =
            step_player(Vec3::new(9.9, 0.5, -9.9), Vec2::new(1.0, -1.0), 1.0, &config).unwrap();
        assert_eq!(next.x, 10.0);
        assert_eq!(next.z, -10.0);
    }

    #[test]
    fn facing_follows_movement() {
        let config = PlayerConfig::default();
        let (_, facing) = step_player(Vec3::ZERO, Vec2::new(0.0, 1.0), 0.1, &config).unwrap();
        assert_eq!(facing, 0.0);
        let (_, facing) = step_player(Vec3::ZERO, Vec2::new(1.0, 0.0), 0.1, &config).unwrap();
        assert!((facing - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn no_intent_means_no_move() {
        let config = PlayerConfig::default();
        assert!(step_player(Vec3::ZERO, Vec2::ZERO, 0.1, &config).is_none());
    }
}
