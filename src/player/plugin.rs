//! Player plugin - movement and player-related systems.

use bevy::prelude::*;

use super::components::*;
use super::movement;
use crate::core::SimSet;

/// Player plugin - resolves the movement intent at the start of each tick.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MoveIntent>()
            .add_systems(Update, movement::player_movement.in_set(SimSet::Input));
    }
}
