//! Shadow plugin - registers the shadow AI.

use bevy::prelude::*;

use super::ai;
use crate::core::SimSet;

/// Shadow plugin - runs every active shadow after the enemies moved.
pub struct ShadowPlugin;

impl Plugin for ShadowPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, ai::shadow_ai.in_set(SimSet::Shadows));
    }
}
