//! Shadows module - the player's summoned allies.

mod ai;
mod components;
mod plugin;

pub use ai::{evaluate as evaluate_shadow, nearest_enemy, shadow_ai, shadow_bob_height, ShadowStep};
pub use components::*;
pub use plugin::ShadowPlugin;
