//! Player module - player record and movement.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::{player_movement, step_player};
pub use plugin::PlayerPlugin;
