//! Combat module - health, damage resolution, intents and the death sweep.

mod components;
mod plugin;
mod resolver;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
pub use resolver::{kill_experience, resolve_damage};
pub use systems::sweep_dead_enemies;
