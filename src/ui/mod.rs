//! UI module - the HUD snapshot and panel toggles.

mod hud;
mod plugin;

pub use hud::{EnemyMarker, HudSnapshot, ShadowMarker, SkillSlot};
pub use plugin::UiPlugin;
