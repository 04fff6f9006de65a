//! Shadow Monarch - the combat and AI core of a dungeon action-RPG, in Bevy.
//!
//! The player fights waves of enemies alongside summoned shadow allies.
//! Everything runs headless; a renderer only needs to read the store and
//! the [`ui::HudSnapshot`].
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, the tick schedule, events, configuration
//! - **Store**: The session's single source of truth and its actions
//! - **Player**: Movement and player stats
//! - **Combat**: Damage resolution, skills, intents, the death sweep
//! - **Enemies**: Enemy AI and wave spawning
//! - **Shadows**: Shadow AI
//! - **UI**: HUD snapshot and panel toggles
//!
//! Items and progression (skills, quests, leveling) are plain data used
//! by the store.

pub mod combat;
pub mod core;
pub mod enemies;
pub mod inventory;
pub mod player;
pub mod progression;
pub mod shadows;
pub mod store;
pub mod ui;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
///
/// Needs `StatesPlugin` (part of `DefaultPlugins`, not of `MinimalPlugins`)
/// and a `Time` source.
pub struct ShadowMonarchPlugin;

impl Plugin for ShadowMonarchPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Session store (needs the config from core)
            .add_plugins(store::StorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // Shadow systems
            .add_plugins(shadows::ShadowPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
