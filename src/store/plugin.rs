//! Store plugin - seeds the session store.

use bevy::prelude::*;

use super::state::GameStore;
use crate::core::{DataFile, GameConfig};
use crate::progression::SessionSeed;

/// Inserts the [`SessionSeed`] and a [`GameStore`] built from it.
///
/// Resources already present are kept, so callers can seed a session by
/// inserting their own before adding the plugin. Must be added after
/// `CorePlugin`.
pub struct StorePlugin;

impl Plugin for StorePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<SessionSeed>() {
            app.insert_resource(SessionSeed::load());
        }
        if app.world().contains_resource::<GameStore>() {
            return;
        }

        let world = app.world();
        let store = match (
            world.get_resource::<GameConfig>(),
            world.get_resource::<SessionSeed>(),
        ) {
            (Some(config), Some(seed)) => GameStore::new(config, seed),
            _ => {
                warn!("GameConfig missing when building the store, using defaults");
                GameStore::new(&GameConfig::default(), &SessionSeed::default())
            }
        };
        app.insert_resource(store);
    }
}
