//! Store module - the session's single source of truth.

mod plugin;
mod state;

pub use plugin::StorePlugin;
pub use state::*;
