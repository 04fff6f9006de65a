//! Core game module - states, tick ordering, events, configuration.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod error;
mod events;
mod plugin;
mod states;

pub use config::*;
pub use error::*;
pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
