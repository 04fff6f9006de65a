//! Inventory module - items, rarities and equipment slots.

mod components;

pub use components::*;
