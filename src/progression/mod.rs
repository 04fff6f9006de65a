//! Progression module - skills, quests, leveling and the starting roster.

mod leveling;
mod quests;
mod seed;
mod skills;

pub use leveling::*;
pub use quests::*;
pub use seed::SessionSeed;
pub use skills::*;
