//! Game state definitions that control the overall flow of a run.
//!
//! States determine which systems run at any given time. The simulation
//! tick only runs in `InGame`; pausing or dying freezes it in place.

use bevy::prelude::*;

/// Main game states - controls overall flow of a session.
///
/// - Start in `Loading` while data files are read
/// - Enter `InGame` as soon as the store is seeded
/// - `Paused` freezes the simulation but keeps the store intact
/// - `GameOver` when the player's health reaches zero (terminal)
/// - `Cleared` when every wave has spawned and every enemy is gone
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading configuration and seeding the store
    #[default]
    Loading,
    /// Active simulation
    InGame,
    /// Simulation frozen
    Paused,
    /// Player has died. There is no resurrection path.
    GameOver,
    /// Dungeon cleared
    Cleared,
}

impl GameState {
    /// Whether the run has ended for good.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::GameOver | GameState::Cleared)
    }
}

/// Ordering of one simulation tick.
///
/// Every mutation of a tick happens in exactly one of these sets, and the
/// sets run strictly one after another.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Panel toggles, player movement, wave spawning, then cooldowns and
    /// queued intents, in that order.
    Input,
    /// Enemy AI decisions.
    Enemies,
    /// Shadow AI decisions.
    Shadows,
    /// Death sweep, rewards and end-of-run checks.
    Resolve,
    /// Snapshot for presentation.
    Publish,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_game_over_and_cleared_end_the_run() {
        assert!(GameState::GameOver.is_terminal());
        assert!(GameState::Cleared.is_terminal());
        assert!(!GameState::InGame.is_terminal());
        assert!(!GameState::Paused.is_terminal());
        assert!(!GameState::Loading.is_terminal());
    }
}
