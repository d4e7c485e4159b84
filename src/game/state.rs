//! Win state and the contact latch.
//!
//! ## GameState
//!
//! `Playing` until the ball touches the goal, then `Won` for the rest of the
//! maze instance. The transition fires once. Nothing re-arms a `Won` state;
//! replay builds a new instance that starts `Playing`.
//!
//! Contacts arrive as pairs of body labels from the physics collaborator.
//! Only the unordered pair `{"ball", "goal"}` means anything here. Every
//! other pair is an expected, harmless no-op.

use serde::{Deserialize, Serialize};

/// Body labels the core recognises.
pub mod labels {
    /// The player's token.
    pub const BALL: &str = "ball";
    /// The goal marker in the bottom-right cell.
    pub const GOAL: &str = "goal";
    /// Interior maze walls.
    pub const WALL: &str = "wall";
}

/// Is this the unordered pair `{ball, goal}`? Both labels must be present.
#[must_use]
pub fn is_win_pair(a: &str, b: &str) -> bool {
    matches!(
        (a, b),
        (labels::BALL, labels::GOAL) | (labels::GOAL, labels::BALL)
    )
}

/// Game progress for one maze instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Won,
}

impl GameState {
    /// Feed a contact between two labelled bodies.
    ///
    /// Returns `true` only on the Playing → Won transition. Contacts after
    /// the win, and contacts between any other labels, return `false`.
    ///
    /// ```
    /// use maze_latch::game::GameState;
    ///
    /// let mut state = GameState::Playing;
    /// assert!(!state.on_proximity("wall", "ball"));
    /// assert!(state.on_proximity("goal", "ball"));
    /// assert!(!state.on_proximity("ball", "goal"));
    /// assert!(state.is_won());
    /// ```
    pub fn on_proximity(&mut self, a: &str, b: &str) -> bool {
        if *self == GameState::Won || !is_win_pair(a, b) {
            return false;
        }
        *self = GameState::Won;
        true
    }

    #[must_use]
    pub fn is_won(self) -> bool {
        self == GameState::Won
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Playing => write!(f, "playing"),
            GameState::Won => write!(f, "won"),
        }
    }
}
