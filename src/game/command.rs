//! Intents in, commands out.
//!
//! Collaborators never touch session state directly. Input devices and the
//! physics engine send an [`Input`]; the session answers with the
//! [`Command`]s the physics side must apply: an impulse answers with the
//! velocity delta, the win with gravity and wall release.

use serde::{Deserialize, Serialize};

use super::token::Vec2;
use crate::maze::Direction;

/// Identifier of a body in the obstacle registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObstacleId(pub u32);

impl ObstacleId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Obstacle({})", self.0)
    }
}

/// Global downward force.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gravity {
    /// Zero vertical force; the board is flat.
    #[default]
    Neutral,
    /// Unit downward force.
    Active,
}

impl Gravity {
    /// Vertical acceleration the physics engine should use.
    #[must_use]
    pub fn y(self) -> f32 {
        match self {
            Gravity::Neutral => 0.0,
            Gravity::Active => 1.0,
        }
    }
}

/// Something a collaborator reports to the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// A decoded directional key press.
    Impulse(Direction),
    /// Two labelled bodies started touching.
    Contact { a: String, b: String },
}

impl Input {
    /// Build a contact notification.
    pub fn contact(a: impl Into<String>, b: impl Into<String>) -> Self {
        Input::Contact { a: a.into(), b: b.into() }
    }
}

/// Instruction for the physics collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Add this delta to the ball's velocity.
    ApplyImpulse(Vec2),
    /// Switch the world's downward force.
    SetGravity(Gravity),
    /// These obstacles are no longer immovable.
    ReleaseObstacles(Vec<ObstacleId>),
}
