//! The player's token.
//!
//! The physics collaborator moves the body; the core only keeps the spawn
//! position and the velocity it asked for. Input never sets velocity
//! outright, it adds a fixed impulse along one axis.

use serde::{Deserialize, Serialize};

use crate::maze::Direction;

/// 2D vector in world units. `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Position and velocity of the ball.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Token {
    /// A token at rest.
    #[must_use]
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Velocity delta for one impulse.
    #[must_use]
    pub fn impulse_delta(direction: Direction, magnitude: f32) -> Vec2 {
        match direction {
            Direction::Up => Vec2::new(0.0, -magnitude),
            Direction::Right => Vec2::new(magnitude, 0.0),
            Direction::Down => Vec2::new(0.0, magnitude),
            Direction::Left => Vec2::new(-magnitude, 0.0),
        }
    }

    /// Add one impulse and return the new velocity.
    pub fn apply_impulse(&mut self, direction: Direction, magnitude: f32) -> Vec2 {
        self.velocity = self.velocity + Self::impulse_delta(direction, magnitude);
        self.velocity
    }
}
