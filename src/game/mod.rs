//! Game layer on top of a carved maze.
//!
//! ## Key Types
//!
//! - `GameState`: Playing/Won with the one-shot contact latch
//! - `Token`: ball spawn position and requested velocity
//! - `BodyLayout`, `Obstacle`: placed bodies handed to physics
//! - `Input`, `Command`: intents in, physics instructions out
//! - `GameSession`: single owner of one maze instance and its replays

pub mod bodies;
pub mod command;
pub mod session;
pub mod state;
pub mod token;

pub use bodies::{BodyLayout, Circle, Obstacle, ObstacleKind, Rect};
pub use command::{Command, Gravity, Input, ObstacleId};
pub use session::{GameSession, SessionSnapshot};
pub use state::{is_win_pair, labels, GameState};
pub use token::{Token, Vec2};
