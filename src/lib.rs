//! # maze-latch
//!
//! Random spanning-tree mazes with a one-shot win latch.
//!
//! ## Design Principles
//!
//! 1. **Spanning Tree**: Every maze has exactly `rows * cols - 1` open
//!    passages, every cell is reachable, and any two cells are joined by
//!    exactly one path.
//!
//! 2. **Deterministic**: A seed and a size fully determine the maze.
//!
//! 3. **Intents In, Commands Out**: Rendering, input and physics are
//!    collaborators. They read snapshots and send [`Input`]s; the session
//!    answers with [`Command`]s instead of mutating their worlds.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, RNG
//! - `maze`: cells, wall matrices, carving
//! - `game`: win latch, token, body layout, session
//!
//! ```
//! use maze_latch::{Command, GameSession, Gravity, Input, MazeConfig};
//!
//! let mut session = GameSession::new(MazeConfig::new(10, 14), 7).unwrap();
//! assert_eq!(session.maze().passage_count(), 10 * 14 - 1);
//!
//! let commands = session.handle(&Input::contact("ball", "goal"));
//! assert_eq!(commands[0], Command::SetGravity(Gravity::Active));
//! assert!(session.handle(&Input::contact("ball", "goal")).is_empty());
//! ```

pub mod core;
pub mod game;
pub mod maze;

// Re-export commonly used types
pub use crate::core::{MazeConfig, MazeError, MazeResult, MazeRng, MazeRngState, RandomSource};

pub use crate::maze::{
    generate, Cell, Dimensions, Direction, Grid, Maze, MazeGenerator,
    Orientation, WallMatrix, WallSegment,
};

pub use crate::game::{
    BodyLayout, Command, GameSession, GameState, Gravity, Input,
    Obstacle, ObstacleId, ObstacleKind, SessionSnapshot, Token, Vec2,
};
