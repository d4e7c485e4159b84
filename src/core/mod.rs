//! Core types: configuration, errors, randomness.
//!
//! Everything here is independent of the maze data model so sessions and
//! tests can share one source of truth for seeds and limits.

pub mod config;
pub mod error;
pub mod rng;

pub use config::MazeConfig;
pub use error::{MazeError, MazeResult};
pub use rng::{MazeRng, MazeRngState, RandomSource};
