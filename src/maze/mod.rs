//! Maze data model and generation.
//!
//! ## Key Types
//!
//! - `Cell`, `Direction`, `Dimensions`: grid addressing
//! - `WallMatrix`, `WallSegment`: open-passage flags and interior walls
//! - `Grid`: visited flags used while carving
//! - `Maze`: the carved result (a spanning tree over all cells)
//! - `MazeGenerator`: randomized depth-first carving

pub mod cell;
pub mod generator;
pub mod grid;
pub mod walls;

pub use cell::{Cell, Dimensions, Direction};
pub use generator::{generate, MazeGenerator};
pub use grid::{Grid, Maze};
pub use walls::{Orientation, WallMatrix, WallSegment};
