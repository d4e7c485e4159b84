//! Error types.
//!
//! Only boundary checks fail. Stray contacts and repeated wins are no-ops,
//! not errors, so they never show up here.

use thiserror::Error;

/// Errors reported by maze construction and configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MazeError {
    /// A maze needs at least one row and one column.
    #[error("invalid maze dimensions {rows}x{cols}: rows and cols must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },

    /// The viewport used for body layout must be finite and positive.
    #[error("invalid viewport {width}x{height}: must be finite and positive")]
    InvalidViewport { width: f32, height: f32 },

    /// A wall matrix whose flag count doesn't match its shape.
    #[error("malformed wall matrix {rows}x{cols} with {len} flags")]
    MalformedWalls { rows: usize, cols: usize, len: usize },

    /// A physical parameter that must be finite and non-negative.
    #[error("invalid {name}: {value} must be finite and non-negative")]
    InvalidParameter { name: &'static str, value: f32 },

    /// Binary encoding or decoding of a maze failed.
    #[error("maze encoding failed: {0}")]
    Encode(String),
}

/// Result alias used across the crate.
pub type MazeResult<T> = Result<T, MazeError>;
