//! Session configuration.
//!
//! A `MazeConfig` describes one maze instance:
//! - grid size (`rows` × `cols`)
//! - viewport size used to lay out bodies for the physics collaborator
//! - token impulse strength and wall thickness
//!
//! The defaults reproduce the classic 10 × 14 board.

use serde::{Deserialize, Serialize};

use super::error::{MazeError, MazeResult};
use crate::maze::Dimensions;

/// Configuration for a maze session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Number of cell rows.
    pub rows: usize,

    /// Number of cell columns.
    pub cols: usize,

    /// Viewport width in world units.
    pub width: f32,

    /// Viewport height in world units.
    pub height: f32,

    /// Thickness of every wall body.
    pub wall_thickness: f32,

    /// Velocity added to the token per directional impulse.
    pub impulse: f32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 14,
            width: 1400.0,
            height: 1000.0,
            wall_thickness: 5.0,
            impulse: 5.0,
        }
    }
}

impl MazeConfig {
    /// Create a config with the given grid size and default everything else.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the number of rows.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of columns.
    #[must_use]
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Set the viewport size.
    #[must_use]
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the wall thickness.
    #[must_use]
    pub fn with_wall_thickness(mut self, thickness: f32) -> Self {
        self.wall_thickness = thickness;
        self
    }

    /// Set the impulse strength.
    #[must_use]
    pub fn with_impulse(mut self, impulse: f32) -> Self {
        self.impulse = impulse;
        self
    }

    /// Validated grid dimensions.
    pub fn dimensions(&self) -> MazeResult<Dimensions> {
        Dimensions::new(self.rows, self.cols)
    }

    /// Check the whole config before any work begins.
    pub fn validate(&self) -> MazeResult<()> {
        self.dimensions()?;

        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(MazeError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }

        for (name, value) in [
            ("wall_thickness", self.wall_thickness),
            ("impulse", self.impulse),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MazeError::InvalidParameter { name, value });
            }
        }

        Ok(())
    }
}
