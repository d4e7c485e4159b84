//! Wall matrices.
//!
//! A `WallMatrix` is a dense `rows × cols` grid of "passage open" flags
//! backed by an `im::Vector`, so cloning a maze for a renderer snapshot is
//! O(1). A maze owns two of them:
//!
//! - vertical walls: `rows × (cols - 1)`, entry `(r, c)` sits between cells
//!   `(r, c)` and `(r, c + 1)`
//! - horizontal walls: `(rows - 1) × cols`, entry `(r, c)` sits between
//!   cells `(r, c)` and `(r + 1, c)`

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{MazeError, MazeResult};

/// Which wall matrix a segment belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Separates left/right neighbours.
    Vertical,
    /// Separates up/down neighbours.
    Horizontal,
}

/// One interior wall, addressed by its matrix entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallSegment {
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl WallSegment {
    #[must_use]
    pub const fn vertical(row: usize, col: usize) -> Self {
        Self { orientation: Orientation::Vertical, row, col }
    }

    #[must_use]
    pub const fn horizontal(row: usize, col: usize) -> Self {
        Self { orientation: Orientation::Horizontal, row, col }
    }
}

/// Dense boolean matrix of open passages. `true` means the wall is gone.
///
/// Decoding checks that the flag count matches `rows × cols`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWallMatrix")]
pub struct WallMatrix {
    rows: usize,
    cols: usize,
    open: Vector<bool>,
}

/// Wire form of a `WallMatrix`, before the shape check.
#[derive(Deserialize)]
struct RawWallMatrix {
    rows: usize,
    cols: usize,
    open: Vector<bool>,
}

impl TryFrom<RawWallMatrix> for WallMatrix {
    type Error = MazeError;

    fn try_from(raw: RawWallMatrix) -> MazeResult<Self> {
        if raw.rows.checked_mul(raw.cols) != Some(raw.open.len()) {
            return Err(MazeError::MalformedWalls {
                rows: raw.rows,
                cols: raw.cols,
                len: raw.open.len(),
            });
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            open: raw.open,
        })
    }
}

impl WallMatrix {
    /// All walls closed.
    #[must_use]
    pub fn closed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            open: std::iter::repeat(false).take(rows * cols).collect(),
        }
    }

    /// Build from nested rows, mostly for fixtures.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "All rows must have the same length"
        );
        let mut matrix = Self::closed(rows.len(), cols);
        for (r, row) in rows.iter().enumerate() {
            for (c, &open) in row.iter().enumerate() {
                if open {
                    matrix.open(r, c);
                }
            }
        }
        matrix
    }

    /// Number of matrix rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of matrix columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Is the passage at `(row, col)` open? Out-of-range entries read closed.
    #[must_use]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.open[row * self.cols + col]
    }

    /// Remove the wall at `(row, col)`.
    pub(crate) fn open(&mut self, row: usize, col: usize) {
        debug_assert!(row < self.rows && col < self.cols);
        self.open[row * self.cols + col] = true;
    }

    /// Number of open passages.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&open| open).count()
    }

    /// Are all entries open? Vacuously true for an empty matrix.
    #[must_use]
    pub fn all_open(&self) -> bool {
        self.open.iter().all(|&open| open)
    }

    /// Nested-row view, for fixtures and display.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|r| (0..self.cols).map(|c| self.is_open(r, c)).collect())
            .collect()
    }

    /// Iterate over `(row, col)` of every closed entry, row-major.
    pub fn closed_entries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.open
            .iter()
            .enumerate()
            .filter(|(_, open)| !**open)
            .map(move |(i, _)| (i / cols, i % cols))
    }
}
