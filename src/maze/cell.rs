//! Cell addressing.
//!
//! ## Cell
//!
//! `(row, col)`, 0-indexed, row-major. Row 0 is the top of the board.
//!
//! ## Direction
//!
//! The four grid moves in the fixed candidate order up, right, down, left.
//!
//! ## Dimensions
//!
//! A validated `rows × cols` pair. Constructing one is the only place zero
//! sizes are rejected.

use serde::{Deserialize, Serialize};

use crate::core::{MazeError, MazeResult};

/// A grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell address.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move between orthogonally adjacent cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in candidate order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(row, col)` delta of this move.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// The reverse move.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// True for left/right moves, which cross vertical walls.
    #[must_use]
    pub const fn is_horizontal_move(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Validated grid size. Both sides are at least 1.
///
/// Serialized as a `(rows, cols)` pair; decoding re-runs the validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Validate a grid size. The cell count must fit in a `usize`.
    pub fn new(rows: usize, cols: usize) -> MazeResult<Self> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(MazeError::InvalidDimension { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Is the cell inside the grid?
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Row-major index of a cell.
    #[must_use]
    pub const fn index(self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    /// The bottom-right cell.
    #[must_use]
    pub const fn last_cell(self) -> Cell {
        Cell::new(self.rows - 1, self.cols - 1)
    }

    /// The neighbour one step away, if it is inside the grid.
    #[must_use]
    pub fn step(self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (dr, dc) = direction.delta();
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        let next = Cell::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }
}

impl TryFrom<(usize, usize)> for Dimensions {
    type Error = MazeError;

    fn try_from((rows, cols): (usize, usize)) -> MazeResult<Self> {
        Self::new(rows, cols)
    }
}

impl From<Dimensions> for (usize, usize) {
    fn from(dims: Dimensions) -> Self {
        (dims.rows, dims.cols)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
