//! Randomized depth-first carving (recursive backtracker).
//!
//! ## Algorithm
//!
//! 1. Every wall closed, every cell unvisited.
//! 2. Draw a start row, then a start column.
//! 3. Entering a cell marks it visited and shuffles its in-bounds
//!    neighbours (candidate order up, right, down, left, then Fisher-Yates).
//! 4. Candidates are tried in shuffled order. An unvisited one gets its wall
//!    opened and is entered before the next candidate is considered.
//!
//! The backtracking frontier is an explicit stack of frames, each holding
//! its cell, its shuffled candidates and a cursor. Draw order is the same
//! as the recursive formulation, so a seed maps to one maze, and depth is
//! bounded by heap rather than call stack.

use smallvec::SmallVec;
use tracing::debug;

use super::cell::{Cell, Dimensions, Direction};
use super::grid::{Grid, Maze};
use crate::core::{MazeResult, RandomSource};

/// One cell on the backtracking stack.
#[derive(Debug)]
struct Frame {
    cell: Cell,
    candidates: SmallVec<[(Direction, Cell); 4]>,
    cursor: usize,
}

/// Generates spanning-tree mazes of a fixed size.
#[derive(Clone, Copy, Debug)]
pub struct MazeGenerator {
    dims: Dimensions,
}

impl MazeGenerator {
    /// Create a generator for the given size.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self { dims }
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Carve a maze. Cannot fail: the dimensions were validated already.
    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Maze {
        let start = Cell::new(rng.index(self.dims.rows()), rng.index(self.dims.cols()));
        let mut maze = Maze::closed(self.dims, start);
        let mut grid = Grid::new(self.dims);

        let mut stack = vec![self.enter(start, &mut grid, rng)];
        let mut max_depth = stack.len();

        while let Some(frame) = stack.last_mut() {
            let Some(&(direction, next)) = frame.candidates.get(frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            if grid.is_visited(next) {
                continue;
            }

            maze.open(frame.cell, direction);
            let frame = self.enter(next, &mut grid, rng);
            stack.push(frame);
            max_depth = max_depth.max(stack.len());
        }

        debug_assert_eq!(grid.visited_count(), self.dims.cell_count());
        debug!(
            dims = %self.dims,
            %start,
            passages = maze.passage_count(),
            max_depth,
            "carved maze"
        );

        maze
    }

    /// Visit a cell and shuffle its candidate neighbours.
    fn enter<R: RandomSource>(&self, cell: Cell, grid: &mut Grid, rng: &mut R) -> Frame {
        grid.visit(cell);

        let mut candidates: SmallVec<[(Direction, Cell); 4]> = Direction::ALL
            .into_iter()
            .filter_map(|dir| self.dims.step(cell, dir).map(|next| (dir, next)))
            .collect();
        rng.shuffle(&mut candidates);

        Frame { cell, candidates, cursor: 0 }
    }
}

/// Validate `rows × cols` and carve a maze.
///
/// ```
/// use maze_latch::core::MazeRng;
/// use maze_latch::maze::generate;
///
/// let maze = generate(4, 6, &mut MazeRng::new(7)).unwrap();
/// assert_eq!(maze.passage_count(), 4 * 6 - 1);
/// assert!(generate(0, 6, &mut MazeRng::new(7)).is_err());
/// ```
pub fn generate<R: RandomSource>(rows: usize, cols: usize, rng: &mut R) -> MazeResult<Maze> {
    let dims = Dimensions::new(rows, cols)?;
    Ok(MazeGenerator::new(dims).generate(rng))
}
