//! The carved maze and its visited grid.
//!
//! ## Grid
//!
//! Per-cell visited flags, only alive while carving.
//!
//! ## Maze
//!
//! The generator's output: dimensions, the carve start, and the two wall
//! matrices. Written once, read-only afterwards. Cloning is O(1).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Cell, Dimensions, Direction};
use super::walls::{WallMatrix, WallSegment};
use crate::core::{MazeError, MazeResult};

/// Visited flags for every cell, row-major.
#[derive(Clone, Debug)]
pub struct Grid {
    dims: Dimensions,
    visited: Vec<bool>,
}

impl Grid {
    /// All cells unvisited.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            visited: vec![false; dims.cell_count()],
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[must_use]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited[self.dims.index(cell)]
    }

    /// Mark a cell visited. Returns false if it already was.
    pub fn visit(&mut self, cell: Cell) -> bool {
        let slot = &mut self.visited[self.dims.index(cell)];
        !std::mem::replace(slot, true)
    }

    /// Number of visited cells.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }
}

/// A carved maze.
///
/// Decoding goes through [`Maze::from_walls`], so a decoded maze always has
/// matrices shaped for its dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMaze")]
pub struct Maze {
    dims: Dimensions,
    start: Cell,
    vertical: WallMatrix,
    horizontal: WallMatrix,
}

/// Wire form of a `Maze`, before the shape check.
#[derive(Deserialize)]
struct RawMaze {
    dims: Dimensions,
    start: Cell,
    vertical: WallMatrix,
    horizontal: WallMatrix,
}

impl TryFrom<RawMaze> for Maze {
    type Error = MazeError;

    fn try_from(raw: RawMaze) -> MazeResult<Self> {
        Maze::from_walls(raw.dims, raw.start, raw.vertical, raw.horizontal)
    }
}

impl Maze {
    /// A maze with every interior wall standing.
    #[must_use]
    pub fn closed(dims: Dimensions, start: Cell) -> Self {
        Self {
            dims,
            start,
            vertical: WallMatrix::closed(dims.rows(), dims.cols() - 1),
            horizontal: WallMatrix::closed(dims.rows() - 1, dims.cols()),
        }
    }

    /// Assemble a maze from explicit matrices.
    ///
    /// Fails if the matrix shapes don't match `dims`.
    pub fn from_walls(
        dims: Dimensions,
        start: Cell,
        vertical: WallMatrix,
        horizontal: WallMatrix,
    ) -> MazeResult<Self> {
        let expected = Self::closed(dims, start);
        let shape = |m: &WallMatrix| (m.rows(), m.cols());
        if shape(&vertical) != shape(&expected.vertical)
            || shape(&horizontal) != shape(&expected.horizontal)
            || !dims.contains(start)
        {
            return Err(MazeError::InvalidDimension {
                rows: dims.rows(),
                cols: dims.cols(),
            });
        }
        Ok(Self { dims, start, vertical, horizontal })
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Where carving began.
    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The goal is always the bottom-right cell.
    #[must_use]
    pub fn goal(&self) -> Cell {
        self.dims.last_cell()
    }

    /// `rows × (cols - 1)` open flags between horizontal neighbours.
    #[must_use]
    pub fn vertical(&self) -> &WallMatrix {
        &self.vertical
    }

    /// `(rows - 1) × cols` open flags between vertical neighbours.
    #[must_use]
    pub fn horizontal(&self) -> &WallMatrix {
        &self.horizontal
    }

    /// Is there an open passage from `cell` in `direction`?
    #[must_use]
    pub fn is_open(&self, cell: Cell, direction: Direction) -> bool {
        let Cell { row, col } = cell;
        match direction {
            Direction::Right => self.vertical.is_open(row, col),
            Direction::Left => col > 0 && self.vertical.is_open(row, col - 1),
            Direction::Down => self.horizontal.is_open(row, col),
            Direction::Up => row > 0 && self.horizontal.is_open(row - 1, col),
        }
    }

    /// Remove the wall between `cell` and its neighbour in `direction`.
    pub(crate) fn open(&mut self, cell: Cell, direction: Direction) {
        let Cell { row, col } = cell;
        match direction {
            Direction::Right => self.vertical.open(row, col),
            Direction::Left => self.vertical.open(row, col - 1),
            Direction::Down => self.horizontal.open(row, col),
            Direction::Up => self.horizontal.open(row - 1, col),
        }
    }

    /// Neighbours reachable from `cell` through one open passage.
    #[must_use]
    pub fn open_neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.is_open(cell, dir))
            .filter_map(|dir| self.dims.step(cell, dir))
            .collect()
    }

    /// Total open passages across both matrices.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.vertical.open_count() + self.horizontal.open_count()
    }

    /// Every interior wall still standing: vertical walls first, then
    /// horizontal, each row-major.
    pub fn closed_walls(&self) -> impl Iterator<Item = WallSegment> + '_ {
        let vertical = self
            .vertical
            .closed_entries()
            .map(|(r, c)| WallSegment::vertical(r, c));
        let horizontal = self
            .horizontal
            .closed_entries()
            .map(|(r, c)| WallSegment::horizontal(r, c));
        vertical.chain(horizontal)
    }

    /// The path from `from` to `to` through open passages, both ends
    /// included. `None` if either cell is outside the grid or unreachable.
    #[must_use]
    pub fn route(&self, from: Cell, to: Cell) -> Option<Vec<Cell>> {
        if !self.dims.contains(from) || !self.dims.contains(to) {
            return None;
        }

        let mut parent: Vec<Option<Cell>> = vec![None; self.dims.cell_count()];
        let mut seen = Grid::new(self.dims);
        let mut queue = std::collections::VecDeque::from([from]);
        seen.visit(from);

        while let Some(cell) = queue.pop_front() {
            if cell == to {
                let mut path = vec![to];
                let mut cursor = to;
                while let Some(prev) = parent[self.dims.index(cursor)] {
                    path.push(prev);
                    cursor = prev;
                }
                path.reverse();
                return Some(path);
            }
            for next in self.open_neighbors(cell) {
                if seen.visit(next) {
                    parent[self.dims.index(next)] = Some(cell);
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// Compact binary encoding. Equal mazes encode to equal bytes.
    pub fn to_bytes(&self) -> MazeResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| MazeError::Encode(e.to_string()))
    }

    /// Decode a maze produced by [`Maze::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> MazeResult<Self> {
        bincode::deserialize(bytes).map_err(|e| MazeError::Encode(e.to_string()))
    }
}

/// ASCII drawing, `+--+` style, for logs and test failures.
impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rows, cols) = (self.dims.rows(), self.dims.cols());
        writeln!(f, "+{}", "--+".repeat(cols))?;
        for row in 0..rows {
            let mut line = String::from("|");
            let mut floor = String::from("+");
            for col in 0..cols {
                let cell = Cell::new(row, col);
                line.push_str(if cell == self.goal() { "GG" } else { "  " });
                line.push(if self.is_open(cell, Direction::Right) { ' ' } else { '|' });
                floor.push_str(if self.is_open(cell, Direction::Down) { "  " } else { "--" });
                floor.push('+');
            }
            writeln!(f, "{line}")?;
            writeln!(f, "{floor}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(rows: usize, cols: usize) -> Dimensions {
        Dimensions::new(rows, cols).unwrap()
    }

    /// 2x2 U shape: down the left column, across the bottom, up the right.
    fn u_shape() -> Maze {
        Maze::from_walls(
            dims(2, 2),
            Cell::new(0, 0),
            WallMatrix::from_rows(&[vec![false], vec![true]]),
            WallMatrix::from_rows(&[vec![true, true]]),
        )
        .unwrap()
    }

    #[test]
    fn test_grid_visit() {
        let mut grid = Grid::new(dims(2, 3));
        assert!(!grid.is_visited(Cell::new(1, 2)));
        assert!(grid.visit(Cell::new(1, 2)));
        assert!(!grid.visit(Cell::new(1, 2)));
        assert!(grid.is_visited(Cell::new(1, 2)));
        assert_eq!(grid.visited_count(), 1);
    }

    #[test]
    fn test_closed_shapes() {
        let maze = Maze::closed(dims(3, 4), Cell::new(0, 0));
        assert_eq!((maze.vertical().rows(), maze.vertical().cols()), (3, 3));
        assert_eq!((maze.horizontal().rows(), maze.horizontal().cols()), (2, 4));
        assert_eq!(maze.passage_count(), 0);
        assert_eq!(maze.closed_walls().count(), 9 + 8);
    }

    #[test]
    fn test_from_walls_rejects_bad_shape() {
        let result = Maze::from_walls(
            dims(2, 2),
            Cell::new(0, 0),
            WallMatrix::closed(2, 2),
            WallMatrix::closed(1, 2),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_is_open_both_sides() {
        let maze = u_shape();
        let bottom_left = Cell::new(1, 0);

        assert!(maze.is_open(bottom_left, Direction::Right));
        assert!(maze.is_open(Cell::new(1, 1), Direction::Left));
        assert!(maze.is_open(bottom_left, Direction::Up));
        assert!(!maze.is_open(Cell::new(0, 0), Direction::Right));
        assert!(!maze.is_open(Cell::new(0, 0), Direction::Up));
        assert!(!maze.is_open(Cell::new(0, 0), Direction::Left));
    }

    #[test]
    fn test_open_neighbors() {
        let maze = u_shape();
        let n = maze.open_neighbors(Cell::new(1, 0));
        assert_eq!(n.as_slice(), &[Cell::new(0, 0), Cell::new(1, 1)]);
        assert_eq!(maze.open_neighbors(Cell::new(0, 1)).len(), 1);
    }

    #[test]
    fn test_route_follows_corridor() {
        let maze = u_shape();
        let path = maze.route(Cell::new(0, 0), maze.goal()).unwrap();
        assert_eq!(
            path,
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]
        );

        let long = maze.route(Cell::new(0, 0), Cell::new(0, 1)).unwrap();
        assert_eq!(long.len(), 4);

        assert_eq!(maze.route(Cell::new(0, 0), Cell::new(0, 0)).unwrap().len(), 1);
        assert!(maze.route(Cell::new(0, 0), Cell::new(5, 5)).is_none());
    }

    #[test]
    fn test_route_unreachable() {
        let maze = Maze::closed(dims(1, 2), Cell::new(0, 0));
        assert!(maze.route(Cell::new(0, 0), Cell::new(0, 1)).is_none());
    }

    #[test]
    fn test_closed_walls_listed() {
        let walls: Vec<_> = u_shape().closed_walls().collect();
        assert_eq!(walls, vec![WallSegment::vertical(0, 0)]);
    }

    #[test]
    fn test_bytes_round_trip() {
        let maze = u_shape();
        let bytes = maze.to_bytes().unwrap();
        assert_eq!(Maze::from_bytes(&bytes).unwrap(), maze);
        assert!(Maze::from_bytes(&[1, 2]).is_err());
    }

    #[test]
    fn test_decode_rejects_mismatched_walls() {
        let d = dims(2, 2);
        let bad = Maze {
            dims: d,
            start: Cell::new(0, 0),
            vertical: WallMatrix::closed(2, 2),
            horizontal: WallMatrix::closed(1, 2),
        };
        let bytes = bad.to_bytes().unwrap();
        assert!(Maze::from_bytes(&bytes).is_err());

        let outside = Maze {
            start: Cell::new(5, 0),
            ..Maze::closed(d, Cell::new(0, 0))
        };
        assert!(Maze::from_bytes(&outside.to_bytes().unwrap()).is_err());
    }

    #[test]
    fn test_decode_rejects_short_matrix_json() {
        let mut value = serde_json::to_value(u_shape()).unwrap();
        value["vertical"]["open"] = serde_json::json!([]);

        assert!(serde_json::from_value::<Maze>(value).is_err());

        let good = serde_json::to_value(u_shape()).unwrap();
        assert_eq!(serde_json::from_value::<Maze>(good).unwrap(), u_shape());
    }

    #[test]
    fn test_display() {
        let drawn = u_shape().to_string();
        let expected = "\
+--+--+
|  |  |
+  +  +
|   GG|
+--+--+
";
        assert_eq!(drawn, expected);
    }
}
