//! Maze generation integration tests.
//!
//! These tests check the spanning-tree guarantees for arbitrary sizes and
//! seeds, plus the fixed layouts for scripted randomness.

use maze_latch::{generate, Cell, Dimensions, Direction, Maze, MazeRng, RandomSource};
use proptest::prelude::*;

/// Always draws index 0.
struct ZeroSource;

impl RandomSource for ZeroSource {
    fn index(&mut self, _bound: usize) -> usize {
        0
    }
}

/// Every open passage as a pair of cell indices.
fn edges(maze: &Maze) -> Vec<(usize, usize)> {
    let dims = maze.dimensions();
    dims.cells()
        .flat_map(|cell| {
            [Direction::Right, Direction::Down]
                .into_iter()
                .filter(move |&dir| maze.is_open(cell, dir))
                .filter_map(move |dir| dims.step(cell, dir))
                .map(move |next| (dims.index(cell), dims.index(next)))
        })
        .collect()
}

/// Union-find over the passages; true if any passage closes a cycle.
fn has_cycle(maze: &Maze) -> bool {
    let mut parent: Vec<usize> = (0..maze.dimensions().cell_count()).collect();

    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for (a, b) in edges(maze) {
        let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
        if ra == rb {
            return true;
        }
        parent[ra] = rb;
    }
    false
}

fn reachable_from_origin(maze: &Maze) -> usize {
    let dims = maze.dimensions();
    dims.cells()
        .filter(|&cell| maze.route(Cell::new(0, 0), cell).is_some())
        .count()
}

proptest! {
    #[test]
    fn prop_passage_count(rows in 1usize..16, cols in 1usize..16, seed in any::<u64>()) {
        let maze = generate(rows, cols, &mut MazeRng::new(seed)).unwrap();
        prop_assert_eq!(maze.passage_count(), rows * cols - 1);
    }

    #[test]
    fn prop_spanning_tree(rows in 1usize..12, cols in 1usize..12, seed in any::<u64>()) {
        let maze = generate(rows, cols, &mut MazeRng::new(seed)).unwrap();
        prop_assert_eq!(reachable_from_origin(&maze), rows * cols);
        prop_assert!(!has_cycle(&maze));
    }

    #[test]
    fn prop_seed_determinism(rows in 1usize..20, cols in 1usize..20, seed in any::<u64>()) {
        let a = generate(rows, cols, &mut MazeRng::new(seed)).unwrap();
        let b = generate(rows, cols, &mut MazeRng::new(seed)).unwrap();
        prop_assert_eq!(a.to_bytes().unwrap(), b.to_bytes().unwrap());
    }

    #[test]
    fn prop_route_is_simple_path(rows in 1usize..10, cols in 1usize..10, seed in any::<u64>()) {
        let maze = generate(rows, cols, &mut MazeRng::new(seed)).unwrap();
        let path = maze.route(Cell::new(0, 0), maze.goal()).unwrap();

        let mut seen = path.clone();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), path.len());

        for pair in path.windows(2) {
            prop_assert!(maze.open_neighbors(pair[0]).contains(&pair[1]));
        }
    }

    #[test]
    fn prop_start_in_bounds(rows in 1usize..30, cols in 1usize..30, seed in any::<u64>()) {
        let maze = generate(rows, cols, &mut MazeRng::new(seed)).unwrap();
        prop_assert!(Dimensions::new(rows, cols).unwrap().contains(maze.start()));
    }
}

#[test]
fn test_zero_source_fixture_2x2() {
    let maze = generate(2, 2, &mut ZeroSource).unwrap();

    assert_eq!(maze.vertical().to_rows(), vec![vec![false], vec![true]]);
    assert_eq!(maze.horizontal().to_rows(), vec![vec![true, true]]);
    assert_eq!(reachable_from_origin(&maze), 4);
    assert!(!has_cycle(&maze));
}

#[test]
fn test_single_row_corridor() {
    let maze = generate(1, 5, &mut MazeRng::new(2024)).unwrap();

    assert_eq!(maze.horizontal().rows(), 0);
    assert!(maze.horizontal().to_rows().is_empty());
    assert_eq!(maze.vertical().to_rows(), vec![vec![true; 4]]);
}

#[test]
fn test_single_cell_has_no_walls() {
    let maze = generate(1, 1, &mut MazeRng::new(0)).unwrap();
    assert_eq!(maze.passage_count(), 0);
    assert_eq!(maze.goal(), Cell::new(0, 0));
    assert_eq!(maze.route(maze.goal(), maze.goal()), Some(vec![Cell::new(0, 0)]));
}

#[test]
fn test_large_grid_is_iterative() {
    // 40k cells; a recursive carve on a small test thread stack would not
    // survive the worst-case depth.
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| generate(200, 200, &mut ZeroSource).unwrap().passage_count())
        .unwrap();
    assert_eq!(handle.join().unwrap(), 200 * 200 - 1);
}

#[test]
fn test_different_seeds_differ() {
    let a = generate(10, 14, &mut MazeRng::new(1)).unwrap();
    let b = generate(10, 14, &mut MazeRng::new(2)).unwrap();
    assert_ne!(a.to_bytes().unwrap(), b.to_bytes().unwrap());
}

#[test]
fn test_entropy_sessions_vary() {
    let mut a = MazeRng::from_entropy();
    let mut b = MazeRng::from_entropy();
    assert_ne!(a.seed(), b.seed());

    let first = generate(10, 14, &mut a).unwrap();
    let second = generate(10, 14, &mut b).unwrap();
    assert_eq!(first.passage_count(), second.passage_count());
    assert_ne!(first, second);
}
