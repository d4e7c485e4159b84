//! Body layout for the physics and rendering collaborators.
//!
//! Turns a carved maze plus a viewport into placed bodies:
//!
//! - four boundary walls around the viewport edge
//! - one `"wall"` obstacle per closed interior wall
//! - the goal square in the bottom-right cell (70% of a cell)
//! - the ball in the top-left cell (radius a quarter of the short cell side)
//!
//! Every obstacle starts immovable. Boundary walls carry no label, so the
//! win release never touches them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::command::ObstacleId;
use super::state::labels;
use super::token::Vec2;
use crate::core::MazeConfig;
use crate::maze::{Maze, Orientation, WallSegment};

/// Axis-aligned rectangle given by its centre and size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            width,
            height,
        }
    }
}

/// Circle given by its centre and radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// What an obstacle represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// One of the four outer walls.
    Boundary,
    /// A closed interior wall.
    Wall(WallSegment),
}

/// A placed wall body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub kind: ObstacleKind,
    pub rect: Rect,
    /// False once the body may be moved by physics.
    pub immovable: bool,
}

impl Obstacle {
    /// Contact label, if the body has one.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self.kind {
            ObstacleKind::Boundary => None,
            ObstacleKind::Wall(_) => Some(labels::WALL),
        }
    }
}

/// Every body of one maze instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BodyLayout {
    obstacles: FxHashMap<ObstacleId, Obstacle>,
    goal: Rect,
    ball: Circle,
}

impl BodyLayout {
    /// Place bodies for `maze` inside the configured viewport.
    #[must_use]
    pub fn build(maze: &Maze, config: &MazeConfig) -> Self {
        let dims = maze.dimensions();
        let (w, h, t) = (config.width, config.height, config.wall_thickness);
        let unit_x = w / dims.cols() as f32;
        let unit_y = h / dims.rows() as f32;

        let boundaries = [
            Rect::new(w / 2.0, 0.0, w, t),
            Rect::new(w / 2.0, h, w, t),
            Rect::new(0.0, h / 2.0, t, h),
            Rect::new(w, h / 2.0, t, h),
        ]
        .into_iter()
        .map(|rect| (ObstacleKind::Boundary, rect));

        let walls = maze.closed_walls().map(|segment| {
            let (row, col) = (segment.row as f32, segment.col as f32);
            let rect = match segment.orientation {
                Orientation::Horizontal => Rect::new(
                    col * unit_x + unit_x / 2.0,
                    row * unit_y + unit_y,
                    unit_x,
                    t,
                ),
                Orientation::Vertical => Rect::new(
                    col * unit_x + unit_x,
                    row * unit_y + unit_y / 2.0,
                    t,
                    unit_y,
                ),
            };
            (ObstacleKind::Wall(segment), rect)
        });

        let obstacles = boundaries
            .chain(walls)
            .enumerate()
            .map(|(i, (kind, rect))| {
                let id = ObstacleId::new(i as u32);
                (id, Obstacle { id, kind, rect, immovable: true })
            })
            .collect();

        Self {
            obstacles,
            goal: Rect::new(
                w - unit_x / 2.0,
                h - unit_y / 2.0,
                unit_x * 0.7,
                unit_y * 0.7,
            ),
            ball: Circle {
                center: Vec2::new(unit_x / 2.0, unit_y / 2.0),
                radius: unit_x.min(unit_y) / 4.0,
            },
        }
    }

    /// Look up one obstacle.
    #[must_use]
    pub fn obstacle(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(&id)
    }

    /// All obstacles, ordered by id.
    #[must_use]
    pub fn obstacles(&self) -> Vec<&Obstacle> {
        let mut all: Vec<_> = self.obstacles.values().collect();
        all.sort_unstable_by_key(|o| o.id);
        all
    }

    #[must_use]
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    #[must_use]
    pub fn goal(&self) -> Rect {
        self.goal
    }

    #[must_use]
    pub fn ball(&self) -> Circle {
        self.ball
    }

    /// Clear the immovable flag on every `"wall"` obstacle that still has
    /// it. Returns the affected ids in ascending order.
    pub fn release_walls(&mut self) -> Vec<ObstacleId> {
        let mut released: Vec<_> = self
            .obstacles
            .values_mut()
            .filter(|o| o.immovable && o.label() == Some(labels::WALL))
            .map(|o| {
                o.immovable = false;
                o.id
            })
            .collect();
        released.sort_unstable();
        released
    }
}
