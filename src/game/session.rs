//! One owner for all mutable game state.
//!
//! A `GameSession` holds the maze, the body layout, the token, the win state
//! and the gravity flag for a single maze instance. Collaborators read
//! through accessors or a [`SessionSnapshot`] and change things only by
//! calling [`GameSession::handle`]. Each call applies its whole effect
//! before returning.
//!
//! ## Replay
//!
//! [`GameSession::replay`] builds a fresh instance from the next fork of the
//! session RNG and swaps it in as one value, so nothing ever sees a mix of
//! old walls and new state.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::bodies::{BodyLayout, Obstacle};
use super::command::{Command, Gravity, Input};
use super::state::GameState;
use super::token::{Token, Vec2};
use crate::core::{MazeConfig, MazeResult, MazeRng, MazeRngState};
use crate::maze::{Cell, Direction, Maze, MazeGenerator};

/// Everything that is discarded and rebuilt on replay.
#[derive(Clone, Debug)]
struct Instance {
    maze: Maze,
    bodies: BodyLayout,
    token: Token,
    state: GameState,
    gravity: Gravity,
}

impl Instance {
    fn build(config: &MazeConfig, generator: &MazeGenerator, rng: &mut MazeRng) -> Self {
        let maze = generator.generate(rng);
        let bodies = BodyLayout::build(&maze, config);
        let token = Token::at(bodies.ball().center);
        Self {
            maze,
            bodies,
            token,
            state: GameState::Playing,
            gravity: Gravity::Neutral,
        }
    }
}

/// Read-only view for the rendering collaborator.
///
/// Cheap to clone: the wall matrices are persistent vectors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub maze: Maze,
    pub goal: Cell,
    pub state: GameState,
    pub gravity: Gravity,
    pub token: Token,
}

/// A running maze game.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: MazeConfig,
    generator: MazeGenerator,
    rng: MazeRng,
    instance: Instance,
    round: u32,
}

impl GameSession {
    /// Validate `config` and build the first maze from `seed`.
    pub fn new(config: MazeConfig, seed: u64) -> MazeResult<Self> {
        Self::with_rng(config, MazeRng::new(seed))
    }

    /// Like [`GameSession::new`], with a caller-supplied RNG.
    pub fn with_rng(config: MazeConfig, mut rng: MazeRng) -> MazeResult<Self> {
        config.validate()?;
        let generator = MazeGenerator::new(config.dimensions()?);
        let instance = Instance::build(&config, &generator, &mut rng.fork());

        info!(
            dims = %generator.dimensions(),
            seed = rng.seed(),
            "session started"
        );

        Ok(Self {
            config,
            generator,
            rng,
            instance,
            round: 1,
        })
    }

    /// Apply one collaborator input and return what physics must do.
    pub fn handle(&mut self, input: &Input) -> Vec<Command> {
        match input {
            Input::Impulse(direction) => vec![Command::ApplyImpulse(self.push(*direction))],
            Input::Contact { a, b } => self.contact(a, b),
        }
    }

    /// Add a directional impulse to the token and return the velocity
    /// delta physics must apply to the ball.
    pub fn push(&mut self, direction: Direction) -> Vec2 {
        let delta = Token::impulse_delta(direction, self.config.impulse);
        let velocity = self
            .instance
            .token
            .apply_impulse(direction, self.config.impulse);
        debug!(?direction, vx = velocity.x, vy = velocity.y, "impulse");
        delta
    }

    /// Feed a contact. On the win transition, flips gravity, releases the
    /// interior walls and returns the matching commands.
    pub fn contact(&mut self, a: &str, b: &str) -> Vec<Command> {
        if !self.instance.state.on_proximity(a, b) {
            return Vec::new();
        }

        self.instance.gravity = Gravity::Active;
        let released = self.instance.bodies.release_walls();

        info!(
            round = self.round,
            released = released.len(),
            "goal reached"
        );

        vec![
            Command::SetGravity(Gravity::Active),
            Command::ReleaseObstacles(released),
        ]
    }

    /// Throw away the current maze and start a new one.
    pub fn replay(&mut self) {
        let instance = Instance::build(&self.config, &self.generator, &mut self.rng.fork());
        self.instance = instance;
        self.round += 1;

        info!(round = self.round, "replay");
    }

    #[must_use]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    #[must_use]
    pub fn maze(&self) -> &Maze {
        &self.instance.maze
    }

    /// The bottom-right cell.
    #[must_use]
    pub fn goal(&self) -> Cell {
        self.instance.maze.goal()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.instance.state
    }

    #[must_use]
    pub fn gravity(&self) -> Gravity {
        self.instance.gravity
    }

    #[must_use]
    pub fn token(&self) -> &Token {
        &self.instance.token
    }

    #[must_use]
    pub fn bodies(&self) -> &BodyLayout {
        &self.instance.bodies
    }

    /// All obstacles, ordered by id.
    #[must_use]
    pub fn obstacles(&self) -> Vec<&Obstacle> {
        self.instance.bodies.obstacles()
    }

    /// 1 for the first maze, incremented by every replay.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// RNG checkpoint; restoring it reproduces the following replays.
    #[must_use]
    pub fn rng_state(&self) -> MazeRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            maze: self.instance.maze.clone(),
            goal: self.goal(),
            state: self.instance.state,
            gravity: self.instance.gravity,
            token: self.instance.token,
        }
    }
}
