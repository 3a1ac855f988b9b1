use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    config::GameConfig,
    direction::Direction,
    state::{GameState, GameStatus, Position, Snake, Snapshot},
};

/// What a single tick produced, for collaborator side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Status after the tick
    pub status: GameStatus,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
}

/// The game engine. Owns the snake, food, direction and score; collaborators
/// only ever see owned snapshots and only ever drive it through
/// `set_direction` and `tick`.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    state: GameState,
    /// Direction committed on the last tick
    direction: Direction,
    /// Direction to commit on the next tick; last valid request wins
    pending: Direction,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic engine for tests
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let state = Self::fresh_state(&config, &mut rng);
        Self {
            config,
            rng,
            state,
            direction: Direction::Right,
            pending: Direction::Right,
        }
    }

    /// Start a new game, discarding whatever the previous one left behind.
    /// Safe to call at any time, including mid-game.
    pub fn reset(&mut self) {
        self.state = Self::fresh_state(&self.config, &mut self.rng);
        self.direction = Direction::Right;
        self.pending = Direction::Right;
    }

    fn fresh_state(config: &GameConfig, rng: &mut StdRng) -> GameState {
        let snake = Snake::new(
            Position::new(config.start_x, config.start_y),
            Direction::Right,
            config.initial_snake_length,
        );
        let food = spawn_food(rng, &snake, config.tile_count, config.food_spawn_retries);

        GameState {
            snake,
            food,
            tile_count: config.tile_count,
            score: 0,
            status: GameStatus::Running,
        }
    }

    /// Request a turn for the next tick. Reversing the direction committed on
    /// the last tick is ignored; between ticks the last valid request wins.
    pub fn set_direction(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.pending = requested;
        }
    }

    /// Advance the game by one cell. A no-op once the game has ended.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.status.is_running() {
            return TickOutcome {
                status: self.state.status,
                ate_food: false,
            };
        }

        self.direction = self.pending;
        let new_head = self.state.snake.head().stepped(self.direction);

        // Wall first, then self; hitting the tail cell counts even though it
        // would have moved away this tick.
        if !self.state.in_bounds(new_head) || self.state.snake.occupies(new_head) {
            self.state.status = GameStatus::GameOver;
            return TickOutcome {
                status: GameStatus::GameOver,
                ate_food: false,
            };
        }

        let ate_food = self.state.food == Some(new_head);
        self.state.snake.advance(new_head, ate_food);

        if ate_food {
            self.state.score += self.config.food_reward;
            self.state.food = spawn_food(
                &mut self.rng,
                &self.state.snake,
                self.config.tile_count,
                self.config.food_spawn_retries,
            );
            if self.state.food.is_none() {
                self.state.status = GameStatus::Won;
            }
        }

        TickOutcome {
            status: self.state.status,
            ate_food,
        }
    }

    /// Owned copy of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.state.snake.cells().to_vec(),
            food: self.state.food,
            score: self.state.score,
            status: self.state.status,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }
}

/// Draw a cell uniformly at random, redrawing while it lands on the snake.
/// After `retries` misses, scan for the first free cell instead; `None`
/// means the snake fills the grid.
fn spawn_food(rng: &mut StdRng, snake: &Snake, tile_count: i32, retries: u32) -> Option<Position> {
    for _ in 0..retries {
        let pos = Position::new(rng.gen_range(0..tile_count), rng.gen_range(0..tile_count));
        if !snake.occupies(pos) {
            return Some(pos);
        }
    }

    (0..tile_count)
        .flat_map(|y| (0..tile_count).map(move |x| Position::new(x, y)))
        .find(|pos| !snake.occupies(*pos))
}
