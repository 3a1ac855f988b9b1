use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cells per side of the square grid
    pub tile_count: i32,
    /// Head cell of a freshly reset snake
    pub start_x: i32,
    pub start_y: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Score awarded per food eaten
    pub food_reward: u32,
    /// Milliseconds between game ticks
    pub tick_interval_ms: u64,
    /// Random draws attempted before food placement falls back to a scan
    pub food_spawn_retries: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: 20,
            start_x: 5,
            start_y: 5,
            initial_snake_length: 1,
            food_reward: 10,
            tick_interval_ms: 100,
            food_spawn_retries: 1000,
        }
    }
}

impl GameConfig {
    /// Configuration with a custom grid size, start cell recentered with it
    pub fn new(tile_count: i32) -> Self {
        Self {
            tile_count,
            start_x: (tile_count / 4).max(1),
            start_y: (tile_count / 4).max(1),
            ..Default::default()
        }
    }

    /// Small grid for tests
    pub fn small() -> Self {
        Self::new(10)
    }
}
