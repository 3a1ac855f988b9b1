//! Core game logic for grid snake
//!
//! Everything here is synchronous and timer-agnostic: the engine advances
//! one cell per `tick` call and never touches I/O, so it can be driven by
//! the terminal game loop or exercised directly in tests.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{GameState, GameStatus, Position, Snake, Snapshot};
