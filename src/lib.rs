//! Grid Snake - the classic snake game in the terminal
//!
//! This library provides:
//! - Core game logic (game module): movement, collisions, food, score
//! - TUI rendering (render module)
//! - Keyboard input mapping (input module)
//! - Session metrics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
