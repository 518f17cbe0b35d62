//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The caller owns the clock: it calls [`GameEngine::tick`] on its own schedule and
//! feeds key presses in through [`GameEngine::set_direction`].

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::{FoodPlacement, GameConfig};
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome, TickResult};
pub use state::{CollisionKind, GameState, GameStatus, Position, Snake};
