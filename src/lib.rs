//! Grid Snake - the classic Snake game for the terminal
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - A JSON-backed high-score table (highscore module)
//! - TUI rendering and keyboard mapping (render and input modules)
//! - Execution modes for interactive play and score listing (modes module)

pub mod game;
pub mod highscore;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
