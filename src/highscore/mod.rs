//! High-score persistence
//!
//! A finished game produces a `{name, score}` submission. Submissions are kept
//! in a small leaderboard that lives in a JSON file next to the player.

pub mod error;
pub mod name;
pub mod table;

pub use error::HighScoreError;
pub use name::PlayerName;
pub use table::{DEFAULT_CAPACITY, HighScoreEntry, HighScoreTable};
