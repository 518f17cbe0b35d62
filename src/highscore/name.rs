use std::fmt;

use super::HighScoreError;

/// Longest name accepted, in characters
pub const MAX_NAME_LEN: usize = 24;

/// A validated player name: trimmed, non-empty, at most [`MAX_NAME_LEN`] chars
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn parse(raw: &str) -> Result<Self, HighScoreError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(HighScoreError::InvalidName(
                "name must not be empty".to_string(),
            ));
        }

        let len = trimmed.chars().count();
        if len > MAX_NAME_LEN {
            return Err(HighScoreError::InvalidName(format!(
                "name is {} characters long, the limit is {}",
                len, MAX_NAME_LEN
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
