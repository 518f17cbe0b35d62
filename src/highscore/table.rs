use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

use super::HighScoreError;

/// Number of entries kept by default
pub const DEFAULT_CAPACITY: usize = 10;

/// One leaderboard line, stored as `{"name": ..., "score": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
}

impl HighScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Leaderboard sorted by descending score. Ties keep arrival order, so an
/// older entry stays ahead of a newer one with the same score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
    capacity: usize,
}

impl Default for HighScoreTable {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HighScoreTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Load a table from a JSON array file. A missing file is an empty table.
    pub fn load(path: &Path, capacity: usize) -> Result<Self, HighScoreError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::new(capacity)),
            Err(source) => {
                return Err(HighScoreError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut entries: Vec<HighScoreEntry> =
            serde_json::from_str(&json).map_err(|source| HighScoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        // Files written by hand or by older builds may be unsorted
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(capacity);

        Ok(Self { entries, capacity })
    }

    /// Write the table as pretty JSON, creating parent directories if needed
    pub fn save(&self, path: &Path) -> Result<(), HighScoreError> {
        let io_err = |source| HighScoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, json).map_err(io_err)?;

        Ok(())
    }

    /// Would `score` make it onto the table?
    pub fn qualifies(&self, score: u32) -> bool {
        if self.capacity == 0 {
            return false;
        }
        self.entries.len() < self.capacity
            || self.entries.last().is_some_and(|last| score > last.score)
    }

    /// Insert an entry. Returns its 1-based rank, or `None` if it did not
    /// make the table.
    pub fn record(&mut self, entry: HighScoreEntry) -> Option<usize> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.score < entry.score)
            .unwrap_or(self.entries.len());

        if pos >= self.capacity {
            return None;
        }

        self.entries.insert(pos, entry);
        self.entries.truncate(self.capacity);
        Some(pos + 1)
    }

    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
