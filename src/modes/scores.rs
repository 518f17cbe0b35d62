use std::io::Write;

use anyhow::{Context, Result};

use crate::highscore::HighScoreTable;

/// Prints the stored leaderboard
pub struct ScoresMode {
    table: HighScoreTable,
}

impl ScoresMode {
    pub fn new(table: HighScoreTable) -> Self {
        Self { table }
    }

    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        if self.table.is_empty() {
            writeln!(out, "No high scores yet.").context("Failed to write scores")?;
            return Ok(());
        }

        writeln!(out, "{:>4}  {:<24}  {:>5}", "Rank", "Name", "Score")
            .context("Failed to write scores")?;
        for (i, entry) in self.table.entries().iter().enumerate() {
            writeln!(out, "{:>4}  {:<24}  {:>5}", i + 1, entry.name, entry.score)
                .context("Failed to write scores")?;
        }

        Ok(())
    }
}
