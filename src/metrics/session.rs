use std::time::{Duration, Instant};

/// Statistics for one run of the program
pub struct SessionMetrics {
    pub start_time: Instant,
    /// Time spent in the current game; frozen once it ends
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub games_played: u32,
    in_game: bool,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
            in_game: true,
        }
    }

    pub fn update(&mut self) {
        if self.in_game {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.in_game = true;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.in_game = false;
        self.games_played += 1;
        self.best_score = self.best_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
