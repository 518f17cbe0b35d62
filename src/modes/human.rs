//! Interactive play in the terminal
//!
//! The mode is the clock for the engine: a tokio interval calls
//! [`GameEngine::tick`] at the configured rate while key presses are queued
//! with [`GameEngine::set_direction`] in between.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{GameConfig, GameEngine};
use crate::highscore::{HighScoreTable, PlayerName};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::{Hud, Renderer};

pub struct HumanMode {
    engine: GameEngine,
    player: PlayerName,
    scores_path: PathBuf,
    table: HighScoreTable,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    last_rank: Option<usize>,
    paused: bool,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(
        config: GameConfig,
        player: PlayerName,
        scores_path: PathBuf,
        table: HighScoreTable,
    ) -> Self {
        Self {
            engine: GameEngine::new(config),
            player,
            scores_path,
            table,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            last_rank: None,
            paused: false,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!("{} started a game", self.player);

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        info!(
            "session over: {} games, best score {}",
            self.metrics.games_played, self.metrics.best_score
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    self.update_game();
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    let hud = Hud {
                        player: self.player.as_str(),
                        metrics: &self.metrics,
                        table: &self.table,
                        last_rank: self.last_rank,
                        paused: self.paused,
                    };
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), &hud);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.apply(action);
        }
    }

    fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => {
                if self.engine.is_running() && !self.paused {
                    self.engine.set_direction(direction);
                }
            }
            KeyAction::TogglePause => {
                if self.engine.is_running() {
                    self.paused = !self.paused;
                }
            }
            KeyAction::Restart => self.reset_game(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        if !self.engine.is_running() || self.paused {
            return;
        }

        let result = self.engine.tick();

        if result.is_game_over() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        let entry = self.engine.submission(&self.player);
        self.metrics.on_game_over(entry.score);

        info!(
            "game over for {}: score {} after {} steps ({:?})",
            entry.name,
            entry.score,
            self.engine.steps(),
            self.engine.collision()
        );

        self.last_rank = self.table.record(entry);

        if let Some(rank) = self.last_rank {
            info!("new high score at rank {}", rank);
            if let Err(e) = self.table.save(&self.scores_path) {
                error!("Error saving high scores: {:#}", anyhow::Error::new(e));
            }
        }
    }

    fn reset_game(&mut self) {
        self.engine.reset();
        self.metrics.on_game_start();
        self.last_rank = None;
        self.paused = false;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position, Snake};
    use tempfile::TempDir;

    fn mode_in(dir: &TempDir) -> HumanMode {
        HumanMode::new(
            GameConfig::default(),
            PlayerName::parse("ada").unwrap(),
            dir.path().join("highscores.json"),
            HighScoreTable::default(),
        )
    }

    fn about_to_eat_then_crash() -> GameEngine {
        // Eats in the corner, then leaves the grid on the next tick
        let snake = Snake::from_body(vec![Position::new(1, 0)], Direction::Left).unwrap();
        GameEngine::with_snake(GameConfig::default(), snake, Position::new(0, 0))
    }

    #[test]
    fn test_game_initialization() {
        let dir = TempDir::new().unwrap();
        let mode = mode_in(&dir);
        assert!(mode.engine.is_running());
        assert_eq!(mode.engine.score(), 0);
        assert!(!mode.paused);
    }

    #[test]
    fn test_turn_is_queued_for_next_tick() {
        let dir = TempDir::new().unwrap();
        let mut mode = mode_in(&dir);

        mode.apply(KeyAction::Turn(Direction::Up));
        assert_eq!(mode.engine.pending_direction(), Direction::Up);
        assert_eq!(mode.engine.direction(), Direction::Right);

        mode.update_game();
        assert_eq!(mode.engine.direction(), Direction::Up);
    }

    #[test]
    fn test_pause_stops_ticks() {
        let dir = TempDir::new().unwrap();
        let mut mode = mode_in(&dir);

        mode.apply(KeyAction::TogglePause);
        mode.update_game();
        assert_eq!(mode.engine.steps(), 0);

        mode.apply(KeyAction::TogglePause);
        mode.update_game();
        assert_eq!(mode.engine.steps(), 1);
    }

    #[test]
    fn test_game_over_records_and_saves_score() {
        let dir = TempDir::new().unwrap();
        let mut mode = mode_in(&dir);
        mode.engine = about_to_eat_then_crash();

        mode.update_game();
        assert_eq!(mode.engine.score(), 1);
        mode.update_game();
        mode.update_game();

        assert!(!mode.engine.is_running());
        assert_eq!(mode.last_rank, Some(1));
        assert_eq!(mode.metrics.games_played, 1);
        assert_eq!(mode.metrics.best_score, 1);

        let saved = HighScoreTable::load(&mode.scores_path, 10).unwrap();
        assert_eq!(saved.entries().len(), 1);
        assert_eq!(saved.entries()[0].name, "ada");
        assert_eq!(saved.entries()[0].score, 1);
    }

    #[test]
    fn test_game_reset() {
        let dir = TempDir::new().unwrap();
        let mut mode = mode_in(&dir);
        mode.engine = about_to_eat_then_crash();
        mode.update_game();
        mode.update_game();

        mode.apply(KeyAction::Restart);

        assert!(mode.engine.is_running());
        assert_eq!(mode.engine.score(), 0);
        assert_eq!(mode.last_rank, None);
    }

    #[test]
    fn test_quit() {
        let dir = TempDir::new().unwrap();
        let mut mode = mode_in(&dir);
        mode.apply(KeyAction::Quit);
        assert!(mode.should_quit);
    }
}
