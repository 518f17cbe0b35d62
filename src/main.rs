use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::GameConfig;
use grid_snake::highscore::{DEFAULT_CAPACITY, HighScoreTable, PlayerName};
use grid_snake::modes::{HumanMode, ScoresMode};
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake in the terminal, with a local high-score table")]
struct Cli {
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// Player name recorded with the score
    #[arg(long)]
    name: Option<String>,

    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// High-score file
    #[arg(long, default_value = "highscores.json")]
    scores: PathBuf,

    /// Log file; the terminal itself is taken by the game
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Play,
    /// Print the high-score table
    Scores,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Earlier runs' logs are kept; each run appends
fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        open_log_file(&cli.log_file)?,
    )
    .context("Failed to initialize logger")?;

    let table = HighScoreTable::load(&cli.scores, DEFAULT_CAPACITY)
        .with_context(|| format!("Failed to load high scores from {:?}", cli.scores))?;

    match cli.mode {
        Mode::Play => {
            let name = cli.name.as_deref().context("--name is required to play")?;
            let player = PlayerName::parse(name)?;
            let config = cli.game_config()?;
            info!(
                "starting {}x{} game for {} ({} ms ticks)",
                config.grid_width, config.grid_height, player, config.tick_interval_ms
            );

            let mut human_mode = HumanMode::new(config, player, cli.scores.clone(), table);
            human_mode.run().await?;
        }
        Mode::Scores => {
            ScoresMode::new(table).run(&mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}
