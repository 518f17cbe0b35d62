use super::{
    config::{FoodPlacement, GameConfig},
    direction::Direction,
    state::{CollisionKind, GameState, GameStatus, Position, Snake},
};
use crate::highscore::{HighScoreEntry, PlayerName};
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Snake moved one cell
    Continuing,
    /// Snake moved onto the food and grew
    AteFood,
    /// The game is over, this tick or an earlier one
    GameOver,
}

/// Result of a game tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResult {
    pub outcome: TickOutcome,
    /// Score after the tick
    pub score: u32,
    /// Why the game ended, if it has
    pub collision: Option<CollisionKind>,
}

impl TickResult {
    pub fn is_game_over(&self) -> bool {
        self.outcome == TickOutcome::GameOver
    }
}

/// The game engine: owns the authoritative state of one game and advances
/// it one tick at a time. Does no I/O and no timing; the caller drives it.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: StdRng,
}

impl GameEngine {
    /// Create a fresh game. Uses `config.seed` if set, entropy otherwise.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a fresh game with a deterministic food sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Start a game from an explicit snake layout and food cell
    pub fn with_snake(config: GameConfig, snake: Snake, food: Position) -> Self {
        let mut engine = Self::new(config);
        engine.state = GameState::new(
            snake,
            food,
            engine.config.grid_width,
            engine.config.grid_height,
        );
        engine
    }

    /// Replace the RNG, so the next food draws follow `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn with_rng(mut config: GameConfig, mut rng: StdRng) -> Self {
        // A grid needs at least one cell to hold the snake
        config.grid_width = config.grid_width.max(1);
        config.grid_height = config.grid_height.max(1);

        let state = Self::initial_state(&config, &mut rng);
        Self { config, state, rng }
    }

    /// Reset the game to its initial state: a one-cell snake in the middle
    /// of the grid heading right, score zero, fresh food
    pub fn reset(&mut self) {
        self.state = Self::initial_state(&self.config, &mut self.rng);
        debug!(
            "new game on {}x{} grid, food at {:?}",
            self.config.grid_width, self.config.grid_height, self.state.food
        );
    }

    fn initial_state(config: &GameConfig, rng: &mut StdRng) -> GameState {
        let center_x = (config.grid_width / 2) as i32;
        let center_y = (config.grid_height / 2) as i32;

        let snake = Snake::new(Position::new(center_x, center_y), Direction::Right, 1);
        let food = Self::spawn_food(config, rng, &snake);

        GameState::new(snake, food, config.grid_width, config.grid_height)
    }

    /// Queue a direction for the next tick. A reversal of the committed
    /// direction is ignored. Returns whether the request was taken.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.state.snake.direction.is_opposite(direction) {
            return false;
        }
        self.state.pending_direction = direction;
        true
    }

    /// Advance the game by one cell
    pub fn tick(&mut self) -> TickResult {
        if self.state.status == GameStatus::GameOver {
            return self.result(TickOutcome::GameOver);
        }

        self.state.snake.direction = self.state.pending_direction;
        let new_head = self
            .state
            .snake
            .head()
            .moved_in_direction(self.state.snake.direction);

        self.state.steps += 1;

        if let Some(collision) = self.check_collision(new_head) {
            self.state.status = GameStatus::GameOver;
            self.state.collision = Some(collision);
            debug!(
                "game over after {} steps: {:?} at {:?}, score {}",
                self.state.steps, collision, new_head, self.state.score
            );
            return self.result(TickOutcome::GameOver);
        }

        let ate_food = new_head == self.state.food;
        self.state.snake.advance(new_head, ate_food);

        if ate_food {
            self.state.score += 1;
            self.state.food = Self::spawn_food(&self.config, &mut self.rng, &self.state.snake);
            return self.result(TickOutcome::AteFood);
        }

        self.result(TickOutcome::Continuing)
    }

    fn result(&self, outcome: TickOutcome) -> TickResult {
        TickResult {
            outcome,
            score: self.state.score,
            collision: self.state.collision,
        }
    }

    /// Walls first, then the body as it stood before this move. The tail
    /// cell counts even though it would be vacated.
    fn check_collision(&self, pos: Position) -> Option<CollisionKind> {
        if !self.state.is_in_bounds(pos) {
            return Some(CollisionKind::Wall);
        }

        if self.state.is_occupied_by_snake(pos) {
            return Some(CollisionKind::SelfCollision);
        }

        None
    }

    fn spawn_food(config: &GameConfig, rng: &mut StdRng, snake: &Snake) -> Position {
        if config.food_placement == FoodPlacement::AvoidSnake {
            let free: Vec<Position> = (0..config.grid_height as i32)
                .flat_map(|y| (0..config.grid_width as i32).map(move |x| Position::new(x, y)))
                .filter(|pos| !snake.occupies(*pos))
                .collect();

            if !free.is_empty() {
                return free[rng.gen_range(0..free.len())];
            }
        }

        let x = rng.gen_range(0..config.grid_width) as i32;
        let y = rng.gen_range(0..config.grid_height) as i32;
        Position::new(x, y)
    }

    /// The `{name, score}` pair to hand to the high-score table
    pub fn submission(&self, name: &PlayerName) -> HighScoreEntry {
        HighScoreEntry::new(name.as_str(), self.state.score)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.state.snake
    }

    pub fn food(&self) -> Position {
        self.state.food
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn steps(&self) -> u32 {
        self.state.steps
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn direction(&self) -> Direction {
        self.state.snake.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.state.pending_direction
    }

    pub fn collision(&self) -> Option<CollisionKind> {
        self.state.collision
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        self.state.is_in_bounds(pos)
    }
}
