use super::direction::Direction;
use super::food::Food;
use super::grid::{Grid, Point};
use super::snake::Snake;
use crate::consts;
use crate::highscores::{HighScoreStore, HighScores};
use crate::mode::GameMode;
use rand::Rng;
use std::collections::HashSet;

/// Parameters fixed for the lifetime of an [`Engine`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) grid: Grid,
    /// Number of food items to keep on the board
    pub(crate) food: usize,
    /// Mode to start in
    pub(crate) mode: GameMode,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            grid: Grid::DEFAULT,
            food: consts::FOOD_TARGET,
            mode: GameMode::default(),
        }
    }
}

/// What happened on a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StepOutcome {
    /// The snake moved; carries the current score
    Continuing(u32),
    /// The snake crashed, now or on an earlier tick; carries the final score
    GameOver(u32),
}

impl StepOutcome {
    pub(crate) fn score(self) -> u32 {
        match self {
            StepOutcome::Continuing(score) | StepOutcome::GameOver(score) => score,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EngineState {
    Running,
    GameOver {
        score: u32,
        /// Where the head would have gone.  In Classic mode this can be off
        /// the board.
        crash: Point,
    },
}

/// The game simulation: one snake, its food, and the score, advanced one
/// tick at a time by [`Engine::step()`].
#[derive(Clone, Debug)]
pub(crate) struct Engine<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    mode: GameMode,
    /// The direction the snake moved in on the last tick
    direction: Direction,
    snake: Snake,
    food: Food,
    score: u32,
    state: EngineState,
    high_scores: HighScores,
    store: HighScoreStore,
}

impl Engine<rand::rngs::ThreadRng> {
    pub(crate) fn new(settings: Settings, store: HighScoreStore) -> Self {
        Engine::new_with_rng(settings, store, rand::rng())
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine and start a round.  High scores are read from
    /// `store`; if that fails, every mode starts with a high score of zero.
    pub(crate) fn new_with_rng(settings: Settings, store: HighScoreStore, rng: R) -> Engine<R> {
        let high_scores = store.load().unwrap_or_else(|e| {
            log::warn!("{:#}; starting with no high scores", anyhow::Error::new(e));
            HighScores::default()
        });
        let grid = settings.grid;
        let mut engine = Engine {
            rng,
            grid,
            mode: settings.mode,
            direction: Direction::Right,
            snake: starting_snake(grid),
            food: Food::new(settings.food),
            score: 0,
            state: EngineState::Running,
            high_scores,
            store,
        };
        engine.reset();
        engine
    }

    /// Start a new round in the current mode: a fresh snake in the middle of
    /// the board heading right, no score, and new food.
    pub(crate) fn reset(&mut self) {
        self.direction = Direction::Right;
        self.snake = starting_snake(self.grid);
        self.score = 0;
        self.state = EngineState::Running;
        let occupied = self.occupied();
        self.food.seed(self.grid, &occupied, &mut self.rng);
        if self.food.is_short() {
            log::debug!(
                "Only placed {} of {} food items",
                self.food.len(),
                self.food.target()
            );
        }
    }

    /// Switch to `mode` and start a new round
    pub(crate) fn set_mode(&mut self, mode: GameMode) {
        log::debug!("Switching to {mode} mode");
        self.mode = mode;
        self.reset();
    }

    /// Advance the game by one tick, first turning toward `requested` unless
    /// that would reverse the snake onto itself.
    pub(crate) fn step(&mut self, requested: Option<Direction>) -> StepOutcome {
        if let EngineState::GameOver { score, .. } = self.state {
            return StepOutcome::GameOver(score);
        }
        if let Some(d) = requested.filter(|d| !d.is_reversal_of(self.direction)) {
            self.direction = d;
        }
        let moved = self.direction.advance(self.snake.head(), self.grid.cell_size());
        let Some(new_head) = self.mode.confine(self.grid, moved) else {
            return self.game_over(moved);
        };
        if self.snake.collides_at(new_head) {
            return self.game_over(new_head);
        }
        if self.food.remove(new_head) {
            self.score += 1;
            self.snake.advance(new_head, true);
            let occupied = self.occupied();
            if !self.food.replenish_one(self.grid, &occupied, &mut self.rng) {
                log::debug!("No room found for replacement food");
            }
        } else {
            self.snake.advance(new_head, false);
        }
        if self.food.is_short() {
            let occupied = self.occupied();
            let placed = self.food.top_up(self.grid, &occupied, &mut self.rng);
            if placed > 0 {
                log::debug!("Topped up food with {placed} item(s)");
            }
        }
        debug_assert!(
            self.snake.is_contiguous(self.grid, self.mode.wraps()),
            "snake segments should stay adjacent"
        );
        StepOutcome::Continuing(self.score)
    }

    fn game_over(&mut self, crash: Point) -> StepOutcome {
        log::info!(
            "Game over in {} mode with a score of {} and a length of {}",
            self.mode,
            self.score,
            self.snake.len()
        );
        if self.high_scores.record_if_higher(self.mode, self.score) {
            log::info!("New {} high score: {}", self.mode, self.score);
            if let Err(e) = self.store.save(&self.high_scores) {
                log::warn!("{:#}", anyhow::Error::new(e));
            }
        }
        self.state = EngineState::GameOver {
            score: self.score,
            crash,
        };
        StepOutcome::GameOver(self.score)
    }

    fn occupied(&self) -> HashSet<Point> {
        self.snake.segments().collect()
    }
}

impl<R> Engine<R> {
    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn mode(&self) -> GameMode {
        self.mode
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn head(&self) -> Point {
        self.snake.head()
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> &Food {
        &self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn state(&self) -> EngineState {
        self.state
    }

    pub(crate) fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    /// High score for the current mode
    pub(crate) fn high_score(&self) -> u32 {
        self.high_scores.get(self.mode)
    }

    pub(crate) fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }
}

fn starting_snake(grid: Grid) -> Snake {
    Snake::new(
        grid.center(),
        Direction::Right,
        consts::INITIAL_SNAKE_LENGTH,
        grid.cell_size(),
    )
}
