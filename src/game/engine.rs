use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use super::{
    action::{Action, Direction},
    board::{Board, Cell, Position},
    config::GameConfig,
    error::GameError,
    snake::{Orientation, Snake},
};

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// No free cell was left for a new apple
    BoardFull,
}

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate an apple this step
    pub ate_apple: bool,
    /// Why the game ended, if it ended this step
    pub end_reason: Option<EndReason>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn running(ate_apple: bool) -> Self {
        Self {
            terminated: false,
            info: StepInfo {
                ate_apple,
                end_reason: None,
            },
        }
    }

    fn ended(ate_apple: bool, end_reason: Option<EndReason>) -> Self {
        Self {
            terminated: true,
            info: StepInfo {
                ate_apple,
                end_reason,
            },
        }
    }
}

/// One game session: the board, the snake on it, the apples and the score.
///
/// All state changes go through [`Game::update`]. The random source is only
/// used to place the snake and the apples, so a seeded `R` makes a session
/// fully reproducible.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    config: GameConfig,
    rng: R,
    board: Board,
    snake: Snake,
    apples: HashSet<Position>,
    score: u32,
    steps: u32,
    last_move: Direction,
    end_reason: Option<EndReason>,
}

impl Game<StdRng> {
    /// Start a new game seeded from the operating system
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Game<R> {
    /// Start a new game drawing all placements from `rng`
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;

        let length = config.initial_snake_length;
        let head = Board::new(&config).random_free_spot(&mut rng, (length, length), true)?;
        let (snake, last_move) = Snake::initialize(head, length, &mut rng);

        Self::assemble(config, rng, snake, last_move, &[])
    }

    /// Start a game from an exact layout.
    ///
    /// The snake is laid out at `head` in `orientation`, `apples` are placed
    /// as given and the rest of the `n_apples` are spawned at random.
    /// The snake must fit on the board and `apples` must not overlap it.
    pub fn with_layout(
        config: GameConfig,
        rng: R,
        head: Position,
        orientation: Orientation,
        apples: &[Position],
    ) -> Result<Self, GameError> {
        config.validate()?;

        let snake = Snake::with_orientation(head, config.initial_snake_length, orientation);
        Self::assemble(config, rng, snake, orientation.initial_direction(), apples)
    }

    fn assemble(
        config: GameConfig,
        rng: R,
        snake: Snake,
        last_move: Direction,
        apples: &[Position],
    ) -> Result<Self, GameError> {
        if apples.len() > config.n_apples {
            return Err(GameError::InvalidConfig(format!(
                "{} apples given but only {} allowed",
                apples.len(),
                config.n_apples
            )));
        }

        let mut board = Board::new(&config);
        for pos in snake.segments() {
            if !board.in_bounds(pos) {
                return Err(GameError::InvalidConfig(format!(
                    "snake segment {:?} is off the board",
                    pos
                )));
            }
        }
        board.set_piece(snake.head(), Cell::SnakeHead);
        for &pos in snake.body() {
            board.set_piece(pos, Cell::SnakeBody);
        }

        let mut game = Self {
            config,
            rng,
            board,
            snake,
            apples: HashSet::new(),
            score: 0,
            steps: 0,
            last_move,
            end_reason: None,
        };

        for &pos in apples {
            if !game.board.in_bounds(pos) || game.board.get_piece(pos) != Cell::Empty {
                return Err(GameError::InvalidConfig(format!(
                    "apple at {:?} is off the board or on an occupied cell",
                    pos
                )));
            }
            game.place_apple(pos);
        }
        while game.apples.len() < game.config.n_apples {
            game.spawn_apple()?;
        }

        Ok(game)
    }

    /// Resolve one tick.
    ///
    /// Once the game is over every call is a no-op.
    pub fn update(&mut self, action: impl Into<Action>) -> StepResult {
        if self.is_game_over() {
            return StepResult::ended(false, None);
        }

        let direction = action.into().resolve(self.last_move);
        self.last_move = direction;
        self.steps += 1;

        let (dx, dy) = direction.delta();
        let target = self.snake.head().moved_by(dx, dy);

        if let Some(reason) = self.check_collision(target) {
            return self.end(reason, false);
        }

        if self.apples.contains(&target) {
            self.eat_apple(target);
            if let Err(err) = self.spawn_apple() {
                debug!("could not replace eaten apple: {}", err);
                return self.end(EndReason::BoardFull, true);
            }
            return StepResult::running(true);
        }

        let vacated = self.snake.move_to(target);
        self.board.set_piece(vacated, Cell::Empty);
        if let Some(&neck) = self.snake.body().front() {
            self.board.set_piece(neck, Cell::SnakeBody);
        }
        self.board.set_piece(target, Cell::SnakeHead);

        StepResult::running(false)
    }

    fn check_collision(&self, pos: Position) -> Option<EndReason> {
        if !self.board.in_bounds(pos) {
            return Some(EndReason::Wall);
        }

        if self.board.get_piece(pos) == Cell::SnakeBody {
            return Some(EndReason::SelfCollision);
        }

        None
    }

    fn eat_apple(&mut self, pos: Position) {
        let eaten = self.apples.remove(&pos);
        assert!(eaten, "snake grew into {:?}, which holds no apple", pos);

        let previous = self.snake.grow(pos);
        self.board.set_piece(previous, Cell::SnakeBody);
        self.board.set_piece(pos, Cell::SnakeHead);
        self.score = self.score.saturating_add(self.config.score_multiplier);
        debug!(
            "apple eaten at {:?}, score {} length {}",
            pos,
            self.score,
            self.snake.len()
        );
    }

    fn spawn_apple(&mut self) -> Result<Position, GameError> {
        let pos = self.board.random_free_spot(&mut self.rng, (0, 0), true)?;
        self.place_apple(pos);
        Ok(pos)
    }

    fn place_apple(&mut self, pos: Position) {
        self.board.set_piece(pos, Cell::Apple);
        self.apples.insert(pos);
    }

    fn end(&mut self, reason: EndReason, ate_apple: bool) -> StepResult {
        self.end_reason = Some(reason);
        info!(
            "game over ({:?}) after {} steps with score {}",
            reason, self.steps, self.score
        );
        StepResult::ended(ate_apple, Some(reason))
    }
}

impl<R> Game<R> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Position {
        self.snake.head()
    }

    /// Body segments, closest to the head first
    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.body().iter().copied()
    }

    pub fn apples(&self) -> &HashSet<Position> {
        &self.apples
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ticks resolved so far, including the one that ended the game
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn last_move(&self) -> Direction {
        self.last_move
    }

    pub fn is_game_over(&self) -> bool {
        self.end_reason.is_some()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }
}
