//! One playfield simulation: state, snake and food.
//!
//! `SnakeGame` consumes one discrete move per call to [`SnakeGame::step`];
//! the session loop decides *when* a move is due (via
//! `GameState::should_move`). Direction keys arrive through the
//! [`InputObserver`] implementation and are buffered until the next step,
//! so at most one direction change applies per move.

use terminal_snake_types::{
    BoardSize, Coords, Direction, InputObserver, KeyCode, INITIAL_SNAKE_LEN,
};

use crate::rng::SimpleRng;
use crate::snake::{Snake, StepOutcome};
use crate::state::GameState;

/// What a single simulation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The snake advanced one cell.
    Moved,
    /// The snake advanced onto food and grew; the score went up by one.
    Ate,
    /// The snake hit a wall or itself; the game is now finished.
    Crashed,
    /// The board is completely filled; the game is now finished.
    Won,
    /// The game was already finished; nothing happened.
    Finished,
}

/// A complete snake session on one playfield.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    state: GameState,
    snake: Snake,
    food: Option<Coords>,
    size: BoardSize,
    rng: SimpleRng,
    pending_direction: Option<Direction>,
    won: bool,
}

impl SnakeGame {
    /// Set up a session: snake spawned at the center heading right, first
    /// food placed, score at zero.
    pub fn new(size: BoardSize, speed_seconds: f32, seed: u32) -> Self {
        let mut state = GameState::new();
        state.set_speed_seconds(speed_seconds);

        let head = ((size.width as u16) / 2, (size.height as u16) / 2);
        // The initial body extends left of the head; clamp the length so
        // every segment is on the board even for tiny playfields.
        let len = INITIAL_SNAKE_LEN.min(head.0 + 1);
        let snake = Snake::new(head, len, Direction::Right);

        let mut game = Self {
            state,
            snake,
            food: None,
            size,
            rng: SimpleRng::new(seed),
            pending_direction: None,
            won: false,
        };
        game.food = game.spawn_food();
        if game.food.is_none() {
            // A board the initial snake already fills is an immediate win.
            game.won = true;
            game.state.finish_game();
        }
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Coords> {
        self.food
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// True when the session ended by filling the board rather than by a
    /// collision.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Advance the simulation by one discrete move.
    pub fn step(&mut self) -> StepResult {
        if self.state.is_finished() {
            return StepResult::Finished;
        }

        if let Some(dir) = self.pending_direction.take() {
            self.snake.set_direction(dir);
        }

        match self.snake.advance(self.size) {
            StepOutcome::Collided => {
                self.state.finish_game();
                StepResult::Crashed
            }
            StepOutcome::Moved { new_head, .. } => {
                if Some(new_head) == self.food {
                    self.state.increment_score();
                    self.snake.grow();
                    self.food = self.spawn_food();
                    if self.food.is_none() {
                        self.won = true;
                        self.state.finish_game();
                        return StepResult::Won;
                    }
                    StepResult::Ate
                } else {
                    StepResult::Moved
                }
            }
        }
    }

    /// Pick a uniformly random free cell, or `None` when the snake covers
    /// the whole board.
    fn spawn_food(&mut self) -> Option<Coords> {
        let free = self.size.cell_count() as usize - self.snake.len();
        if free == 0 {
            return None;
        }
        let target = self.rng.next_range(free as u32) as usize;

        let mut seen = 0;
        for y in 0..self.size.height as u16 {
            for x in 0..self.size.width as u16 {
                if self.snake.occupies((x, y)) {
                    continue;
                }
                if seen == target {
                    return Some((x, y));
                }
                seen += 1;
            }
        }
        None
    }
}

impl InputObserver for SnakeGame {
    /// Buffer direction keys for the next step; ignore everything else.
    fn on_keypress(&mut self, code: KeyCode) {
        if self.state.is_finished() {
            return;
        }
        if let Some(dir) = Direction::from_key(code) {
            self.pending_direction = Some(dir);
        }
    }
}
