//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, terminal I/O, or the
//! filesystem, making it:
//!
//! - **Deterministic**: Same seed produces identical food sequences
//! - **Testable**: Unit tests cover every rule without a terminal
//! - **Portable**: Can run headless (e.g. for benchmarks)
//!
//! # Module Structure
//!
//! - [`state`]: session lifecycle state (score, move interval, finished and
//!   should-move flags)
//! - [`snake`]: the snake body, direction handling and collision rules
//! - [`game`]: one playfield simulation tying state, snake and food together
//! - [`rng`]: small deterministic RNG for food placement

pub mod game;
pub mod rng;
pub mod snake;
pub mod state;

pub use game::{SnakeGame, StepResult};
pub use rng::SimpleRng;
pub use snake::{Snake, StepOutcome};
pub use state::GameState;
