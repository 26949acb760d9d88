//! Session lifecycle state.
//!
//! `GameState` is the small mutable record the session loop and the
//! simulation share: the score, the move interval, the one-way finished
//! flag and the per-tick should-move flag. Every operation is total; none
//! of them can fail.

use terminal_snake_types::DEFAULT_SPEED_SECS;

/// Score, timing and lifecycle flags for one game session.
///
/// The timer sets `should_move` once per elapsed move interval; whoever
/// consumes the flag is responsible for clearing it again. The state never
/// clears it on its own.
#[derive(Debug, Clone)]
pub struct GameState {
    score: u32,
    speed_seconds: f32,
    finished: bool,
    should_move: bool,
}

impl GameState {
    /// Create a fresh state with the default move interval.
    pub fn new() -> Self {
        Self {
            score: 0,
            speed_seconds: DEFAULT_SPEED_SECS,
            finished: false,
            should_move: false,
        }
    }

    /// Seconds between two snake moves.
    pub fn speed_seconds(&self) -> f32 {
        self.speed_seconds
    }

    /// Overwrite the move interval. Meant to be called once, before the
    /// session starts, from the parsed configuration.
    pub fn set_speed_seconds(&mut self, seconds: f32) {
        self.speed_seconds = seconds;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add exactly one point. The score never decreases.
    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// One-way transition into the finished state. Calling it again is a
    /// no-op observable only as "still finished".
    pub fn finish_game(&mut self) {
        self.finished = true;
    }

    pub fn should_move(&self) -> bool {
        self.should_move
    }

    pub fn set_should_move(&mut self, should: bool) {
        self.should_move = should;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
