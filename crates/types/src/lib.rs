//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (game logic, rendering, argument parsing).
//!
//! # Board Dimensions
//!
//! The playfield is a rectangle of character cells surrounded by a one-cell
//! border drawn by the view layer:
//!
//! - **Default size**: 40x20 cells
//! - **Minimum size**: 1x1 (enforced by the argument parser)
//!
//! # Game Timing
//!
//! The simulation advances one step per elapsed move interval:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `EASY_SPEED_SECS` | 0.2 | Move interval on easy difficulty |
//! | `MEDIUM_SPEED_SECS` | 0.15 | Move interval on medium difficulty |
//! | `HARD_SPEED_SECS` | 0.1 | Move interval on hard difficulty |
//! | `DEFAULT_SPEED_SECS` | 0.15 | Move interval when no flag is given |
//! | `INPUT_POLL_MS` | 5 | Input poll quantum inside one frame |

/// Character-cell coordinates as `(x, y)`, column first.
pub type Coords = (u16, u16);

/// Move interval presets (seconds between snake moves).
pub const EASY_SPEED_SECS: f32 = 0.2;
pub const MEDIUM_SPEED_SECS: f32 = 0.15;
pub const HARD_SPEED_SECS: f32 = 0.1;

/// Move interval used when no `-d` or `-s` flag overrides it.
pub const DEFAULT_SPEED_SECS: f32 = MEDIUM_SPEED_SECS;

/// Input poll quantum in milliseconds. The session loop never blocks on
/// input for longer than this between timer checks.
pub const INPUT_POLL_MS: u64 = 5;

/// Initial snake length in body segments.
pub const INITIAL_SNAKE_LEN: u16 = 4;

/// Playfield dimensions in cells.
///
/// Both components are at least 1 once produced by the argument parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    pub width: u32,
    pub height: u32,
}

impl BoardSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of playfield cells.
    pub fn cell_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Playfield size used when no `-b` flag overrides it.
pub const DEFAULT_BOARD_SIZE: BoardSize = BoardSize::new(40, 20);

/// Difficulty presets selectable with the `-d` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty token. Accepts exactly `e`, `easy`, `m`,
    /// `medium`, `h` and `hard` (lowercase only).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "e" | "easy" => Some(Difficulty::Easy),
            "m" | "medium" => Some(Difficulty::Medium),
            "h" | "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Move interval for this difficulty.
    pub fn speed_seconds(&self) -> f32 {
        match self {
            Difficulty::Easy => EASY_SPEED_SECS,
            Difficulty::Medium => MEDIUM_SPEED_SECS,
            Difficulty::Hard => HARD_SPEED_SECS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Abstract key events delivered to input observers.
///
/// `Enter` is the keypad enter key; `Return` is a literal carriage-return
/// character. Keys outside this vocabulary arrive as `Null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Null,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Return,
}

/// Observer notified of every key event.
///
/// The default implementation ignores all codes, so observers only override
/// what they care about and are unaffected by unrelated keys.
pub trait InputObserver {
    fn on_keypress(&mut self, code: KeyCode) {
        let _ = code;
    }
}

/// Cardinal movement direction of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in cell coordinates (y grows downwards).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Map a key event to a direction, if it is one of the arrow codes.
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("e"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("m"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("h"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));

        // Only the lowercase spellings are accepted.
        assert_eq!(Difficulty::from_str("E"), None);
        assert_eq!(Difficulty::from_str("Easy"), None);
        assert_eq!(Difficulty::from_str("HARD"), None);
        assert_eq!(Difficulty::from_str(""), None);
        assert_eq!(Difficulty::from_str("x"), None);
    }

    #[test]
    fn test_difficulty_speeds() {
        assert_eq!(Difficulty::Easy.speed_seconds(), 0.2);
        assert_eq!(Difficulty::Medium.speed_seconds(), 0.15);
        assert_eq!(Difficulty::Hard.speed_seconds(), 0.1);
    }

    #[test]
    fn test_direction_opposites() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite().opposite(), Direction::Right);
    }

    #[test]
    fn test_direction_from_key() {
        assert_eq!(Direction::from_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(Direction::from_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(Direction::from_key(KeyCode::Enter), None);
        assert_eq!(Direction::from_key(KeyCode::Null), None);
    }

    #[test]
    fn test_default_observer_ignores_all_codes() {
        struct Passive;
        impl InputObserver for Passive {}

        let mut p = Passive;
        for code in [
            KeyCode::Null,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Enter,
            KeyCode::Return,
        ] {
            p.on_keypress(code);
        }
    }
}
