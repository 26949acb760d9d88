//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget/layout frameworks and instead exposes a cursor-addressed,
//! bounds-checked surface that batches writes and flushes them explicitly.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Make every cursor movement provably inside the character grid
//! - Allow rendering into an in-memory writer for tests

pub mod game_view;
pub mod surface;

pub use terminal_snake_core as core;
pub use terminal_snake_types as types;

pub use game_view::GameView;
pub use surface::{Surface, SurfaceError};
