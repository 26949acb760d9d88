//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into the abstract
//! [`terminal_snake_types::KeyCode`] vocabulary and fans key events out to
//! registered [`terminal_snake_types::InputObserver`]s. How keys are
//! physically read is invisible to the observers.

pub mod dispatch;
pub mod map;

pub use terminal_snake_types as types;

pub use dispatch::Dispatcher;
pub use map::{drain_events, should_quit, to_key_code};
