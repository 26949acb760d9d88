//! Process-facing I/O: argument parsing and highscore persistence.
//!
//! Everything in this crate talks to the outside world (process arguments,
//! stdin/stdout, the filesystem) so the `core` crate does not have to.
//!
//! - [`cli`]: the flag-dispatch argument parser. Malformed input never
//!   raises; it prints a diagnostic and marks the session as not-to-start.
//! - [`highscore`]: the single stored integer score, keyed by a
//!   filesystem path.

pub mod cli;
pub mod highscore;

pub use terminal_snake_types as types;

pub use cli::{CliReader, ConfigError, Flow};
