//! Terminal Snake (workspace facade crate).
//!
//! This package keeps the `terminal_snake::{core,input,io,term,types}`
//! public API stable while the implementation lives in dedicated crates
//! under `crates/`.

pub use terminal_snake_core as core;
pub use terminal_snake_input as input;
pub use terminal_snake_io as io;
pub use terminal_snake_term as term;
pub use terminal_snake_types as types;
