//! Terminal input (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Action`] values that the
//! driver forwards to the engine. Quit is kept separate from the action set
//! since it ends the host loop rather than changing the game.

pub mod map;

pub use ferris_blocks_types as types;

pub use map::{handle_key_event, should_quit};
