//! Ferris Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so hosts can depend on a
//! single package: `ferris_blocks::{core, driver, input, types}`.

pub use ferris_blocks_core as core;
pub use ferris_blocks_driver as driver;
pub use ferris_blocks_input as input;
pub use ferris_blocks_types as types;

pub use ferris_blocks_core::{make, GameState};
