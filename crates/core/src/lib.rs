//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state transitions. It has **no
//! dependencies** on clocks, terminals or the browser, making it:
//!
//! - **Deterministic**: Same seed and board produce identical games
//! - **Driven**: Nothing happens until a caller invokes an operation
//! - **Portable**: Runs natively, in tests and behind the wasm surface
//!
//! # Module Structure
//!
//! - [`board`]: Configurable grid with collision checks and row clearing
//! - [`game_state`]: The engine: active piece, queue, scoring, game over
//! - [`pieces`]: Shape tables, spawn placement and clockwise wall kicks
//! - [`rng`]: Seeded bag randomizer over the configured piece set
//! - [`scoring`]: Line clear and drop points, levels and gravity intervals
//! - [`snapshot`]: Serializable view of a game for renderers
//!
//! # Game Rules
//!
//! - **Gravity** only happens on [`GameState::tick`]; a piece that cannot fall
//!   locks, full rows clear and the next piece spawns, all in that one call
//! - **Soft drop** ([`GameState::move_down`]) moves one row and never locks
//! - **Hard drop** ([`GameState::drop`]) falls to the landing row and locks
//! - **Rotation** is clockwise with wall kicks; single-orientation kinds ignore it
//! - **Game over** happens when a new piece cannot be placed or a piece locks
//!   with a cell above the top row; after that every gameplay operation is a
//!   no-op
//!
//! # Example
//!
//! ```
//! use ferris_blocks_core::make;
//!
//! let mut game = make();
//! assert!(!game.game_over());
//!
//! game.move_right();
//! game.rotate();
//! game.drop();
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert!(game.score() > 0); // Hard drop awards points
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use ferris_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{GameConfig, PieceSet, DEFAULT_SEED};
pub use error::ConfigError;
pub use game_state::{GameState, GameStatus, Piece};
pub use pieces::{get_shape, try_rotate};
pub use rng::{PieceQueue, SimpleRng, PREVIEW_LEN};
pub use scoring::{calculate_drop_score, calculate_line_score, get_drop_interval_ms};
pub use snapshot::{ActiveSnapshot, GameSnapshot};

/// New game on the standard 10x20 board with the default seed
pub fn make() -> GameState {
    GameState::default()
}
