//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond parsing and lookups, so they
//! can be shared by the engine, the driver, the key map and the wasm surface.
//!
//! # Board Dimensions
//!
//! The default playfield:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn column**: `width / 2 - span / 2` for a piece whose bounding box is `span` wide
//!
//! Boards of other sizes (down to 1x1) can be configured through the engine's
//! `GameConfig`; [`MAX_BOARD_DIM`] bounds both dimensions so that every
//! coordinate fits in an `i8`.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 400 | Fixed gravity interval used by the driver |
//! | `DROP_INTERVALS` | 1000..160 | Per-level intervals when acceleration is enabled |
//! | `DROP_INTERVAL_FLOOR_MS` | 120 | Interval past the end of the table |
//!
//! # Examples
//!
//! ```
//! use ferris_blocks_types::{Action, PieceKind, Rotation, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! assert_eq!(Action::from_str("moveLeft"), Some(Action::MoveLeft));
//!
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! assert_eq!(DEFAULT_BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Largest accepted width or height
pub const MAX_BOARD_DIM: u8 = 64;

/// Fixed gravity interval in milliseconds (one `tick()` every 400ms)
pub const TICK_MS: u32 = 400;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per row fallen with `move_down()`
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row fallen with `drop()`
pub const HARD_DROP_POINTS: u32 = 2;

/// Drop intervals by level (milliseconds per row)
///
/// Index 0 = Level 0, Index 8 = Level 8
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Drop interval for every level past the table
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// Line clear scoring table
///
/// Base points for clearing N lines in one lock at level 0:
/// - 1 line: 100 points
/// - 2 lines: 250 points
/// - 3 lines: 500 points
/// - 4 lines: 1000 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 100, 250, 500, 1000];

/// Piece kinds
///
/// The seven tetrominoes plus a single-cell `Dot`, which is handy on very small
/// boards:
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**, **S**, **Z**, **J**, **L**: three-wide pieces
/// - **Dot**: one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
    Dot,
}

impl PieceKind {
    /// Every kind, in code order
    pub const ALL: [PieceKind; 8] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::Dot,
    ];

    /// The standard seven tetrominoes
    pub const TETROMINOES: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use ferris_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("DOT"), Some(PieceKind::Dot));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "dot" | "." => Some(PieceKind::Dot),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::Dot => "dot",
        }
    }

    /// Nonzero grid code used in snapshots (0 is reserved for empty cells)
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
            PieceKind::Dot => 8,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        PieceKind::ALL.iter().copied().find(|k| k.code() == code)
    }
}

/// Rotation states
///
/// - **North**: Spawn orientation (0° rotation)
/// - **East**: Rotated 90° clockwise
/// - **South**: Rotated 180°
/// - **West**: Rotated 270° clockwise
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use ferris_blocks_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Index into per-orientation tables (North = 0, clockwise)
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Parse rotation from string
    ///
    /// Accepts full names or single letters (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Rotation::North),
            "east" | "e" => Some(Rotation::East),
            "south" | "s" => Some(Rotation::South),
            "west" | "w" => Some(Rotation::West),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Player actions the driver forwards to the engine
///
/// Gravity is not an action: the driver calls `tick()` on its own schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Nudge piece one cell down; never locks
    MoveDown,
    /// Rotate piece 90° clockwise, with wall kicks
    Rotate,
    /// Drop piece to its landing row and lock it
    Drop,
    /// Start a fresh game with the same configuration
    Restart,
}

impl Action {
    /// Parse action from string (camelCase or snake_case, case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use ferris_blocks_types::Action;
    ///
    /// assert_eq!(Action::from_str("moveLeft"), Some(Action::MoveLeft));
    /// assert_eq!(Action::from_str("move_right"), Some(Action::MoveRight));
    /// assert_eq!(Action::from_str("drop"), Some(Action::Drop));
    /// assert_eq!(Action::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "").as_str() {
            "moveleft" => Some(Action::MoveLeft),
            "moveright" => Some(Action::MoveRight),
            "movedown" => Some(Action::MoveDown),
            "rotate" => Some(Action::Rotate),
            "drop" => Some(Action::Drop),
            "restart" => Some(Action::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveLeft => "moveLeft",
            Action::MoveRight => "moveRight",
            Action::MoveDown => "moveDown",
            Action::Rotate => "rotate",
            Action::Drop => "drop",
            Action::Restart => "restart",
        }
    }
}

/// Engine-side event recorded after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Cells written to the board (cells above the top row are discarded)
    pub cells_locked: u32,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a piece of that kind
pub type Cell = Option<PieceKind>;
