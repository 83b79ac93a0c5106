//! Pieces module - shape tables, spawn placement and wall kicks
//!
//! Shapes are static offset tables indexed by rotation. Offsets are `(dx, dy)`
//! from the piece origin, with rows growing downward. Tetromino tables follow
//! the Super Rotation System; kick tables are the SRS clockwise tables with the
//! y axis flipped to match the board.
//! Reference: https://tetris.wiki/SRS

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - mino offsets from piece origin
pub type PieceShape = &'static [MinoOffset];

/// Largest number of minos in any shape
pub const MAX_MINOS: usize = 4;

static I_SHAPES: [[MinoOffset; 4]; 4] = [
    // N: horizontal, centered on row 1
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    // E: vertical, right-aligned
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    // S: horizontal, centered on row 2
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    // W: vertical, left-aligned
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

static O_SHAPE: [MinoOffset; 4] = [(1, 0), (2, 0), (1, 1), (2, 1)];

static T_SHAPES: [[MinoOffset; 4]; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

static S_SHAPES: [[MinoOffset; 4]; 4] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

static Z_SHAPES: [[MinoOffset; 4]; 4] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

static J_SHAPES: [[MinoOffset; 4]; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

static L_SHAPES: [[MinoOffset; 4]; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

static DOT_SHAPE: [MinoOffset; 1] = [(0, 0)];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let r = rotation.index();
    match kind {
        PieceKind::I => &I_SHAPES[r],
        PieceKind::O => &O_SHAPE,
        PieceKind::T => &T_SHAPES[r],
        PieceKind::S => &S_SHAPES[r],
        PieceKind::Z => &Z_SHAPES[r],
        PieceKind::J => &J_SHAPES[r],
        PieceKind::L => &L_SHAPES[r],
        PieceKind::Dot => &DOT_SHAPE,
    }
}

/// Number of distinct orientations a kind cycles through
pub fn orientation_count(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::O | PieceKind::Dot => 1,
        _ => 4,
    }
}

/// Width of the kind's bounding box
pub fn span(kind: PieceKind) -> i8 {
    match kind {
        PieceKind::I | PieceKind::O => 4,
        PieceKind::Dot => 1,
        _ => 3,
    }
}

/// Spawn origin for a kind on a board of the given width.
///
/// The column centers the bounding box (`width / 2 - span / 2`) and the row
/// puts the topmost mino of the North shape on row 0.
pub fn spawn_position(kind: PieceKind, board_width: u8) -> (i8, i8) {
    let x = (board_width / 2) as i8 - span(kind) / 2;
    let top = get_shape(kind, Rotation::North)
        .iter()
        .map(|&(_, dy)| dy)
        .min()
        .unwrap_or(0);
    (x, -top)
}

/// Clockwise kick offsets, tried in order; the first entry is always (0, 0)
pub type KickRow = [MinoOffset; 5];

/// JLSTZ kicks, indexed by the rotation being left
static JLSTZ_KICKS: [KickRow; 4] = [
    // N->E
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // E->S
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // S->W
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // W->N
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];

/// I kicks, indexed by the rotation being left
static I_KICKS: [KickRow; 4] = [
    // N->E
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // E->S
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // S->W
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // W->N
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
];

static NO_KICKS: [MinoOffset; 1] = [(0, 0)];

/// Kick offsets for a clockwise rotation out of `from`
pub fn kick_offsets(kind: PieceKind, from: Rotation) -> &'static [MinoOffset] {
    match kind {
        PieceKind::I => &I_KICKS[from.index()],
        PieceKind::O | PieceKind::Dot => &NO_KICKS,
        _ => &JLSTZ_KICKS[from.index()],
    }
}

/// Try to rotate a piece clockwise with wall kicks.
///
/// `fits(x, y)` reports whether a single cell may be occupied. Returns the new
/// rotation and the kick that was applied, or `None` when the kind has a single
/// orientation or every kick collides.
pub fn try_rotate(
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
    fits: impl Fn(i8, i8) -> bool,
) -> Option<(Rotation, MinoOffset)> {
    if orientation_count(kind) < 2 {
        return None;
    }

    let new_rotation = rotation.rotate_cw();
    let new_shape = get_shape(kind, new_rotation);

    for &(dx, dy) in kick_offsets(kind, rotation) {
        let nx = x + dx;
        let ny = y + dy;
        if new_shape.iter().all(|&(mx, my)| fits(nx + mx, ny + my)) {
            return Some((new_rotation, (dx, dy)));
        }
    }

    None
}
