//! Owned, serializable view of a game for renderers and shims.

use serde::{Deserialize, Serialize};

use crate::game_state::Piece;
use crate::rng::PREVIEW_LEN;
use crate::types::{PieceKind, Rotation};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    /// Absolute cells, including any above the top row
    pub cells: Vec<(i8, i8)>,
}

impl ActiveSnapshot {
    pub(crate) fn fill_from(&mut self, piece: &Piece) {
        self.kind = piece.kind;
        self.rotation = piece.rotation;
        self.x = piece.x;
        self.y = piece.y;
        self.cells.clear();
        self.cells.extend(piece.cells());
    }
}

impl Default for ActiveSnapshot {
    fn default() -> Self {
        Self {
            kind: PieceKind::I,
            rotation: Rotation::North,
            x: 0,
            y: 0,
            cells: Vec::new(),
        }
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        let mut s = Self::default();
        s.fill_from(&value);
        s
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Settled cells, row-major; 0 is empty, otherwise [`PieceKind::code`]
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next_queue: [PieceKind; PREVIEW_LEN],
    pub game_over: bool,
    pub episode_id: u32,
    pub piece_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.board.clear();
        self.active = None;
        self.ghost_y = None;
        self.next_queue = [PieceKind::I; PREVIEW_LEN];
        self.game_over = false;
        self.episode_id = 0;
        self.piece_id = 0;
        self.score = 0;
        self.level = 0;
        self.lines = 0;
    }

    /// Settled cell code at (x, y), 0 outside the board
    pub fn cell(&self, x: i8, y: i8) -> u8 {
        if x < 0 || y < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return 0;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }

    /// Settled cells with the active piece drawn on top.
    ///
    /// Active cells above the top row are not visible and are skipped.
    pub fn composite_into(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend_from_slice(&self.board);

        let Some(active) = &self.active else {
            return;
        };
        let code = active.kind.code();
        for &(x, y) in &active.cells {
            if x >= 0 && y >= 0 && x < self.width as i8 && y < self.height as i8 {
                out[y as usize * self.width as usize + x as usize] = code;
            }
        }
    }

    pub fn composite(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.board.len());
        self.composite_into(&mut out);
        out
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active: None,
            ghost_y: None,
            next_queue: [PieceKind::I; PREVIEW_LEN],
            game_over: false,
            episode_id: 0,
            piece_id: 0,
            score: 0,
            level: 0,
            lines: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameConfig, GameState};

    #[test]
    fn test_composite_overlays_active_piece() {
        let board = Board::from_rows(&["...", "...", "#.."]).unwrap();
        let state =
            GameState::with_board(GameConfig::default().with_pieces(&[PieceKind::Dot]), board)
                .unwrap();

        let snap = state.snapshot();
        let dot = PieceKind::Dot.code();
        assert_eq!(snap.composite(), vec![0, dot, 0, 0, 0, 0, dot, 0, 0]);
        // Settled cells are untouched by the overlay.
        assert_eq!(snap.board, vec![0, 0, 0, 0, 0, 0, dot, 0, 0]);
    }

    #[test]
    fn test_composite_skips_cells_above_top() {
        let snap = GameSnapshot {
            width: 4,
            height: 1,
            board: vec![0; 4],
            active: Some(ActiveSnapshot::from(Piece {
                kind: PieceKind::I,
                rotation: Rotation::East,
                x: 0,
                y: -3,
            })),
            ..GameSnapshot::default()
        };
        // East I at x=0 occupies column 2, rows -3..=0.
        assert_eq!(snap.composite(), vec![0, 0, PieceKind::I.code(), 0]);
    }

    #[test]
    fn test_snapshot_into_reuses_buffers() {
        let mut state = GameState::new(5);
        let mut snap = GameSnapshot::default();
        state.snapshot_into(&mut snap);
        let first = snap.clone();

        state.drop();
        state.snapshot_into(&mut snap);
        assert_ne!(snap, first);
        assert_eq!(snap, state.snapshot());
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snap = GameState::new(1).snapshot();
        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["width"], 10);
        assert_eq!(json["gameOver"], false);
        assert!(json["nextQueue"].as_array().unwrap().len() == PREVIEW_LEN);
        assert!(json["active"]["kind"].is_string());

        let back: GameSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn test_cell_out_of_range_is_empty() {
        let snap = GameState::new(1).snapshot();
        assert_eq!(snap.cell(-1, 0), 0);
        assert_eq!(snap.cell(0, 20), 0);
    }
}
