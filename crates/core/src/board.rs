//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! kind of piece that settled there. Storage is a flat row-major vector that is
//! allocated once at construction; dimensions never change afterwards.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom, row 0 at the top).

use crate::config::validate_dimensions;
use crate::error::ConfigError;
use crate::types::{Cell, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        validate_dimensions(width as usize, height as usize)?;
        Ok(Self::empty(width, height))
    }

    /// Empty 10x20 board
    pub fn standard() -> Self {
        Self::empty(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }

    fn empty(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Build a board from text rows, top row first.
    ///
    /// `.` or a space is an empty cell, a piece letter (`IOTSZJL`, any case) is a
    /// cell of that kind and `#` is a [`PieceKind::Dot`] cell.
    ///
    /// ```
    /// use ferris_blocks_core::Board;
    ///
    /// let board = Board::from_rows(&["....", "###."]).unwrap();
    /// assert_eq!(board.width(), 4);
    /// assert_eq!(board.height(), 2);
    /// assert!(board.is_occupied(0, 1));
    /// assert!(!board.is_occupied(3, 1));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, ConfigError> {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        validate_dimensions(width, rows.len())?;

        let mut board = Self::empty(width as u8, rows.len() as u8);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(ConfigError::RaggedRow {
                    row: y,
                    found,
                    expected: width,
                });
            }
            for (x, marker) in row.chars().enumerate() {
                let cell = match marker {
                    '.' | ' ' => None,
                    '#' => Some(PieceKind::Dot),
                    other => match PieceKind::from_str(&other.to_string()) {
                        Some(kind) => Some(kind),
                        None => {
                            return Err(ConfigError::UnknownCell {
                                marker: other,
                                row: y,
                                col: x,
                            })
                        }
                    },
                };
                board.cells[y * width + x] = cell;
            }
        }
        Ok(board)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Collision rule for a single mino of a piece placement.
    ///
    /// The mino must be inside the side walls and above the floor, and must not
    /// overlap a settled cell. Rows above the top (y < 0) are allowed.
    pub fn fits(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return false;
        }
        y < 0 || self.is_valid(x, y)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Number of completely filled rows
    pub fn full_row_count(&self) -> usize {
        (0..self.height as usize)
            .filter(|&y| self.is_row_full(y))
            .count()
    }

    /// Clear all full rows in a single pass and return how many were cleared.
    ///
    /// Rows are classified against the pre-clear board, then the surviving rows
    /// are compacted downward with a two-pointer scan and the freed rows at the
    /// top are emptied. No allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0usize;
        let mut write_y = self.height as usize;

        // Scan from bottom to top
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Write a piece's absolute cells onto the board.
    ///
    /// Cells above the top row are skipped. Returns the number of cells written,
    /// or `None` (writing nothing) if any cell is outside the side walls, below
    /// the floor or on an occupied cell.
    pub fn lock_piece(&mut self, cells: &[(i8, i8)], kind: PieceKind) -> Option<u32> {
        if !cells.iter().all(|&(x, y)| self.fits(x, y)) {
            return None;
        }

        let mut written = 0u32;
        for &(x, y) in cells {
            if self.set(x, y, Some(kind)) {
                written += 1;
            }
        }
        Some(written)
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Cells of row `y`
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major grid codes (0 = empty, otherwise [`PieceKind::code`])
    pub fn write_u8_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|c| c.map_or(0, |k| k.code())));
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::standard();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new(4, 3).unwrap();

        board.set(0, 0, Some(PieceKind::I));
        board.set(3, 2, Some(PieceKind::T));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[2 * 4 + 3], Some(PieceKind::T));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_fits_allows_rows_above_top() {
        let board = Board::new(4, 4).unwrap();
        assert!(board.fits(0, -3));
        assert!(!board.fits(-1, -3));
        assert!(!board.fits(4, -1));
        assert!(!board.fits(0, 4));
    }

    #[test]
    fn test_lock_piece_skips_cells_above_top() {
        let mut board = Board::new(4, 4).unwrap();
        let written = board.lock_piece(&[(1, -1), (1, 0)], PieceKind::Dot);
        assert_eq!(written, Some(1));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_clear_full_rows_compacts_once() {
        let mut board = Board::from_rows(&[
            "#...",
            "####",
            ".#..",
            "####",
        ])
        .unwrap();

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(
            board,
            Board::from_rows(&["....", "....", "#...", ".#.."]).unwrap()
        );
        assert_eq!(board.full_row_count(), 0);
    }

    #[test]
    fn test_write_u8_grid() {
        let board = Board::from_rows(&["I.", ".#"]).unwrap();
        let mut grid = Vec::new();
        board.write_u8_grid(&mut grid);
        assert_eq!(grid, vec![1, 0, 0, 8]);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        assert_eq!(
            Board::from_rows(&["...", ".."]),
            Err(ConfigError::RaggedRow {
                row: 1,
                found: 2,
                expected: 3
            })
        );
        assert!(matches!(
            Board::from_rows(&["x"]),
            Err(ConfigError::UnknownCell { marker: 'x', .. })
        ));
        assert!(Board::from_rows(&[]).is_err());
    }
}
