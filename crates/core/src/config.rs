//! Game configuration - board size, RNG seed and the piece set.

use arrayvec::ArrayVec;

use crate::error::ConfigError;
use crate::types::{PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIM};

/// Seed used by [`crate::make`] and `GameState::default()`
pub const DEFAULT_SEED: u32 = 1;

/// Distinct piece kinds a queue draws from (at most one of each kind)
pub type PieceSet = ArrayVec<PieceKind, 8>;

/// Everything needed to build a [`GameState`](crate::GameState).
///
/// ```
/// use ferris_blocks_core::GameConfig;
/// use ferris_blocks_types::PieceKind;
///
/// let config = GameConfig::default()
///     .with_size(4, 4)
///     .with_pieces(&[PieceKind::Dot])
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub seed: u32,
    pieces: PieceSet,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed: DEFAULT_SEED,
            pieces: PieceKind::TETROMINOES.iter().copied().collect(),
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the piece set. Duplicates are ignored; order is kept.
    pub fn with_pieces(mut self, kinds: &[PieceKind]) -> Self {
        self.pieces.clear();
        for &kind in kinds {
            if !self.pieces.contains(&kind) {
                self.pieces.push(kind);
            }
        }
        self
    }

    pub fn pieces(&self) -> &[PieceKind] {
        &self.pieces
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.width as usize, self.height as usize)?;
        if self.pieces.is_empty() {
            return Err(ConfigError::EmptyPieceSet);
        }
        Ok(())
    }
}

pub(crate) fn validate_dimensions(width: usize, height: usize) -> Result<(), ConfigError> {
    let max = MAX_BOARD_DIM as usize;
    if width == 0 || height == 0 || width > max || height > max {
        return Err(ConfigError::dimensions(width, height));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_board() {
        let config = GameConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.pieces(), &PieceKind::TETROMINOES);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_pieces_dedups() {
        let config = GameConfig::default().with_pieces(&[PieceKind::Dot, PieceKind::I, PieceKind::Dot]);
        assert_eq!(config.pieces(), &[PieceKind::Dot, PieceKind::I]);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert_eq!(
            GameConfig::default().with_size(0, 4).validate(),
            Err(ConfigError::dimensions(0, 4))
        );
        assert!(GameConfig::default().with_size(4, 65).validate().is_err());
        assert!(GameConfig::default().with_size(64, 64).validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_piece_set() {
        assert_eq!(
            GameConfig::default().with_pieces(&[]).validate(),
            Err(ConfigError::EmptyPieceSet)
        );
    }
}
