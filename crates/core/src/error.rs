//! Construction errors.
//!
//! Gameplay itself never fails: illegal moves are no-ops and topping out is a
//! normal end state. Only building a game from a malformed configuration is an
//! error.

use thiserror::Error;

use crate::types::MAX_BOARD_DIM;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid board dimensions {width}x{height}: each side must be between 1 and {max}")]
    InvalidDimensions { width: usize, height: usize, max: u8 },

    #[error("piece set is empty")]
    EmptyPieceSet,

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown cell marker {marker:?} at row {row}, column {col}")]
    UnknownCell { marker: char, row: usize, col: usize },
}

impl ConfigError {
    pub(crate) fn dimensions(width: usize, height: usize) -> Self {
        ConfigError::InvalidDimensions {
            width,
            height,
            max: MAX_BOARD_DIM,
        }
    }
}
