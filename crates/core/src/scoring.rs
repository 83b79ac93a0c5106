//! Scoring module - line clear points, drop points, levels and gravity
//!
//! Line clears award 100 / 250 / 500 / 1000 points for one to four rows,
//! scaled by `level + 1`. Drop points and the per-level gravity table follow
//! classic guideline values.

use crate::types::{
    DROP_INTERVALS, DROP_INTERVAL_FLOOR_MS, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES,
    SOFT_DROP_POINTS,
};

/// Calculate line clear score
/// lines: number of lines cleared in one lock (values above 4 score as 4)
/// level: current level (0-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let base_score = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base_score.saturating_mul(level.saturating_add(1))
}

/// Calculate drop score
/// soft drop: +1 per cell
/// hard drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells.saturating_mul(HARD_DROP_POINTS)
    } else {
        cells.saturating_mul(SOFT_DROP_POINTS)
    }
}

/// Level management
/// Level increases every 10 lines cleared
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Get drop interval for a level (in milliseconds)
pub fn get_drop_interval_ms(level: u32) -> u32 {
    DROP_INTERVALS
        .get(level as usize)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}
