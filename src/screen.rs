//! Plain text terminal output for the runner.
//!
//! Draws the snapshot as one character per cell with a few status lines. The
//! whole frame is rewritten on every draw.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::Print,
    terminal::{self, ClearType},
    QueueableCommand,
};

use ferris_blocks::core::GameSnapshot;

/// Glyph per grid code (0 = empty)
const GLYPHS: [char; 9] = ['.', 'I', 'O', 'T', 'S', 'Z', 'J', 'L', '#'];

fn glyph(code: u8) -> char {
    GLYPHS.get(code as usize).copied().unwrap_or('?')
}

/// Text lines for a snapshot: the board with the active piece, then status.
pub fn render_lines(snap: &GameSnapshot, grid: &mut Vec<u8>, out: &mut Vec<String>) {
    out.clear();
    snap.composite_into(grid);

    let width = snap.width as usize;
    if width > 0 {
        for row in grid.chunks(width) {
            let mut line = String::with_capacity(width + 2);
            line.push('|');
            line.extend(row.iter().map(|&c| glyph(c)));
            line.push('|');
            out.push(line);
        }
    }
    out.push(format!("+{}+", "-".repeat(width)));

    out.push(format!("score {}  lines {}  level {}", snap.score, snap.lines, snap.level));
    let next: Vec<&str> = snap.next_queue.iter().map(|k| k.as_str()).collect();
    out.push(format!("next  {}", next.join(" ")));
    if snap.game_over {
        out.push("GAME OVER  r: restart  q: quit".to_string());
    } else {
        out.push("arrows: move  up: drop  space: rotate  q: quit".to_string());
    }
}

pub struct Screen {
    buf: Vec<u8>,
    grid: Vec<u8>,
    lines: Vec<String>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4096),
            grid: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        render_lines(snap, &mut self.grid, &mut self.lines);

        self.buf.clear();
        self.buf.queue(terminal::Clear(ClearType::All))?;
        for (y, line) in self.lines.iter().enumerate() {
            self.buf.queue(cursor::MoveTo(0, y as u16))?;
            self.buf.queue(Print(line))?;
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.buf)?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferris_blocks::core::{Board, GameConfig, GameState};
    use ferris_blocks::types::PieceKind;

    #[test]
    fn test_render_lines_draws_board_and_active_piece() {
        let board = Board::from_rows(&["...", "...", "#.."]).unwrap();
        let game = GameState::with_board(GameConfig::default().with_pieces(&[PieceKind::Dot]), board)
            .unwrap();

        let mut grid = Vec::new();
        let mut lines = Vec::new();
        render_lines(&game.snapshot(), &mut grid, &mut lines);

        assert_eq!(&lines[..4], &["|.#.|", "|...|", "|#..|", "+---+"]);
        assert!(lines[4].starts_with("score 0"));
        assert_eq!(lines[5], "next  dot dot dot dot dot");
    }

    #[test]
    fn test_render_lines_marks_game_over() {
        let board = Board::from_rows(&[".#."]).unwrap();
        let game = GameState::with_board(GameConfig::default().with_pieces(&[PieceKind::Dot]), board)
            .unwrap();
        assert!(game.game_over());

        let mut lines = Vec::new();
        render_lines(&game.snapshot(), &mut Vec::new(), &mut lines);
        assert!(lines.last().unwrap().starts_with("GAME OVER"));
    }
}
