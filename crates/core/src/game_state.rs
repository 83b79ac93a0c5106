//! Game state module - the engine
//!
//! This module ties together all core components: board, pieces, queue and
//! scoring. Each public operation applies exactly one transition and returns
//! whether anything changed. Nothing here reads a clock: gravity only happens
//! when the caller invokes [`GameState::tick`].

use arrayvec::ArrayVec;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::pieces::{get_shape, spawn_position, try_rotate, PieceShape, MAX_MINOS};
use crate::rng::{PieceQueue, PREVIEW_LEN};
use crate::scoring::{calculate_drop_score, calculate_level, calculate_line_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::Board;

/// Absolute board cells covered by a piece
pub type PieceCells = ArrayVec<(i8, i8), MAX_MINOS>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn position of a board `board_width` wide
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let (x, y) = spawn_position(kind, board_width);
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute coordinates of every mino
    pub fn cells(&self) -> PieceCells {
        self.shape()
            .iter()
            .map(|&(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Same piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Check the placement against the collision rule
    pub fn fits(&self, board: &Board) -> bool {
        self.shape()
            .iter()
            .all(|&(dx, dy)| board.fits(self.x + dx, self.y + dy))
    }
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    /// Terminal: every gameplay operation is a no-op
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    next_queue: [PieceKind; PREVIEW_LEN],
    piece_queue: PieceQueue,
    status: GameStatus,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
    pieces_locked: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
}

impl GameState {
    /// Standard 10x20 game with the seven tetrominoes
    pub fn new(seed: u32) -> Self {
        Self::build(GameConfig::default().with_seed(seed), Board::standard())
    }

    /// Build a game from an explicit configuration
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height)?;
        Ok(Self::build(config, board))
    }

    /// Build a game on a prepared board. The board's dimensions replace the
    /// configured ones.
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self, ConfigError> {
        let config = config.with_size(board.width(), board.height());
        config.validate()?;
        Ok(Self::build(config, board))
    }

    fn build(config: GameConfig, board: Board) -> Self {
        let piece_queue = PieceQueue::for_config(&config);
        let next_queue = piece_queue.peek_5();

        let mut state = Self {
            config,
            board,
            active: None,
            next_queue,
            piece_queue,
            status: GameStatus::Playing,
            episode_id: 0,
            piece_id: 0,
            pieces_locked: 0,
            last_event: None,
            score: 0,
            level: 0,
            lines: 0,
        };
        state.spawn_piece();
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn next_queue(&self) -> &[PieceKind; PREVIEW_LEN] {
        &self.next_queue
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Most recent lock event, if not yet taken
    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Gravity step: move the active piece down one row, or lock it and spawn
    /// the next piece when it cannot move.
    pub fn tick(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_piece().is_some()
    }

    pub fn move_left(&mut self) -> bool {
        !self.game_over() && self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        !self.game_over() && self.try_move(1, 0)
    }

    /// Soft drop: move down one row if possible. Never locks.
    pub fn move_down(&mut self) -> bool {
        if self.game_over() || !self.try_move(0, 1) {
            return false;
        }
        self.score = self.score.saturating_add(calculate_drop_score(1, false));
        true
    }

    /// Rotate clockwise, trying wall kicks in order
    pub fn rotate(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let result = try_rotate(
            active.kind,
            active.rotation,
            active.x,
            active.y,
            |x, y| self.board.fits(x, y),
        );

        match result {
            Some((rotation, (dx, dy))) => {
                self.active = Some(Piece {
                    rotation,
                    ..active.shifted(dx, dy)
                });
                true
            }
            None => false,
        }
    }

    /// Hard drop: move to the landing row, then lock and spawn exactly once
    pub fn drop(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let distance = self.drop_distance(&active);
        self.active = Some(active.shifted(0, distance));
        self.score = self
            .score
            .saturating_add(calculate_drop_score(distance as u32, true));

        self.lock_piece().is_some()
    }

    /// Start over with the same board size and piece set. The new game is
    /// seeded from the current RNG state.
    pub fn restart(&mut self) {
        let config = self.config.clone().with_seed(self.piece_queue.seed());
        let next_episode = self.episode_id.wrapping_add(1);

        let mut board = self.board.clone();
        board.clear();

        *self = Self::build(config, board);
        self.episode_id = next_episode;
        info!(episode = next_episode, "game restarted");
    }

    /// Dispatch a player action
    pub fn apply_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::MoveDown => self.move_down(),
            Action::Rotate => self.rotate(),
            Action::Drop => self.drop(),
            Action::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Row the active piece origin would land on
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(active.y + self.drop_distance(&active))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.width = self.board.width();
        out.height = self.board.height();

        match self.active {
            Some(piece) => {
                let active = out.active.get_or_insert_with(ActiveSnapshot::default);
                active.fill_from(&piece);
            }
            None => out.active = None,
        }
        out.ghost_y = self.ghost_y();
        out.next_queue = self.next_queue;
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Rows the piece can fall before colliding
    fn drop_distance(&self, piece: &Piece) -> i8 {
        let mut distance: i8 = 0;
        while piece.shifted(0, distance + 1).fits(&self.board) {
            distance += 1;
        }
        distance
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, dy);
        if moved.fits(&self.board) {
            self.active = Some(moved);
            return true;
        }

        false
    }

    /// Spawn a new piece from the queue; tops out when the spawn collides
    pub(crate) fn spawn_piece(&mut self) -> bool {
        let kind = self.piece_queue.draw();
        self.next_queue = self.piece_queue.peek_5();

        let piece = Piece::spawn(kind, self.board.width());
        if !piece.fits(&self.board) {
            self.active = None;
            self.status = GameStatus::GameOver;
            info!(
                kind = kind.as_str(),
                score = self.score,
                lines = self.lines,
                "spawn blocked, game over"
            );
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        true
    }

    /// Lock the active piece onto the board, clear full rows and spawn the
    /// next piece.
    ///
    /// A piece that locks with any cell above the top row ends the game
    /// instead: its visible cells are written, `active` stays empty and no
    /// piece spawns.
    pub(crate) fn lock_piece(&mut self) -> Option<LockEvent> {
        let active = self.active.take()?;
        let cells = active.cells();
        let locked_out = cells.iter().any(|&(_, y)| y < 0);

        let cells_locked = match self.board.lock_piece(&cells, active.kind) {
            Some(written) => written,
            None => {
                // The active piece always satisfies the collision rule, so this
                // only fires if the board was edited underneath it.
                warn!(kind = active.kind.as_str(), "lock position collides, piece discarded");
                0
            }
        };

        let lines_cleared = self.board.clear_full_rows();
        let line_clear_score = calculate_line_score(lines_cleared, self.level);
        if lines_cleared > 0 {
            self.lines = self.lines.saturating_add(lines_cleared as u32);
            self.level = calculate_level(self.lines);
            self.score = self.score.saturating_add(line_clear_score);
        }

        let event = LockEvent {
            kind: active.kind,
            cells_locked,
            lines_cleared: lines_cleared as u32,
            line_clear_score,
        };
        self.last_event = Some(event);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        debug!(
            kind = active.kind.as_str(),
            x = active.x,
            y = active.y,
            lines_cleared,
            score = self.score,
            "piece locked"
        );

        if locked_out {
            self.status = GameStatus::GameOver;
            info!(
                kind = active.kind.as_str(),
                cells_locked,
                score = self.score,
                lines = self.lines,
                "piece locked above the top row, game over"
            );
        } else {
            self.spawn_piece();
        }
        Some(event)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SEED)
    }
}
