//! RNG module - bag-based piece generation
//!
//! Implements the "bag" randomization used in modern falling-block games: the
//! bag holds one of each kind in the configured piece set, shuffled, and is
//! drawn until empty before a new bag is shuffled. With the standard set this
//! is the familiar 7-bag.
//!
//! Also provides a small seeded generator so every game is reproducible from
//! its seed.

use crate::config::{GameConfig, PieceSet};
use crate::error::ConfigError;
use crate::types::PieceKind;

/// Seeded 32-bit linear congruential generator.
///
/// Not suitable for anything but gameplay: the low bits cycle quickly.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Seed 0 is an alias for seed 1
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Advance the state and return it
    pub fn next_u32(&mut self) -> u32 {
        // state = state * 1664525 + 1013904223 (mod 2^32)
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Value in `0..max`; `max` must be non-zero
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// In-place Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Number of upcoming kinds exposed as the next-queue preview
pub const PREVIEW_LEN: usize = 5;

/// Endless stream of piece kinds, dealt one shuffled bag at a time
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Kinds that make up every bag, in configuration order
    set: PieceSet,
    bag: PieceSet,
    /// Next position to deal from `bag`
    bag_index: usize,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Queue over `set`. An empty set has nothing to deal and is rejected.
    pub fn new(seed: u32, set: &[PieceKind]) -> Result<Self, ConfigError> {
        if set.is_empty() {
            return Err(ConfigError::EmptyPieceSet);
        }
        Ok(Self::over(seed, set))
    }

    /// Queue over the seven tetrominoes
    pub fn standard(seed: u32) -> Self {
        Self::over(seed, &PieceKind::TETROMINOES)
    }

    /// Queue for a configuration that has already passed validation
    pub(crate) fn for_config(config: &GameConfig) -> Self {
        Self::new(config.seed, config.pieces()).unwrap_or_else(|_| Self::standard(config.seed))
    }

    fn over(seed: u32, set: &[PieceKind]) -> Self {
        let mut queue = Self {
            set: set.iter().copied().collect(),
            bag: PieceSet::new(),
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        queue.refill_bag();
        queue
    }

    fn refill_bag(&mut self) {
        self.bag.clone_from(&self.set);
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// The next `N` kinds in draw order.
    ///
    /// Works on a copy of the queue, so previews that run past the current bag
    /// agree with the bags later `draw()` calls will produce. Stack-only.
    pub fn preview<const N: usize>(&self) -> [PieceKind; N] {
        let mut ahead = self.clone();
        let mut out = [PieceKind::I; N];
        for slot in out.iter_mut() {
            *slot = ahead.draw();
        }
        out
    }

    /// Preview sized for the next-queue display
    pub fn peek_5(&self) -> [PieceKind; PREVIEW_LEN] {
        self.preview::<PREVIEW_LEN>()
    }

    /// Deal one kind, shuffling a fresh bag when the current one is spent
    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Current generator state; restart reseeds from it so the next episode
    /// deals a different sequence
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}
