//! Fixed-interval driver for the engine.
//!
//! The host owns the clock. It calls [`Driver::start`] once, then
//! [`Driver::frame`] from its loop and [`Driver::apply`] for every input,
//! passing the current [`Instant`] each time. The driver decides when gravity
//! runs and when the loop should end.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use ferris_blocks_driver::{Driver, DriverConfig, LoopControl};
//!
//! let mut driver = Driver::new(DriverConfig::default()).unwrap();
//! let t0 = Instant::now();
//! driver.start(t0);
//!
//! assert_eq!(driver.frame(t0 + Duration::from_millis(401)), LoopControl::Continue);
//! ```

use std::time::{Duration, Instant};

use ferris_blocks_core::{get_drop_interval_ms, ConfigError, GameConfig, GameState};
use tracing::{debug, info};

pub use ferris_blocks_types as types;

use types::{Action, TICK_MS};

/// What the host loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Driver configuration
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Gravity interval
    pub tick_interval: Duration,
    /// Shorten the interval as the level rises
    pub accelerate: bool,
    /// End the loop once the game is over
    pub stop_on_game_over: bool,
    pub game: GameConfig,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(TICK_MS as u64),
            accelerate: false,
            stop_on_game_over: true,
            game: GameConfig::default(),
        }
    }
}

impl DriverConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing or unparsable values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse_u32 = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u32>().ok());
        let parse_u8 = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u8>().ok());
        let flag = |key: &str| {
            lookup(key).map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
        };

        let tick_interval = parse_u32("FERRIS_BLOCKS_TICK_MS")
            .filter(|&ms| ms > 0)
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(defaults.tick_interval);

        let accelerate = flag("FERRIS_BLOCKS_ACCELERATE").unwrap_or(defaults.accelerate);
        let stop_on_game_over = flag("FERRIS_BLOCKS_KEEP_RUNNING")
            .map(|keep| !keep)
            .unwrap_or(defaults.stop_on_game_over);

        let seed = parse_u32("FERRIS_BLOCKS_SEED").unwrap_or(defaults.game.seed);
        let width = parse_u8("FERRIS_BLOCKS_WIDTH").unwrap_or(defaults.game.width);
        let height = parse_u8("FERRIS_BLOCKS_HEIGHT").unwrap_or(defaults.game.height);

        Self {
            tick_interval,
            accelerate,
            stop_on_game_over,
            game: defaults.game.with_seed(seed).with_size(width, height),
        }
    }
}

/// Owns one game plus the timing state that drives it
#[derive(Debug, Clone)]
pub struct Driver {
    game: GameState,
    config: DriverConfig,
    started: bool,
    last_tick: Option<Instant>,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Result<Self, ConfigError> {
        let game = GameState::with_config(config.game.clone())?;
        Ok(Self::with_game(game, config))
    }

    /// Drive an existing game
    pub fn with_game(game: GameState, config: DriverConfig) -> Self {
        Self {
            game,
            config,
            started: false,
            last_tick: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn last_tick(&self) -> Option<Instant> {
        self.last_tick
    }

    /// Begin ticking. Calling it again has no effect.
    pub fn start(&mut self, now: Instant) {
        if self.started {
            return;
        }
        self.started = true;
        self.last_tick = Some(now);
        debug!(interval_ms = self.interval().as_millis() as u64, "driver started");
    }

    /// Current gravity interval
    pub fn interval(&self) -> Duration {
        if !self.config.accelerate {
            return self.config.tick_interval;
        }
        let level_interval = Duration::from_millis(get_drop_interval_ms(self.game.level()) as u64);
        self.config.tick_interval.min(level_interval)
    }

    /// Time left before the next tick is due, zero when overdue
    pub fn time_until_tick(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) if self.started => {
                self.interval().saturating_sub(now.saturating_duration_since(last))
            }
            _ => self.config.tick_interval,
        }
    }

    /// One pass of the host loop: tick if the interval has elapsed.
    pub fn frame(&mut self, now: Instant) -> LoopControl {
        if self.started {
            if let Some(last) = self.last_tick {
                if now.saturating_duration_since(last) > self.interval() {
                    self.game.tick();
                    self.last_tick = Some(now);
                }
            }
        }

        if self.game.game_over() && self.config.stop_on_game_over {
            info!(score = self.game.score(), lines = self.game.lines(), "game over, stopping");
            return LoopControl::Stop;
        }
        LoopControl::Continue
    }

    /// Forward a player action and restart the tick timer.
    ///
    /// Ignored before [`Driver::start`].
    pub fn apply(&mut self, action: Action, now: Instant) -> bool {
        if !self.started {
            return false;
        }
        let changed = self.game.apply_action(action);
        self.last_tick = Some(now);
        changed
    }
}
