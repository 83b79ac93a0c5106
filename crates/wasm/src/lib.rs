//! ferris-blocks-wasm - browser bindings for the engine.
//!
//! A page calls `make()` once, forwards key presses to the movement methods and
//! calls `tick()` from its animation loop on a fixed interval. Rendering reads
//! `cells()` (row-major codes with the active piece drawn in) or `snapshot()`.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use ferris_blocks_core::{GameConfig, GameState};
use ferris_blocks_types::{Action, PieceKind};

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Optional fields accepted by [`Game::with_config`]
#[derive(Debug, Default, Deserialize)]
pub struct JsGameConfig {
    pub width: Option<u8>,
    pub height: Option<u8>,
    pub seed: Option<u32>,
    pub pieces: Option<Vec<PieceKind>>,
}

impl JsGameConfig {
    pub fn into_config(self) -> GameConfig {
        let defaults = GameConfig::default();
        let mut config = defaults
            .clone()
            .with_size(
                self.width.unwrap_or(defaults.width),
                self.height.unwrap_or(defaults.height),
            )
            .with_seed(self.seed.unwrap_or(defaults.seed));
        if let Some(pieces) = self.pieces {
            config = config.with_pieces(&pieces);
        }
        config
    }
}

#[wasm_bindgen]
pub struct Game {
    inner: GameState,
}

/// New game on the standard board
#[wasm_bindgen]
pub fn make() -> Game {
    Game {
        inner: ferris_blocks_core::make(),
    }
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            inner: GameState::new(seed),
        }
    }

    /// Build from a plain object such as `{ width: 4, height: 4, pieces: ["dot"] }`
    pub fn with_config(config: JsValue) -> Result<Game, JsError> {
        let config: JsGameConfig = if config.is_undefined() || config.is_null() {
            JsGameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let inner = GameState::with_config(config.into_config())?;
        Ok(Self { inner })
    }

    pub fn tick(&mut self) -> bool {
        self.inner.tick()
    }

    pub fn move_left(&mut self) -> bool {
        self.inner.move_left()
    }

    pub fn move_right(&mut self) -> bool {
        self.inner.move_right()
    }

    pub fn move_down(&mut self) -> bool {
        self.inner.move_down()
    }

    pub fn rotate(&mut self) -> bool {
        self.inner.rotate()
    }

    pub fn drop(&mut self) -> bool {
        self.inner.drop()
    }

    pub fn restart(&mut self) {
        self.inner.restart();
    }

    /// Dispatch by action name (`"moveLeft"`, `"rotate"`, ...); unknown names do nothing
    pub fn apply(&mut self, action: &str) -> bool {
        match Action::from_str(action) {
            Some(action) => self.inner.apply_action(action),
            None => false,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn game_over(&self) -> bool {
        self.inner.game_over()
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.inner.score()
    }

    #[wasm_bindgen(getter)]
    pub fn level(&self) -> u32 {
        self.inner.level()
    }

    #[wasm_bindgen(getter)]
    pub fn lines(&self) -> u32 {
        self.inner.lines()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u8 {
        self.inner.board().width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u8 {
        self.inner.board().height()
    }

    /// Row-major cell codes, 0 for empty, active piece included
    pub fn cells(&self) -> Vec<u8> {
        self.inner.snapshot().composite()
    }

    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).unwrap_or(JsValue::NULL)
    }
}
