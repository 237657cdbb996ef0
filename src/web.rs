//! Browser entry point
//!
//! The host page forwards `keydown`/`keyup` events and calls `step` from its
//! `requestAnimationFrame` callback, then swaps in the SVG of the frame.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::entity::InputState;
use crate::render::render_svg;
use crate::world::World;

#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in the browser console
    console_error_panic_hook::set_once();

    // Initialize logging for WASM
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Sidescroller WASM module initialized");
}

/// One game session owned by the page
#[wasm_bindgen]
pub struct WebGame {
    world: World,
    input: InputState,
}

#[wasm_bindgen]
impl WebGame {
    /// New session with a random seed
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        Self::from_config(&GameConfig::default())
    }

    /// New session with a fixed seed
    pub fn with_seed(seed: u64) -> WebGame {
        let mut config = GameConfig::default();
        config.world.seed = Some(seed);
        Self::from_config(&config)
    }

    fn from_config(config: &GameConfig) -> WebGame {
        WebGame {
            world: World::new(config),
            input: InputState::new(),
        }
    }

    /// Forward `KeyboardEvent.key` from a `keydown` listener
    pub fn key_down(&mut self, key: &str) {
        self.input.handle_key_event(key, true);
    }

    /// Forward `KeyboardEvent.key` from a `keyup` listener
    pub fn key_up(&mut self, key: &str) {
        self.input.handle_key_event(key, false);
    }

    /// Advance one frame with the keys held right now
    pub fn step(&mut self) {
        self.world.step(&self.input);
    }

    /// Current frame as an SVG document
    pub fn svg(&self) -> String {
        render_svg(&self.world.snapshot())
    }

    pub fn player_x(&self) -> f32 {
        self.world.player.position.x
    }

    pub fn player_y(&self) -> f32 {
        self.world.player.position.y
    }

    pub fn seed(&self) -> u64 {
        self.world.seed()
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
