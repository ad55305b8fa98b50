//! Browser bindings
//!
//! Exposes a `Session` to JavaScript. The page owns the timer, the key
//! listeners and all SVG mutation; it pulls each new state as JSON and diffs
//! visuals by body id. Recycled bodies from every tick, including ticks
//! between two frames, are drained with `take_exit_json`.

use wasm_bindgen::prelude::*;

use crate::session::{ExitBuffer, Session};
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by a previous instance
        return;
    }
    log::info!("River Hop starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    session: Session,
    exits: ExitBuffer,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game; `settings_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> WebGame {
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            match Settings::from_json(settings_json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings ({}), using defaults", e);
                    Settings::default()
                }
            }
        };
        WebGame {
            session: Session::new(settings),
            exits: ExitBuffer::new(),
        }
    }

    /// Timer pulse
    pub fn tick(&mut self) {
        self.session.tick(&mut self.exits);
    }

    /// Frame callback with elapsed milliseconds; returns ticks emitted
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        self.session.advance((dt_ms / 1000.0) as f32, &mut self.exits)
    }

    /// `KeyboardEvent.code` and `KeyboardEvent.repeat`; true if consumed
    pub fn key_down(&mut self, code: &str, repeat: bool) -> bool {
        self.session.key_down(code, repeat, &mut self.exits)
    }

    pub fn key_up(&mut self, code: &str) {
        self.session.key_up(code);
    }

    pub fn blur(&mut self) {
        self.session.blur();
    }

    /// Latest state for the renderer
    pub fn state_json(&self) -> String {
        serde_json::to_string(self.session.state()).unwrap_or_else(|e| {
            log::error!("Failed to serialize state: {}", e);
            String::from("null")
        })
    }

    /// Ids of bodies recycled since the previous call, as a JSON array
    pub fn take_exit_json(&mut self) -> String {
        serde_json::to_string(&self.exits.take()).unwrap_or_else(|e| {
            log::error!("Failed to serialize exit ids: {}", e);
            String::from("[]")
        })
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.session.settings().tick_interval_ms
    }

    pub fn score(&self) -> u32 {
        self.session.state().score
    }

    pub fn max_score(&self) -> u32 {
        self.session.state().max_score
    }

    pub fn game_over(&self) -> bool {
        self.session.state().is_game_over()
    }
}
