//! Browser host bindings
//!
//! Thin `wasm-bindgen` wrapper around [`GameSession`]. The page forwards DOM
//! `KeyboardEvent.code` strings, pointer drags and `requestAnimationFrame`
//! deltas; every frame comes back as a JSON string the page applies to its
//! scene graph and HUD.

use log::warn;
use wasm_bindgen::prelude::*;

use crate::game::{GameConfig, GameSession};
use crate::input::{InputState, KeyCode};
use crate::player::ControlScheme;
use crate::world::LevelId;

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A session driven from JavaScript.
#[wasm_bindgen]
pub struct WebSession {
    session: GameSession,
    input: InputState,
}

#[wasm_bindgen]
impl WebSession {
    /// Start a session from a JSON configuration; an empty string uses defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WebSession, JsValue> {
        console_error_panic_hook::set_once();
        let config = if config_json.trim().is_empty() {
            GameConfig::default()
        } else {
            GameConfig::from_json_str(config_json).map_err(to_js)?
        };
        let session = GameSession::new(config).map_err(to_js)?;
        Ok(Self {
            session,
            input: InputState::new(),
        })
    }

    /// Forward a key press or release. Returns `true` if the key is bound.
    pub fn key_event(&mut self, code: &str, pressed: bool) -> bool {
        let key = KeyCode::from_dom_code(code);
        if key == KeyCode::Unknown {
            warn!("Ignoring unrecognised key code '{}'", code);
            return false;
        }
        self.input.handle_key(key, pressed)
    }

    pub fn pointer_down(&mut self) {
        self.input.pointer.set_dragging(true);
    }

    pub fn pointer_up(&mut self) {
        self.input.pointer.set_dragging(false);
    }

    /// Pointer movement in pixels; only counts while dragging.
    pub fn pointer_move(&mut self, dx: f32, dy: f32) {
        self.input.pointer.accumulate_delta(dx, dy);
    }

    /// Release everything, e.g. when the page loses focus.
    pub fn release_all(&mut self) {
        self.input.reset();
    }

    /// Advance by `dt` seconds and return the frame as JSON.
    pub fn frame(&mut self, dt: f32) -> Result<String, JsValue> {
        let output = self.session.advance_frame(&mut self.input, dt);
        serde_json::to_string(&output).map_err(to_js)
    }

    /// Switch control scheme by name. Returns `false` for an unknown name.
    pub fn set_control_scheme(&mut self, name: &str) -> bool {
        match ControlScheme::from_name(name) {
            Some(scheme) => {
                self.session.set_control_scheme(scheme);
                true
            }
            None => {
                warn!("Unknown control scheme '{}', keeping {:?}", name, self.session.config().control);
                false
            }
        }
    }

    /// Replace the session with a fresh one on another level.
    pub fn load_level(&mut self, name: &str) -> Result<(), JsValue> {
        let level = LevelId::from_name(name).ok_or_else(|| JsValue::from_str("unknown level"))?;
        let config = GameConfig {
            level,
            ..*self.session.config()
        };
        self.session = GameSession::new(config).map_err(to_js)?;
        self.input.reset();
        Ok(())
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.input.reset();
    }

    /// The level's obstacles as JSON, for building the scene once.
    pub fn obstacles(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.catalog().obstacles()).map_err(to_js)
    }
}
