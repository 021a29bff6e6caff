//! Input Module
//!
//! Platform-agnostic input state that the simulation polls once per frame.
//! Hosts feed either physical keys (translated through [`KeyBindings`]) or
//! logical actions directly, plus pointer-drag deltas for the alternate
//! look-control mode. The simulation never sees raw device events.
//!
//! # Example
//!
//! ```rust,ignore
//! use obby_engine::input::{InputState, KeyCode, InputAction};
//!
//! let mut input = InputState::new();
//! input.handle_key(KeyCode::W, true);
//! input.set_action(InputAction::Jump, true);
//!
//! let movement = input.movement();
//! assert!(movement.forward && movement.jump);
//! ```

pub mod bindings;
pub mod keyboard;
pub mod mouse_state;

use std::collections::HashSet;

pub use bindings::{InputAction, KeyBindings};
pub use keyboard::{CameraKeys, KeyCode, MovementKeys};
pub use mouse_state::PointerDrag;

/// Combined input state for keyboard and pointer.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub bindings: KeyBindings,
    pub pointer: PointerDrag,
    pressed_keys: HashSet<KeyCode>,
    held_actions: HashSet<InputAction>,
}

impl InputState {
    /// Create a new input state with default bindings and nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a physical key press or release.
    ///
    /// Returns `true` if the key is bound to an action.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if self.bindings.get_action(key).is_none() {
            return false;
        }
        if pressed {
            self.pressed_keys.insert(key);
        } else {
            self.pressed_keys.remove(&key);
        }
        true
    }

    /// Press or release a logical action directly, bypassing key bindings.
    pub fn set_action(&mut self, action: InputAction, pressed: bool) {
        if pressed {
            self.held_actions.insert(action);
        } else {
            self.held_actions.remove(&action);
        }
    }

    /// Check if a logical action is held by any bound key or directly.
    pub fn is_action_pressed(&self, action: InputAction) -> bool {
        self.held_actions.contains(&action)
            || self
                .pressed_keys
                .iter()
                .any(|key| self.bindings.get_action(*key) == Some(action))
    }

    /// Snapshot of the movement keys.
    pub fn movement(&self) -> MovementKeys {
        MovementKeys {
            forward: self.is_action_pressed(InputAction::MoveForward),
            backward: self.is_action_pressed(InputAction::MoveBack),
            left: self.is_action_pressed(InputAction::MoveLeft),
            right: self.is_action_pressed(InputAction::MoveRight),
            jump: self.is_action_pressed(InputAction::Jump),
        }
    }

    /// Snapshot of the camera-orbit keys.
    pub fn camera_keys(&self) -> CameraKeys {
        CameraKeys {
            rotate_left: self.is_action_pressed(InputAction::CameraLeft),
            rotate_right: self.is_action_pressed(InputAction::CameraRight),
            raise: self.is_action_pressed(InputAction::CameraUp),
            lower: self.is_action_pressed(InputAction::CameraDown),
        }
    }

    /// Release every key and action and clear pointer state. Bindings are kept.
    pub fn reset(&mut self) {
        self.pressed_keys.clear();
        self.held_actions.clear();
        self.pointer.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_default() {
        let input = InputState::new();
        assert!(!input.movement().any_directional());
        assert_eq!(input.camera_keys(), CameraKeys::default());
    }

    #[test]
    fn test_keys_map_through_bindings() {
        let mut input = InputState::new();
        assert!(input.handle_key(KeyCode::W, true));
        assert!(input.handle_key(KeyCode::ArrowLeft, true));
        assert!(!input.handle_key(KeyCode::Unknown, true));

        assert!(input.movement().forward);
        assert!(input.camera_keys().rotate_left);

        input.handle_key(KeyCode::W, false);
        assert!(!input.movement().forward);
    }

    #[test]
    fn test_action_held_by_two_keys() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::Q, true);
        input.handle_key(KeyCode::ArrowLeft, true);
        input.handle_key(KeyCode::Q, false);
        assert!(input.camera_keys().rotate_left);
    }

    #[test]
    fn test_logical_actions() {
        let mut input = InputState::new();
        input.set_action(InputAction::Jump, true);
        assert!(input.movement().jump);
        input.reset();
        assert!(!input.movement().jump);
    }
}
