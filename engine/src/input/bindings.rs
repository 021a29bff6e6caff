//! Input Bindings Module
//!
//! Maps physical keys to logical actions so movement and camera code never
//! looks at raw key codes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::KeyCode;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    /// Move forward (default: W)
    MoveForward,
    /// Move backward (default: S)
    MoveBack,
    /// Move or turn left (default: A)
    MoveLeft,
    /// Move or turn right (default: D)
    MoveRight,
    /// Jump (default: Space)
    Jump,
    /// Orbit camera left (default: ArrowLeft)
    CameraLeft,
    /// Orbit camera right (default: ArrowRight)
    CameraRight,
    /// Raise camera (default: ArrowUp)
    CameraUp,
    /// Lower camera (default: ArrowDown)
    CameraDown,
}

impl InputAction {
    /// Every action, in binding order.
    pub const ALL: [InputAction; 9] = [
        InputAction::MoveForward,
        InputAction::MoveBack,
        InputAction::MoveLeft,
        InputAction::MoveRight,
        InputAction::Jump,
        InputAction::CameraLeft,
        InputAction::CameraRight,
        InputAction::CameraUp,
        InputAction::CameraDown,
    ];

    /// Parse a logical action name (`"forward"`, `"jump"`, `"camera_left"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "forward" | "move_forward" => Some(InputAction::MoveForward),
            "back" | "backward" | "move_back" => Some(InputAction::MoveBack),
            "left" | "move_left" => Some(InputAction::MoveLeft),
            "right" | "move_right" => Some(InputAction::MoveRight),
            "jump" => Some(InputAction::Jump),
            "camera_left" => Some(InputAction::CameraLeft),
            "camera_right" => Some(InputAction::CameraRight),
            "camera_up" => Some(InputAction::CameraUp),
            "camera_down" => Some(InputAction::CameraDown),
            _ => None,
        }
    }
}

/// Stock layout: WASD to run, Space to jump, arrows or Q/E to orbit.
pub const DEFAULT_BINDINGS: [(KeyCode, InputAction); 11] = [
    (KeyCode::W, InputAction::MoveForward),
    (KeyCode::S, InputAction::MoveBack),
    (KeyCode::A, InputAction::MoveLeft),
    (KeyCode::D, InputAction::MoveRight),
    (KeyCode::Space, InputAction::Jump),
    (KeyCode::ArrowLeft, InputAction::CameraLeft),
    (KeyCode::ArrowRight, InputAction::CameraRight),
    (KeyCode::ArrowUp, InputAction::CameraUp),
    (KeyCode::ArrowDown, InputAction::CameraDown),
    (KeyCode::Q, InputAction::CameraLeft),
    (KeyCode::E, InputAction::CameraRight),
];

/// Key → action table. One key drives at most one action; an action may
/// have any number of keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    table: HashMap<KeyCode, InputAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Table holding [`DEFAULT_BINDINGS`].
    pub fn new() -> Self {
        Self {
            table: DEFAULT_BINDINGS.into_iter().collect(),
        }
    }

    /// Point `key` at `action`, dropping whatever it drove before.
    /// `Unknown` cannot be bound.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if key != KeyCode::Unknown {
            self.table.insert(key, action);
        }
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        self.table.remove(&key);
    }

    #[inline]
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.table.get(&key).copied()
    }

    /// Keys driving `action`, in a stable order.
    pub fn keys_for(&self, action: InputAction) -> Vec<KeyCode> {
        let mut keys: Vec<KeyCode> = self
            .table
            .iter()
            .filter_map(|(&key, &bound)| (bound == action).then_some(key))
            .collect();
        keys.sort_by_key(|k| format!("{k:?}"));
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_layout_is_loaded() {
        let table = KeyBindings::new();
        for (key, action) in DEFAULT_BINDINGS {
            assert_eq!(table.get_action(key), Some(action));
        }
        assert_eq!(table.get_action(KeyCode::Unknown), None);
        assert_eq!(table.keys_for(InputAction::CameraRight), vec![KeyCode::ArrowRight, KeyCode::E]);
    }

    #[test]
    fn test_remapping_moves_key_to_new_action() {
        let mut table = KeyBindings::new();
        table.bind(KeyCode::W, InputAction::Jump);

        assert_eq!(table.get_action(KeyCode::W), Some(InputAction::Jump));
        assert_eq!(table.keys_for(InputAction::Jump), vec![KeyCode::Space, KeyCode::W]);
        assert!(table.keys_for(InputAction::MoveForward).is_empty());
    }

    #[test]
    fn test_unknown_key_cannot_be_bound() {
        let mut table = KeyBindings::new();
        table.bind(KeyCode::Unknown, InputAction::Jump);
        assert_eq!(table.get_action(KeyCode::Unknown), None);
    }

    #[test]
    fn test_unbinding_leaves_other_keys() {
        let mut table = KeyBindings::new();
        table.unbind_key(KeyCode::Q);
        assert_eq!(table.get_action(KeyCode::Q), None);
        assert_eq!(table.keys_for(InputAction::CameraLeft), vec![KeyCode::ArrowLeft]);
    }

    #[test]
    fn test_action_names_parse_loosely() {
        assert_eq!(InputAction::from_name("forward"), Some(InputAction::MoveForward));
        assert_eq!(InputAction::from_name(" Jump "), Some(InputAction::Jump));
        assert_eq!(InputAction::from_name("camera_up"), Some(InputAction::CameraUp));
        assert_eq!(InputAction::from_name("sprint"), None);
    }
}
