//! Held-key state for running, jumping and orbiting the camera.
//!
//! Hosts translate their own key events into [`KeyCode`]; browsers go through
//! [`KeyCode::from_dom_code`].

use serde::{Deserialize, Serialize};

/// Physical keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Q,
    E,
    /// Anything else; never bound.
    Unknown,
}

impl KeyCode {
    /// Translate a DOM `KeyboardEvent.code` string (`"KeyW"`, `"Space"`, `"ArrowLeft"`).
    ///
    /// Unrecognized codes map to [`KeyCode::Unknown`].
    pub fn from_dom_code(code: &str) -> Self {
        match code {
            "KeyW" => KeyCode::W,
            "KeyA" => KeyCode::A,
            "KeyS" => KeyCode::S,
            "KeyD" => KeyCode::D,
            "KeyQ" => KeyCode::Q,
            "KeyE" => KeyCode::E,
            "Space" => KeyCode::Space,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            _ => KeyCode::Unknown,
        }
    }
}

#[inline]
fn axis(positive: bool, negative: bool) -> i32 {
    i32::from(positive) - i32::from(negative)
}

/// Held movement keys. Holding keeps the body running until release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    /// Strafe left, or turn left under the character-relative scheme.
    pub left: bool,
    pub right: bool,
    /// Only acts while grounded.
    pub jump: bool,
}

impl MovementKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while any of the four run keys is down. Jump does not count.
    pub fn any_directional(&self) -> bool {
        [self.forward, self.backward, self.left, self.right].contains(&true)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// +1 forward, -1 back, 0 for none or both.
    pub fn forward_axis(&self) -> i32 {
        axis(self.forward, self.backward)
    }

    /// +1 right, -1 left, 0 for none or both.
    pub fn right_axis(&self) -> i32 {
        axis(self.right, self.left)
    }
}

/// Held camera-orbit keys. Movement keys never orbit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraKeys {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub raise: bool,
    pub lower: bool,
}

impl CameraKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positive orbits right.
    pub fn yaw_axis(&self) -> i32 {
        axis(self.rotate_right, self.rotate_left)
    }

    /// Positive raises the camera.
    pub fn pitch_axis(&self) -> i32 {
        axis(self.raise, self.lower)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
