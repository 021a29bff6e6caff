//! Follow Camera Module
//!
//! Third-person orbit camera that trails the character. The desired position
//! sits on a circle around the body, raised by a fixed height plus an
//! adjustable vertical offset:
//!
//! ```text
//! desired = body + (cos(h) * distance * spread,
//!                   height + v * vertical_scale,
//!                   sin(h) * distance * spread)
//! ```
//!
//! The actual camera moves a fixed fraction (`smoothing`) of the way toward the
//! desired position every step instead of snapping, which hides small jitter
//! in the body's resolved position. It always looks at a point `look_height`
//! above the body.
//!
//! Orbit angles are driven by dedicated camera keys or pointer drags, never by
//! movement keys. This is window-system agnostic - it only manages camera
//! state and math.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::input::CameraKeys;
use crate::physics::types::wrap_angle;

/// Camera rig parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Orbit distance before the horizontal spread factor.
    pub distance: f32,
    /// Height above the body.
    pub height: f32,
    /// Horizontal spread factor applied to `distance`.
    pub spread: f32,
    /// World units of height per unit of vertical offset.
    pub vertical_scale: f32,
    /// Allowed vertical offset range.
    pub vertical_min: f32,
    pub vertical_max: f32,
    /// Fraction of the remaining gap closed per step, in (0, 1].
    pub smoothing: f32,
    /// Look-at point height above the body.
    pub look_height: f32,
    /// Orbit speed of the camera keys (rad/s).
    pub key_turn_rate: f32,
    /// Vertical offset change of the camera keys (units/s).
    pub key_pitch_rate: f32,
    /// Radians (and offset units) per pixel of pointer drag.
    pub pointer_sensitivity: f32,
    /// Starting orbit angle; `-π/2` puts the camera behind a body facing +Z.
    pub initial_heading: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 8.0,
            height: 6.0,
            spread: 0.7,
            vertical_scale: 3.0,
            vertical_min: -1.0,
            vertical_max: 1.0,
            smoothing: 0.08,
            look_height: 2.0,
            key_turn_rate: 1.5,
            key_pitch_rate: 1.5,
            pointer_sensitivity: 0.005,
            initial_heading: -FRAC_PI_2,
        }
    }
}

impl CameraConfig {
    /// Return the first invalid field as `(name, reason)`, if any.
    pub fn first_violation(&self) -> Option<(&'static str, &'static str)> {
        let finite = [
            self.distance,
            self.height,
            self.spread,
            self.vertical_scale,
            self.vertical_min,
            self.vertical_max,
            self.look_height,
            self.key_turn_rate,
            self.key_pitch_rate,
            self.pointer_sensitivity,
            self.initial_heading,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Some(("camera", "all values must be finite"));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Some(("smoothing", "must be in (0, 1]"));
        }
        if self.vertical_min > self.vertical_max {
            return Some(("vertical_min", "must not exceed vertical_max"));
        }
        None
    }
}

/// Camera position and look-at target handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Smoothed orbit camera following the body.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    config: CameraConfig,
    position: Vec3,
    look_at: Vec3,
    /// Horizontal orbit angle (radians), kept in [-π, π].
    heading: f32,
    /// Vertical offset, clamped to the configured range.
    elevation: f32,
}

impl FollowCamera {
    /// Create a camera already resting at its desired position behind `body`.
    pub fn new(config: CameraConfig, body: Vec3) -> Self {
        let mut camera = Self {
            config,
            position: body,
            look_at: body,
            heading: wrap_angle(config.initial_heading),
            elevation: 0.0_f32.clamp(config.vertical_min, config.vertical_max),
        };
        camera.snap_to(body);
        camera
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[inline]
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            look_at: self.look_at,
        }
    }

    /// Where the camera wants to be for a body at `body`.
    pub fn desired_position(&self, body: Vec3) -> Vec3 {
        let c = &self.config;
        let radius = c.distance * c.spread;
        body + Vec3::new(
            self.heading.cos() * radius,
            c.height + self.elevation * c.vertical_scale,
            self.heading.sin() * radius,
        )
    }

    /// Orbit with the camera keys held for `dt` seconds.
    pub fn orbit_keys(&mut self, keys: &CameraKeys, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.heading = wrap_angle(self.heading + keys.yaw_axis() as f32 * self.config.key_turn_rate * dt);
        self.set_elevation(self.elevation + keys.pitch_axis() as f32 * self.config.key_pitch_rate * dt);
    }

    /// Orbit by a pointer drag of `(dx, dy)` pixels.
    pub fn orbit_pointer(&mut self, dx: f32, dy: f32) {
        let s = self.config.pointer_sensitivity;
        self.heading = wrap_angle(self.heading + dx * s);
        self.set_elevation(self.elevation + dy * s);
    }

    pub fn set_heading(&mut self, heading: f32) {
        if heading.is_finite() {
            self.heading = wrap_angle(heading);
        }
    }

    pub fn set_elevation(&mut self, elevation: f32) {
        if elevation.is_finite() {
            self.elevation = elevation.clamp(self.config.vertical_min, self.config.vertical_max);
        }
    }

    /// Move one smoothing step toward the desired position for `body`.
    pub fn follow(&mut self, body: Vec3) {
        let desired = self.desired_position(body);
        self.position += (desired - self.position) * self.config.smoothing;
        self.look_at = body + Vec3::Y * self.config.look_height;
    }

    /// Jump straight to the desired position for `body`.
    pub fn snap_to(&mut self, body: Vec3) {
        self.position = self.desired_position(body);
        self.look_at = body + Vec3::Y * self.config.look_height;
    }
}
