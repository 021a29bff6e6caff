//! Character physics tuning
//!
//! All constants that shape the feel of the character controller. Defaults
//! reproduce the classic tower-climb tuning; every field may be overridden
//! from the JSON game configuration.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

use super::collision::{ContactTolerances, DEFAULT_FORGIVENESS};

/// Downward acceleration (m/s²).
pub const DEFAULT_GRAVITY: f32 = 35.0;
/// Vertical speed set by a jump from the ground.
pub const DEFAULT_JUMP_IMPULSE: f32 = 18.0;
/// Horizontal speed with a directional key held.
pub const DEFAULT_MOVE_SPEED: f32 = 12.0;
/// Horizontal velocity factor per reference frame with no directional input.
pub const DEFAULT_FRICTION: f32 = 0.8;
/// Reference frame length the friction factor is expressed against.
pub const FRICTION_REFERENCE_DT: f32 = 1.0 / 60.0;
/// Half of the body's height; the foot sits this far below the center.
pub const DEFAULT_HALF_HEIGHT: f32 = 1.0;
/// Horizontal radius of the body for trigger tests.
pub const DEFAULT_BODY_RADIUS: f32 = 0.5;
/// Largest integration step before a frame is split into sub-steps.
pub const DEFAULT_MAX_SUBSTEP: f32 = 1.0 / 60.0;
/// Most sub-steps one host frame may run; time beyond them is dropped.
pub const DEFAULT_MAX_SUBSTEPS_PER_FRAME: u32 = 1 << 18;
/// Vertical speed set by a jump pad.
pub const DEFAULT_JUMP_PAD_IMPULSE: f32 = 25.0;
/// Jump pads do not fire while the body rises faster than this.
pub const DEFAULT_JUMP_PAD_MAX_ENTRY_SPEED: f32 = 2.0;
/// Speed multiplier granted by a speed pad.
pub const DEFAULT_SPEED_PAD_MULTIPLIER: f32 = 2.0;
/// Seconds a speed boost lasts.
pub const DEFAULT_SPEED_PAD_DURATION: f32 = 3.0;
/// Distance from a checkpoint center that counts as reaching it.
pub const DEFAULT_CHECKPOINT_RADIUS: f32 = 2.0;
/// Distance below the lowest platform at which the body respawns.
pub const DEFAULT_FALL_MARGIN: f32 = 10.0;
/// Turn rate of the character-relative scheme (rad/s).
pub const DEFAULT_TURN_RATE: f32 = 2.5;
/// Half span of the vertical window the resolver considers around the body.
pub const DEFAULT_HEIGHT_WINDOW: f32 = 12.0;

/// Narrowest half-width used by any built-in level recipe.
pub const NARROWEST_RECIPE_HALF_WIDTH: f32 = 0.4;

const_assert!(DEFAULT_JUMP_PAD_IMPULSE > DEFAULT_JUMP_IMPULSE);
const_assert!(DEFAULT_FORGIVENESS < NARROWEST_RECIPE_HALF_WIDTH);
const_assert!(DEFAULT_MAX_SUBSTEP > 0.0);
const_assert!(DEFAULT_FRICTION > 0.0 && DEFAULT_FRICTION <= 1.0);
const_assert!(DEFAULT_HEIGHT_WINDOW > DEFAULT_HALF_HEIGHT * 2.0);

/// Tunable physics parameters for the character controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub move_speed: f32,
    /// Horizontal velocity factor per 1/60 s with no directional input.
    pub friction: f32,
    pub half_height: f32,
    pub body_radius: f32,
    pub max_substep: f32,
    pub max_substeps_per_frame: u32,
    pub jump_pad_impulse: f32,
    pub jump_pad_max_entry_speed: f32,
    pub speed_pad_multiplier: f32,
    pub speed_pad_duration: f32,
    pub checkpoint_radius: f32,
    pub fall_margin: f32,
    pub turn_rate: f32,
    pub height_window: f32,
    pub contact: ContactTolerances,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            move_speed: DEFAULT_MOVE_SPEED,
            friction: DEFAULT_FRICTION,
            half_height: DEFAULT_HALF_HEIGHT,
            body_radius: DEFAULT_BODY_RADIUS,
            max_substep: DEFAULT_MAX_SUBSTEP,
            max_substeps_per_frame: DEFAULT_MAX_SUBSTEPS_PER_FRAME,
            jump_pad_impulse: DEFAULT_JUMP_PAD_IMPULSE,
            jump_pad_max_entry_speed: DEFAULT_JUMP_PAD_MAX_ENTRY_SPEED,
            speed_pad_multiplier: DEFAULT_SPEED_PAD_MULTIPLIER,
            speed_pad_duration: DEFAULT_SPEED_PAD_DURATION,
            checkpoint_radius: DEFAULT_CHECKPOINT_RADIUS,
            fall_margin: DEFAULT_FALL_MARGIN,
            turn_rate: DEFAULT_TURN_RATE,
            height_window: DEFAULT_HEIGHT_WINDOW,
            contact: ContactTolerances::default(),
        }
    }
}

impl PhysicsTuning {
    /// Friction factor to apply over `dt` seconds.
    ///
    /// `friction` is defined per 1/60 s so the decay is frame-rate independent.
    #[inline]
    pub fn friction_over(&self, dt: f32) -> f32 {
        self.friction.powf(dt / FRICTION_REFERENCE_DT)
    }

    /// Return the first invalid field as `(name, reason)`, if any.
    pub fn first_violation(&self) -> Option<(&'static str, &'static str)> {
        let positive = [
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("move_speed", self.move_speed),
            ("half_height", self.half_height),
            ("body_radius", self.body_radius),
            ("max_substep", self.max_substep),
            ("jump_pad_impulse", self.jump_pad_impulse),
            ("speed_pad_multiplier", self.speed_pad_multiplier),
            ("checkpoint_radius", self.checkpoint_radius),
            ("height_window", self.height_window),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Some((name, "must be finite and positive"));
            }
        }

        let non_negative = [
            ("jump_pad_max_entry_speed", self.jump_pad_max_entry_speed),
            ("speed_pad_duration", self.speed_pad_duration),
            ("fall_margin", self.fall_margin),
            ("turn_rate", self.turn_rate),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Some((name, "must be finite and non-negative"));
            }
        }

        if self.max_substeps_per_frame == 0 {
            return Some(("max_substeps_per_frame", "must be at least 1"));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Some(("friction", "must be in (0, 1]"));
        }
        if !self.contact.is_valid() {
            return Some(("contact", "tolerances must be finite and non-negative"));
        }
        None
    }
}
