//! Character Body
//!
//! The single dynamic entity of a session. Created once at the spawn point,
//! mutated in place every simulated step, and reset in place on respawn.

use glam::Vec3;
use serde::Serialize;

/// Timed speed multiplier granted by speed pads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedBoost {
    /// Current horizontal speed multiplier (1.0 when inactive).
    pub multiplier: f32,
    /// Seconds until the multiplier reverts to 1.0.
    pub remaining: f32,
}

impl Default for SpeedBoost {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            remaining: 0.0,
        }
    }
}

impl SpeedBoost {
    /// Start (or restart) a boost.
    pub fn activate(&mut self, multiplier: f32, duration: f32) {
        self.multiplier = multiplier;
        self.remaining = duration;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Count the boost down by `dt`.
    ///
    /// # Returns
    ///
    /// `true` on the tick where an active boost expires and the multiplier
    /// reverts to 1.0.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.clear();
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Position, velocity and contact state of the controlled character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Body {
    /// Center of the body in world space.
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
    /// Rotation about +Y; 0 faces world +Z.
    pub facing: f32,
    pub boost: SpeedBoost,
    /// Catalog index of the obstacle currently supporting the body.
    pub support: Option<usize>,
}

impl Body {
    /// A body standing still at `spawn`.
    pub fn at_spawn(spawn: Vec3) -> Self {
        Self {
            position: spawn,
            velocity: Vec3::ZERO,
            grounded: true,
            facing: 0.0,
            boost: SpeedBoost::default(),
            support: None,
        }
    }

    /// Reset in place to stand still at `point`. Facing is kept.
    pub fn reset_to(&mut self, point: Vec3) {
        self.position = point;
        self.velocity = Vec3::ZERO;
        self.grounded = true;
        self.boost.clear();
        self.support = None;
    }

    /// Effective horizontal speed multiplier.
    #[inline]
    pub fn speed_multiplier(&self) -> f32 {
        self.boost.multiplier
    }
}
