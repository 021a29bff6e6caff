//! Integrator
//!
//! Explicit Euler integration of the single character body, plus the frame
//! splitting that keeps each integration step below the tunnelling limit.
//!
//! # Step order
//!
//! 1. Gravity: `velocity.y -= gravity * dt`
//! 2. Horizontal: directional input sets the horizontal velocity outright
//!    (`move_speed * boost`); no input decays it by `friction^(dt*60)`
//! 3. Jump: a grounded body with jump requested gets `velocity.y = jump_impulse`
//! 4. Tentative position: `position + velocity * dt`

use crate::player::{Body, MoveIntent, facing_of};

use super::tuning::PhysicsTuning;
use super::types::{Vec3, wrap_angle};

/// Advance the body's velocity by one step and return its tentative position.
///
/// The body's position is left untouched; the collision resolver decides where
/// the body actually ends up. Velocity, grounded (on jump) and facing are
/// updated in place.
///
/// # Arguments
///
/// * `body` - The character body
/// * `intent` - Movement intent produced by the active control scheme
/// * `tuning` - Physics constants
/// * `dt` - Step length in seconds
///
/// # Returns
///
/// The tentative position after an explicit Euler step. A non-finite or
/// non-positive `dt` is a no-op and returns the current position.
pub fn integrate(body: &mut Body, intent: &MoveIntent, tuning: &PhysicsTuning, dt: f32) -> Vec3 {
    if !dt.is_finite() || dt <= 0.0 {
        return body.position;
    }

    body.velocity.y -= tuning.gravity * dt;

    if let Some(facing) = intent.facing {
        body.facing = facing;
    }

    if intent.is_moving() {
        let speed = tuning.move_speed * body.speed_multiplier();
        let direction = intent.direction.normalize_or_zero();
        body.velocity.x = direction.x * speed;
        body.velocity.z = direction.y * speed;

        if intent.facing.is_none() {
            // Shortest-path turn toward the movement direction.
            let delta = wrap_angle(facing_of(direction) - body.facing);
            body.facing = wrap_angle(body.facing + delta);
        }
    } else {
        let decay = tuning.friction_over(dt);
        body.velocity.x *= decay;
        body.velocity.z *= decay;
    }

    if intent.jump && body.grounded {
        body.velocity.y = tuning.jump_impulse;
        body.grounded = false;
        body.support = None;
    }

    body.position + body.velocity * dt
}

/// Equal integration sub-steps of one frame, produced lazily.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubSteps {
    step: f32,
    remaining: u64,
}

impl SubSteps {
    /// Sub-steps not yet yielded.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Length of every sub-step.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Iterator for SubSteps {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, usize::try_from(self.remaining).ok())
    }
}

/// Split a frame delta into integration sub-steps.
///
/// # Returns
///
/// `n = ceil(frame_dt / max_step)` equal deltas of `frame_dt / n`, so none
/// exceeds `max_step` and together they cover `frame_dt`. Both are computed
/// in f64. Nothing is yielded for a non-finite or non-positive `frame_dt`; a
/// non-finite or non-positive `max_step` yields the whole frame as one step.
pub fn split_frame(frame_dt: f32, max_step: f32) -> SubSteps {
    if !frame_dt.is_finite() || frame_dt <= 0.0 {
        return SubSteps { step: 0.0, remaining: 0 };
    }
    if !max_step.is_finite() || max_step <= 0.0 || frame_dt <= max_step {
        return SubSteps { step: frame_dt, remaining: 1 };
    }

    let total = f64::from(frame_dt);
    let count = (total / f64::from(max_step)).ceil().max(1.0);
    SubSteps {
        step: (total / count) as f32,
        remaining: count as u64,
    }
}
