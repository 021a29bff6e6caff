//! Contact tests
//!
//! Support and trigger predicates between the single character body and one
//! obstacle volume. Both tests are pure: the caller supplies the obstacle's
//! current pose (center and yaw), so kinematic obstacles are handled the same
//! way as static ones.
//!
//! # Support vs. trigger
//!
//! - [`supports`] decides whether the body's foot can rest on the obstacle's top
//!   surface this step. It is restricted to a thin vertical band around the top
//!   and refuses bodies that are moving upward.
//! - [`overlaps`] is the looser proximity test used by hazards and effectors.
//!   It has no vertical-velocity restriction.
//!
//! # Example
//!
//! ```ignore
//! use obby_engine::physics::collision::{supports, ContactTolerances};
//! use obby_engine::physics::shapes::Shape;
//! use glam::Vec3;
//!
//! let pad = Shape::cuboid(4.0, 0.5, 4.0);
//! let foot = Vec3::new(1.9, 0.25, 1.9);
//! assert!(supports(foot, &pad, Vec3::ZERO, 0.0, 0.0, &ContactTolerances::default()));
//! ```

use serde::{Deserialize, Serialize};

use super::shapes::Shape;
use super::types::{Vec3, planar, to_local_planar};

/// Vertical distance above the top surface still counted as touching it.
pub const DEFAULT_TOP_BAND: f32 = 0.1;

/// Extra depth below the obstacle's bottom face that still snaps up onto the top.
pub const DEFAULT_SINK_BAND: f32 = 0.5;

/// Largest upward speed at which a body may still land.
pub const DEFAULT_MAX_LANDING_SPEED: f32 = 0.1;

/// Outward widening applied to every support footprint edge.
pub const DEFAULT_FORGIVENESS: f32 = 0.05;

/// Extra reach of hazard/effector trigger volumes.
pub const DEFAULT_TRIGGER_MARGIN: f32 = 0.1;

/// Tolerances shared by the support and trigger tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactTolerances {
    /// Band above the top surface in which the foot still counts as touching.
    pub top_band: f32,
    /// Band below the obstacle's bottom face that still resolves onto the top.
    pub sink_band: f32,
    /// Vertical velocity above which landing is refused (mid-jump departure).
    pub max_landing_speed: f32,
    /// Footprint forgiveness margin.
    pub forgiveness: f32,
    /// Extra reach of trigger volumes on every axis.
    pub trigger_margin: f32,
}

impl Default for ContactTolerances {
    fn default() -> Self {
        Self {
            top_band: DEFAULT_TOP_BAND,
            sink_band: DEFAULT_SINK_BAND,
            max_landing_speed: DEFAULT_MAX_LANDING_SPEED,
            forgiveness: DEFAULT_FORGIVENESS,
            trigger_margin: DEFAULT_TRIGGER_MARGIN,
        }
    }
}

impl ContactTolerances {
    /// Tolerances with no footprint forgiveness, for exact-edge queries.
    pub fn exact() -> Self {
        Self {
            forgiveness: 0.0,
            ..Self::default()
        }
    }

    /// True when every tolerance is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [
            self.top_band,
            self.sink_band,
            self.max_landing_speed,
            self.forgiveness,
            self.trigger_margin,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Height of an obstacle's top surface.
#[inline]
pub fn top_surface(shape: &Shape, center: Vec3) -> f32 {
    center.y + shape.half_height()
}

/// Decide whether a foot point can rest on an obstacle this step.
///
/// # Arguments
///
/// * `foot` - Bottom of the body (center minus half-height)
/// * `shape` - Obstacle shape
/// * `center` - Obstacle center at the current time
/// * `yaw` - Obstacle rotation about +Y at the current time
/// * `vertical_velocity` - Body's vertical velocity this step
/// * `tol` - Contact tolerances
///
/// # Returns
///
/// `true` when the foot lies in the vertical support band, inside the footprint
/// (plus forgiveness), and the body is not ascending faster than
/// `tol.max_landing_speed`. Degenerate shapes always return `false`.
pub fn supports(
    foot: Vec3,
    shape: &Shape,
    center: Vec3,
    yaw: f32,
    vertical_velocity: f32,
    tol: &ContactTolerances,
) -> bool {
    if vertical_velocity > tol.max_landing_speed {
        return false;
    }

    let top = top_surface(shape, center);
    let lowest = top - 2.0 * shape.half_height() - tol.sink_band;
    if foot.y > top + tol.top_band || foot.y < lowest {
        return false;
    }

    let local = to_local_planar(planar(foot - center), yaw);
    shape.footprint_contains(local, tol.forgiveness)
}

/// Proximity test for hazards and effectors.
///
/// The body is treated as an upright capsule-ish column: its center must lie
/// inside the footprint widened by `body_radius + margin`, and its vertical
/// distance from the obstacle center must be within the combined half-heights
/// plus `margin`.
///
/// # Arguments
///
/// * `body_center` - Body position (center of the column)
/// * `body_radius` - Horizontal radius of the body
/// * `body_half_height` - Half of the body's height
/// * `shape` - Obstacle shape
/// * `center` - Obstacle center at the current time
/// * `yaw` - Obstacle rotation about +Y at the current time
/// * `margin` - Extra reach on every axis
pub fn overlaps(
    body_center: Vec3,
    body_radius: f32,
    body_half_height: f32,
    shape: &Shape,
    center: Vec3,
    yaw: f32,
    margin: f32,
) -> bool {
    let dy = (body_center.y - center.y).abs();
    if dy > shape.half_height() + body_half_height + margin {
        return false;
    }

    let local = to_local_planar(planar(body_center - center), yaw);
    shape.footprint_contains(local, body_radius + margin)
}
