//! Collision Resolver
//!
//! Resolves the integrator's tentative position against the obstacle catalog.
//!
//! # Order within one step
//!
//! 1. **Kill zones** - any overlap aborts the step with [`Resolution::Killed`].
//! 2. **Support** - the first supporting obstacle in catalog order snaps the
//!    body onto its top surface and grounds it. Later candidates are not
//!    inspected even if they would be closer.
//! 3. **Jump pads** - an overlap while the body is not already rising faster
//!    than `jump_pad_max_entry_speed` launches it and clears grounded.
//! 4. **Speed pads** - an overlap is reported so the caller can start a boost.
//!
//! Only obstacles whose swept vertical span falls inside the height window
//! around the tentative position are inspected.

use crate::player::Body;
use crate::world::{ObstacleCatalog, ObstacleKind};

use super::collision::{overlaps, supports, top_surface};
use super::tuning::PhysicsTuning;
use super::types::Vec3;

/// Resolved state of a step that did not hit a kill zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settled {
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
    /// Catalog index of the supporting obstacle.
    pub support: Option<usize>,
    /// Catalog index of the jump pad that launched the body this step.
    pub jump_pad: Option<usize>,
    /// Catalog index of a speed pad the body overlaps this step.
    pub speed_pad: Option<usize>,
}

/// Outcome of resolving one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// A kill zone was touched; the rest of the step must be skipped.
    Killed { obstacle: usize },
    Settled(Settled),
}

/// Resolve `tentative` for `body` against `catalog` at simulated time `time`.
///
/// # Arguments
///
/// * `tentative` - Position produced by the integrator
/// * `body` - Body after integration (its velocity is the step's velocity)
/// * `catalog` - Level obstacles
/// * `time` - Simulated time at the end of the step, for kinematic poses
/// * `tuning` - Physics constants
pub fn resolve(
    tentative: Vec3,
    body: &Body,
    catalog: &ObstacleCatalog,
    time: f32,
    tuning: &PhysicsTuning,
) -> Resolution {
    let tol = &tuning.contact;
    let window = tuning.height_window;
    let candidates = catalog.candidates(tentative.y - window, tentative.y + window);

    let touching = |kind: ObstacleKind| {
        candidates.iter().copied().find(|&index| {
            catalog.get(index).is_some_and(|obstacle| {
                if obstacle.kind != kind {
                    return false;
                }
                let pose = obstacle.pose_at(time);
                overlaps(
                    tentative,
                    tuning.body_radius,
                    tuning.half_height,
                    &obstacle.shape,
                    pose.center,
                    pose.yaw,
                    tol.trigger_margin,
                )
            })
        })
    };

    if let Some(obstacle) = touching(ObstacleKind::KillZone) {
        return Resolution::Killed { obstacle };
    }

    let mut settled = Settled {
        position: tentative,
        velocity: body.velocity,
        grounded: false,
        support: None,
        jump_pad: None,
        speed_pad: None,
    };

    let foot = tentative - Vec3::Y * tuning.half_height;
    for &index in &candidates {
        let Some(obstacle) = catalog.get(index) else {
            continue;
        };
        if !obstacle.kind.is_support() {
            continue;
        }
        let pose = obstacle.pose_at(time);
        if supports(foot, &obstacle.shape, pose.center, pose.yaw, settled.velocity.y, tol) {
            settled.position.y = top_surface(&obstacle.shape, pose.center) + tuning.half_height;
            settled.velocity.y = settled.velocity.y.max(0.0);
            settled.grounded = true;
            settled.support = Some(index);
            break;
        }
    }

    if settled.velocity.y <= tuning.jump_pad_max_entry_speed {
        if let Some(pad) = touching(ObstacleKind::JumpPad) {
            settled.velocity.y = tuning.jump_pad_impulse;
            settled.grounded = false;
            settled.support = None;
            settled.jump_pad = Some(pad);
        }
    }

    settled.speed_pad = touching(ObstacleKind::SpeedPad);

    Resolution::Settled(settled)
}
