//! Physics type re-exports from glam
//!
//! This module provides the core mathematical types used throughout
//! the physics system, re-exported from the glam library, plus the few
//! planar helpers the contact tests share.

pub use glam::{Vec2, Vec3};

/// Project a world-space vector onto the horizontal (XZ) plane.
#[inline]
pub fn planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Rotate a planar offset by `-yaw` so it lands in an obstacle's local frame.
///
/// Yaw is measured about +Y, matching `Vec3::new(yaw.sin(), 0.0, yaw.cos())` as
/// the local +Z axis expressed in world space.
#[inline]
pub fn to_local_planar(offset: Vec2, yaw: f32) -> Vec2 {
    if yaw == 0.0 {
        return offset;
    }
    let (sin, cos) = yaw.sin_cos();
    // Inverse of the world rotation x' = x*cos + z*sin, z' = -x*sin + z*cos.
    Vec2::new(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos)
}

/// Rotate a planar offset by `+yaw` from an obstacle's local frame into world space.
#[inline]
pub fn to_world_planar(local: Vec2, yaw: f32) -> Vec2 {
    if yaw == 0.0 {
        return local;
    }
    let (sin, cos) = yaw.sin_cos();
    Vec2::new(local.x * cos + local.y * sin, -local.x * sin + local.y * cos)
}

/// Wrap an angle into the `[-PI, PI]` range.
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    if !angle.is_finite() {
        return 0.0;
    }
    let mut a = angle % TAU;
    if a > PI {
        a -= TAU;
    } else if a < -PI {
        a += TAU;
    }
    a
}
