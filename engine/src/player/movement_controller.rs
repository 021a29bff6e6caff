//! Player Movement Controller
//!
//! Turns the polled movement keys into a world-space movement intent. The
//! three control schemes share one downstream integrator and differ only in how
//! forward/right are chosen:
//!
//! - **World-relative**: forward is world +Z, fixed regardless of camera.
//! - **Camera-relative**: forward is the horizontal direction from the camera to
//!   the body, so W always walks "into the screen".
//! - **Character-relative**: left/right turn the character at a fixed rate and
//!   forward/back walk along its facing. The camera is steered separately.
//!
//! # Axis convention
//!
//! Facing angle `f` points along `(sin f, cos f)` in the XZ plane, so `f = 0`
//! faces +Z. Right of a forward vector `(x, z)` is `(-z, x)`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use obby_engine::player::{ControlScheme, MappingContext};
//!
//! let intent = ControlScheme::CameraRelative
//!     .mapper()
//!     .map_input(&input.movement(), &context, dt);
//! ```

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::input::MovementKeys;
use crate::physics::types::{planar, wrap_angle};

/// Squared planar length below which a direction is treated as zero.
const DIRECTION_EPSILON_SQ: f32 = 1e-8;

/// Movement request for one integration step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveIntent {
    /// Desired horizontal direction in world XZ (unit length or zero).
    pub direction: Vec2,
    /// Jump requested this step.
    pub jump: bool,
    /// Facing imposed by the scheme; `None` lets the body face its movement.
    pub facing: Option<f32>,
}

impl MoveIntent {
    /// True when any horizontal direction is requested.
    pub fn is_moving(&self) -> bool {
        self.direction.length_squared() > DIRECTION_EPSILON_SQ
    }
}

/// Everything a control scheme may look at besides the keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappingContext {
    pub body_position: Vec3,
    pub body_facing: f32,
    pub camera_position: Vec3,
    /// Camera orbit angle; used when the camera sits directly above the body.
    pub camera_heading: f32,
    /// Character turn rate in rad/s.
    pub turn_rate: f32,
}

/// Strategy turning movement keys into a world-space intent.
pub trait MovementMapping {
    fn map_input(&self, keys: &MovementKeys, ctx: &MappingContext, dt: f32) -> MoveIntent;
}

/// Forward is world +Z.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldRelative;

/// Forward is the horizontal camera-to-body direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraRelative;

/// Left/right turn the character, forward/back follow its facing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterRelative;

/// Planar forward vector of a facing angle.
#[inline]
pub fn facing_forward(facing: f32) -> Vec2 {
    Vec2::new(facing.sin(), facing.cos())
}

/// Facing angle of a planar direction.
#[inline]
pub fn facing_of(direction: Vec2) -> f32 {
    direction.x.atan2(direction.y)
}

/// Right-hand vector of a planar forward vector.
#[inline]
fn right_of(forward: Vec2) -> Vec2 {
    Vec2::new(-forward.y, forward.x)
}

/// Combine forward/right axes into a normalized planar direction.
fn combine(keys: &MovementKeys, forward: Vec2, right: Vec2) -> Vec2 {
    let dir = forward * keys.forward_axis() as f32 + right * keys.right_axis() as f32;
    dir.normalize_or_zero()
}

impl MovementMapping for WorldRelative {
    fn map_input(&self, keys: &MovementKeys, _ctx: &MappingContext, _dt: f32) -> MoveIntent {
        let forward = Vec2::Y;
        MoveIntent {
            direction: combine(keys, forward, right_of(forward)),
            jump: keys.jump,
            facing: None,
        }
    }
}

impl CameraRelative {
    /// Horizontal camera forward, falling back to the orbit heading when the
    /// camera is directly above or below the body.
    pub fn camera_forward(ctx: &MappingContext) -> Vec2 {
        let to_body = planar(ctx.body_position - ctx.camera_position);
        if to_body.length_squared() > DIRECTION_EPSILON_SQ {
            return to_body.normalize();
        }
        // The camera sits at (cos h, sin h) from the body, so forward is the opposite.
        -Vec2::new(ctx.camera_heading.cos(), ctx.camera_heading.sin())
    }
}

impl MovementMapping for CameraRelative {
    fn map_input(&self, keys: &MovementKeys, ctx: &MappingContext, _dt: f32) -> MoveIntent {
        let forward = Self::camera_forward(ctx);
        MoveIntent {
            direction: combine(keys, forward, right_of(forward)),
            jump: keys.jump,
            facing: None,
        }
    }
}

impl MovementMapping for CharacterRelative {
    fn map_input(&self, keys: &MovementKeys, ctx: &MappingContext, dt: f32) -> MoveIntent {
        // Left turns toward +X when facing +Z, which is an increasing angle.
        let turn = -(keys.right_axis() as f32) * ctx.turn_rate * dt.max(0.0);
        let facing = wrap_angle(ctx.body_facing + turn);
        let direction = facing_forward(facing) * keys.forward_axis() as f32;
        MoveIntent {
            direction,
            jump: keys.jump,
            facing: Some(facing),
        }
    }
}

static WORLD_RELATIVE: WorldRelative = WorldRelative;
static CAMERA_RELATIVE: CameraRelative = CameraRelative;
static CHARACTER_RELATIVE: CharacterRelative = CharacterRelative;

/// Control scheme selected by level/mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlScheme {
    WorldRelative,
    #[default]
    CameraRelative,
    CharacterRelative,
}

impl ControlScheme {
    /// The mapping strategy for this scheme.
    pub fn mapper(self) -> &'static dyn MovementMapping {
        match self {
            ControlScheme::WorldRelative => &WORLD_RELATIVE,
            ControlScheme::CameraRelative => &CAMERA_RELATIVE,
            ControlScheme::CharacterRelative => &CHARACTER_RELATIVE,
        }
    }

    /// Parse a scheme name as used on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "world" | "world_relative" => Some(ControlScheme::WorldRelative),
            "camera" | "camera_relative" => Some(ControlScheme::CameraRelative),
            "character" | "character_relative" => Some(ControlScheme::CharacterRelative),
            _ => None,
        }
    }
}
