//! Per-frame export
//!
//! The only data that leaves the simulation each frame: the body's visual
//! transform for the renderer, the camera pose, the two numbers the UI derives
//! its progress display from, and the frame's events.

use glam::Vec3;
use serde::Serialize;

use crate::camera::CameraPose;
use crate::player::Body;

use super::events::GameEvent;

/// Visual transform of the body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPose {
    pub position: Vec3,
    /// Rotation about +Y; 0 faces world +Z.
    pub facing: f32,
}

impl From<&Body> for BodyPose {
    fn from(body: &Body) -> Self {
        Self {
            position: body.position,
            facing: body.facing,
        }
    }
}

/// Numbers the UI turns into stage labels and progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Telemetry {
    /// Vertical coordinate of the body.
    pub height: f32,
    /// Distinct checkpoints reached this session.
    pub checkpoints_reached: usize,
    pub finished: bool,
    pub grounded: bool,
    /// Current horizontal speed multiplier.
    pub speed_multiplier: f32,
    /// Simulated seconds since the session started.
    pub time: f32,
}

/// Everything produced by one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutput {
    pub body: BodyPose,
    pub camera: CameraPose,
    pub telemetry: Telemetry,
    pub events: Vec<GameEvent>,
}

impl FrameOutput {
    /// True if any event of the frame respawned the body.
    pub fn respawned(&self) -> bool {
        self.events.iter().any(GameEvent::is_respawn)
    }
}
