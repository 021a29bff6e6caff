//! Obstacle descriptors
//!
//! An [`Obstacle`] is one collidable volume: a behavioral kind, a fixed shape,
//! a base center and an optional kinematic motion. Kinematic obstacles never
//! store a mutable position; their pose is recomputed from elapsed time with
//! [`Obstacle::pose_at`], so any number of readers can query it.

use serde::{Deserialize, Serialize};

use crate::physics::shapes::Shape;
use crate::physics::types::{Vec3, planar, to_world_planar};

/// Behavioral tag of an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleKind {
    StaticPlatform,
    MovingPlatform,
    Spinner,
    Checkpoint,
    KillZone,
    JumpPad,
    SpeedPad,
    VictoryPad,
}

impl ObstacleKind {
    /// Kinds the body can stand on.
    pub fn is_support(self) -> bool {
        matches!(
            self,
            ObstacleKind::StaticPlatform
                | ObstacleKind::MovingPlatform
                | ObstacleKind::Spinner
                | ObstacleKind::SpeedPad
                | ObstacleKind::VictoryPad
        )
    }

    /// Motion family this kind requires.
    fn accepts(self, motion: &Motion) -> bool {
        match self {
            ObstacleKind::MovingPlatform => matches!(motion, Motion::Oscillate { .. }),
            ObstacleKind::Spinner => matches!(motion, Motion::Spin { .. }),
            _ => matches!(motion, Motion::Fixed),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ObstacleKind::StaticPlatform => "static_platform",
            ObstacleKind::MovingPlatform => "moving_platform",
            ObstacleKind::Spinner => "spinner",
            ObstacleKind::Checkpoint => "checkpoint",
            ObstacleKind::KillZone => "kill_zone",
            ObstacleKind::JumpPad => "jump_pad",
            ObstacleKind::SpeedPad => "speed_pad",
            ObstacleKind::VictoryPad => "victory_pad",
        }
    }
}

/// Kinematic motion as a pure function of elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "motion", rename_all = "snake_case")]
pub enum Motion {
    Fixed,
    /// `center = base + axis * amplitude * sin(frequency * t + phase)`
    Oscillate {
        axis: Vec3,
        amplitude: f32,
        /// Angular frequency in rad/s.
        frequency: f32,
        phase: f32,
    },
    /// `yaw = base_yaw + angular_speed * t`
    Spin { angular_speed: f32 },
}

impl Motion {
    fn is_finite(&self) -> bool {
        match *self {
            Motion::Fixed => true,
            Motion::Oscillate {
                axis,
                amplitude,
                frequency,
                phase,
            } => axis.is_finite() && amplitude.is_finite() && frequency.is_finite() && phase.is_finite(),
            Motion::Spin { angular_speed } => angular_speed.is_finite(),
        }
    }
}

/// Center and rotation of an obstacle at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstaclePose {
    pub center: Vec3,
    /// Rotation about +Y.
    pub yaw: f32,
}

impl ObstaclePose {
    /// Move a point riding on the obstacle from this pose to `next`.
    ///
    /// The point keeps its offset in the obstacle's frame: translations carry
    /// it along and yaw changes swing it around the obstacle's vertical axis.
    pub fn carry(&self, point: Vec3, next: &ObstaclePose) -> Vec3 {
        let offset = point - self.center;
        let turned = to_world_planar(planar(offset), next.yaw - self.yaw);
        Vec3::new(
            next.center.x + turned.x,
            point.y + (next.center.y - self.center.y),
            next.center.z + turned.y,
        )
    }
}

/// One collidable volume of a level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub shape: Shape,
    /// Base center (the center at `t = 0` for oscillating obstacles).
    pub center: Vec3,
    /// Base rotation about +Y.
    #[serde(default)]
    pub yaw: f32,
    pub motion: Motion,
}

impl Obstacle {
    /// A fixed obstacle of any kind.
    pub fn new(kind: ObstacleKind, shape: Shape, center: Vec3) -> Self {
        Self {
            kind,
            shape,
            center,
            yaw: 0.0,
            motion: Motion::Fixed,
        }
    }

    pub fn platform(center: Vec3, shape: Shape) -> Self {
        Self::new(ObstacleKind::StaticPlatform, shape, center)
    }

    /// Platform sliding back and forth along `axis`.
    pub fn moving_platform(center: Vec3, shape: Shape, axis: Vec3, amplitude: f32, frequency: f32) -> Self {
        Self {
            motion: Motion::Oscillate {
                axis: axis.normalize_or_zero(),
                amplitude,
                frequency,
                phase: 0.0,
            },
            ..Self::new(ObstacleKind::MovingPlatform, shape, center)
        }
    }

    /// Bar rotating about its vertical axis.
    pub fn spinner(center: Vec3, shape: Shape, angular_speed: f32) -> Self {
        Self {
            motion: Motion::Spin { angular_speed },
            ..Self::new(ObstacleKind::Spinner, shape, center)
        }
    }

    /// Pose at elapsed simulated time `time`.
    pub fn pose_at(&self, time: f32) -> ObstaclePose {
        match self.motion {
            Motion::Fixed => ObstaclePose {
                center: self.center,
                yaw: self.yaw,
            },
            Motion::Oscillate {
                axis,
                amplitude,
                frequency,
                phase,
            } => ObstaclePose {
                center: self.center + axis * amplitude * (frequency * time + phase).sin(),
                yaw: self.yaw,
            },
            Motion::Spin { angular_speed } => ObstaclePose {
                center: self.center,
                yaw: self.yaw + angular_speed * time,
            },
        }
    }

    /// Lowest and highest center y over all time.
    pub fn center_y_range(&self) -> (f32, f32) {
        match self.motion {
            Motion::Oscillate { axis, amplitude, .. } => {
                let reach = (axis.y * amplitude).abs();
                (self.center.y - reach, self.center.y + reach)
            }
            _ => (self.center.y, self.center.y),
        }
    }

    /// Vertical extent swept by the volume over all time.
    pub fn vertical_span(&self) -> (f32, f32) {
        let (low, high) = self.center_y_range();
        let half = self.shape.half_height();
        (low - half, high + half)
    }

    pub fn is_kinematic(&self) -> bool {
        !matches!(self.motion, Motion::Fixed)
    }

    /// True when the center, yaw and motion parameters are all finite.
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.yaw.is_finite() && self.motion.is_finite()
    }

    /// True when the motion family fits the kind.
    pub fn motion_matches_kind(&self) -> bool {
        self.kind.accepts(&self.motion)
    }
}
