//! Gameplay events
//!
//! Discrete things that happened during a frame, reported alongside the pose
//! export so the UI can react without diffing state.

use serde::Serialize;

/// Why the body was sent back to its checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RespawnCause {
    /// Touched the kill zone with this catalog index.
    KillZone { obstacle: usize },
    /// Dropped below the level's fall floor.
    FellOutOfWorld,
}

/// One event emitted by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A checkpoint was reached for the first time.
    CheckpointReached { obstacle: usize, total: usize },
    Respawned {
        cause: RespawnCause,
        position: [f32; 3],
    },
    /// The body touched down after being airborne.
    Landed { obstacle: usize },
    JumpPadLaunched { obstacle: usize },
    /// A speed boost started while none was active.
    SpeedBoosted { obstacle: usize },
    SpeedBoostExpired,
    /// The body stood on a victory pad. Emitted once per session.
    VictoryReached { obstacle: usize },
}

impl GameEvent {
    /// True for events that reset the body's position.
    pub fn is_respawn(&self) -> bool {
        matches!(self, GameEvent::Respawned { .. })
    }
}
