//! Game Module
//!
//! Game-level systems built on top of the engine: configuration, the
//! per-step simulation, the frame-driving session and what it exports.

pub mod config;
pub mod events;
pub mod output;
pub mod session;
pub mod simulation;

pub use config::{ConfigError, GameConfig};
pub use events::{GameEvent, RespawnCause};
pub use output::{BodyPose, FrameOutput, Telemetry};
pub use session::GameSession;
pub use simulation::{PlayState, StepOutcome, step};
