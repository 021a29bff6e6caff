//! Player Module
//!
//! The controllable character and everything that decides where it goes.
//!
//! # Components
//!
//! - [`Body`] - Position, velocity, grounded flag, facing and speed boost
//! - [`MovementMapping`] - Control-scheme strategy turning keys into a [`MoveIntent`]
//!   - [`WorldRelative`], [`CameraRelative`], [`CharacterRelative`]
//! - [`RespawnController`] - Checkpoint record, fall detection and respawn

pub mod body;
pub mod movement_controller;
pub mod respawn;

pub use body::{Body, SpeedBoost};
pub use movement_controller::{
    CameraRelative, CharacterRelative, ControlScheme, MappingContext, MoveIntent,
    MovementMapping, WorldRelative, facing_forward, facing_of,
};
pub use respawn::{CheckpointRecord, CheckpointTouch, RespawnController};
