//! Camera Module
//!
//! Provides the third-person follow camera for the engine.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod controller;

pub use controller::{CameraConfig, CameraPose, FollowCamera};
