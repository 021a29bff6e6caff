//! Obby Engine Library
//!
//! Character-physics core of a tower-climb obstacle course: one controllable
//! body, a catalog of static and kinematic obstacles, and a fixed per-step
//! pipeline of integration, collision resolution, respawn and camera follow.
//! Rendering and UI live outside; the core takes elapsed time and polled
//! input and hands back poses, telemetry and events.
//!
//! # Modules
//!
//! - [`physics`] - Shapes, containment tests, tuning, integrator, resolver
//! - [`world`] - Obstacles, the obstacle catalog and procedural levels
//! - [`player`] - Body state, control schemes, respawn/checkpoints
//! - [`camera`] - Smoothed third-person follow camera
//! - [`input`] - Platform-agnostic logical key and pointer state
//! - [`game`] - Configuration, simulation step and frame-driving session
//!
//! # Example
//!
//! ```ignore
//! use obby_engine::game::{GameConfig, GameSession};
//! use obby_engine::input::{InputState, KeyCode};
//! use obby_engine::world::LevelId;
//!
//! let config = GameConfig {
//!     level: LevelId::SpiralTower,
//!     ..GameConfig::default()
//! };
//! let mut session = GameSession::new(config)?;
//!
//! let mut input = InputState::new();
//! input.handle_key(KeyCode::W, true);
//!
//! // Once per rendered frame
//! let frame = session.advance_frame(&mut input, 1.0 / 60.0);
//! renderer.set_body_transform(frame.body.position, frame.body.facing);
//! renderer.set_camera(frame.camera.position, frame.camera.look_at);
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Browser bindings
#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export commonly used types
pub use game::{FrameOutput, GameConfig, GameEvent, GameSession};
pub use input::{InputAction, InputState, KeyCode};
pub use world::{LevelId, ObstacleCatalog};
