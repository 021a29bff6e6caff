//! Game Session
//!
//! Owns the catalog and all play state for one level and drives the fixed
//! step order once per host frame. The host polls input into an
//! [`InputState`], calls [`GameSession::advance_frame`] with the elapsed
//! time, and applies the returned [`FrameOutput`] to its renderer and UI.
//!
//! # Example
//!
//! ```rust,ignore
//! use obby_engine::game::{GameConfig, GameSession};
//! use obby_engine::input::{InputState, KeyCode};
//!
//! let mut session = GameSession::new(GameConfig::default())?;
//! let mut input = InputState::new();
//! input.handle_key(KeyCode::W, true);
//! let frame = session.advance_frame(&mut input, 1.0 / 60.0);
//! println!("height {:.1}", frame.telemetry.height);
//! ```

use log::{debug, info, warn};

use crate::camera::FollowCamera;
use crate::input::InputState;
use crate::physics::split_frame;
use crate::player::{Body, ControlScheme, RespawnController};
use crate::world::{ObstacleCatalog, ObstacleKind};

use super::config::{ConfigError, GameConfig};
use super::events::GameEvent;
use super::output::{BodyPose, FrameOutput, Telemetry};
use super::simulation::{PlayState, StepOutcome, step};

/// A running level.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    catalog: ObstacleCatalog,
    state: PlayState,
}

impl GameSession {
    /// Validate `config` and build its level.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = config.level.build()?;
        Self::with_catalog(config, catalog)
    }

    /// Start a session on a hand-built catalog; `config.level` is ignored.
    pub fn with_catalog(config: GameConfig, catalog: ObstacleCatalog) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "Session started: level {}, {} obstacles, {} checkpoints, control {:?}",
            config.level.name(),
            catalog.len(),
            catalog.count_of(ObstacleKind::Checkpoint),
            config.control
        );
        let state = Self::fresh_state(&config, &catalog);
        Ok(Self {
            config,
            catalog,
            state,
        })
    }

    fn fresh_state(config: &GameConfig, catalog: &ObstacleCatalog) -> PlayState {
        let body = Body::at_spawn(catalog.spawn());
        PlayState {
            camera: FollowCamera::new(config.camera, body.position),
            progress: RespawnController::new(catalog, config.physics.fall_margin),
            body,
            time: 0.0,
            finished: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ObstacleCatalog {
        &self.catalog
    }

    pub fn body(&self) -> &Body {
        &self.state.body
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.state.camera
    }

    pub fn progress(&self) -> &RespawnController {
        &self.state.progress
    }

    /// Simulated seconds since the session started.
    pub fn time(&self) -> f32 {
        self.state.time
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    /// Switch control scheme between frames.
    pub fn set_control_scheme(&mut self, scheme: ControlScheme) {
        self.config.control = scheme;
    }

    /// Start the level over from the spawn point with no progress.
    pub fn restart(&mut self) {
        info!("Session restarted");
        self.state = Self::fresh_state(&self.config, &self.catalog);
    }

    /// Advance the simulation by one host frame of `frame_dt` seconds.
    ///
    /// Camera keys and pointer drags orbit the camera once per frame; the
    /// frame is then split into sub-steps no longer than `max_substep`. A
    /// respawn drops whatever sub-steps remain. A non-finite or non-positive
    /// `frame_dt` leaves the state untouched.
    pub fn advance_frame(&mut self, input: &mut InputState, frame_dt: f32) -> FrameOutput {
        let mut events = Vec::new();
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            debug!("Ignoring frame with dt={}", frame_dt);
            return self.snapshot(events);
        }

        let (dx, dy) = input.pointer.consume_delta();
        if dx != 0.0 || dy != 0.0 {
            self.state.camera.orbit_pointer(dx, dy);
        }
        self.state.camera.orbit_keys(&input.camera_keys(), frame_dt);

        let keys = input.movement();
        let substeps = split_frame(frame_dt, self.config.physics.max_substep);
        let cap = self.config.physics.max_substeps_per_frame;
        if substeps.remaining() > u64::from(cap) {
            warn!(
                "Frame dt={} needs {} sub-steps; running {} and dropping the rest",
                frame_dt,
                substeps.remaining(),
                cap
            );
        } else if substeps.remaining() > 1 {
            debug!("Frame dt={:.4} split into {} sub-steps", frame_dt, substeps.remaining());
        }

        for dt in substeps.take(cap as usize) {
            let outcome = step(
                &mut self.state,
                &self.catalog,
                &self.config.physics,
                &keys,
                self.config.control,
                dt,
                &mut events,
            );
            if let StepOutcome::Respawned(_) = outcome {
                break;
            }
        }

        self.snapshot(events)
    }

    /// Current pose and telemetry with the given events attached.
    pub fn snapshot(&self, events: Vec<GameEvent>) -> FrameOutput {
        let body = &self.state.body;
        FrameOutput {
            body: BodyPose::from(body),
            camera: self.state.camera.pose(),
            telemetry: Telemetry {
                height: body.position.y,
                checkpoints_reached: self.state.progress.checkpoints_reached(),
                finished: self.state.finished,
                grounded: body.grounded,
                speed_multiplier: body.speed_multiplier(),
                time: self.state.time,
            },
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputAction, KeyCode};
    use crate::world::{LevelId, SPAWN_POINT};

    #[test]
    fn test_every_level_starts() {
        for level in LevelId::ALL {
            let config = GameConfig {
                level,
                ..GameConfig::default()
            };
            let session = GameSession::new(config).expect("built-in levels are valid");
            assert_eq!(session.body().position, SPAWN_POINT);
        }
    }

    #[test]
    fn test_bad_frame_is_noop() {
        let mut session = GameSession::new(GameConfig::default()).expect("valid");
        let mut input = InputState::new();
        input.handle_key(KeyCode::W, true);
        for dt in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let frame = session.advance_frame(&mut input, dt);
            assert!(frame.events.is_empty());
        }
        assert_eq!(session.time(), 0.0);
        assert_eq!(session.body().position, SPAWN_POINT);
    }

    #[test]
    fn test_long_frame_is_substepped() {
        let mut session = GameSession::new(GameConfig::default()).expect("valid");
        let mut input = InputState::new();
        session.advance_frame(&mut input, 0.1);
        assert!((session.time() - 0.1).abs() < 1e-6);
        // Sub-stepping keeps the resting body on the spawn pad.
        assert_eq!(session.body().position, SPAWN_POINT);
        assert!(session.body().grounded);
    }

    #[test]
    fn test_huge_frame_runs_capped_substeps() {
        let mut config = GameConfig::default();
        config.physics.max_substeps_per_frame = 60;
        let mut session = GameSession::new(config).expect("valid");
        let mut input = InputState::new();

        let frame = session.advance_frame(&mut input, 1.0e12);
        assert!((session.time() - 1.0).abs() < 1e-3);
        assert!(frame.body.position.is_finite());
        assert_eq!(session.body().position, SPAWN_POINT);
    }

    #[test]
    fn test_walking_forward_moves_along_z() {
        let mut session = GameSession::new(GameConfig::default()).expect("valid");
        let mut input = InputState::new();
        input.set_action(InputAction::MoveForward, true);
        let frame = session.advance_frame(&mut input, 0.25);
        assert!(frame.body.position.z > 2.0);
        assert!(frame.body.position.x.abs() < 1e-4);
    }

    #[test]
    fn test_restart_clears_progress() {
        let mut session = GameSession::new(GameConfig::default()).expect("valid");
        let mut input = InputState::new();
        input.set_action(InputAction::MoveForward, true);
        session.advance_frame(&mut input, 0.25);
        session.restart();
        assert_eq!(session.body().position, SPAWN_POINT);
        assert_eq!(session.time(), 0.0);
        assert_eq!(session.progress().checkpoints_reached(), 0);
    }
}
