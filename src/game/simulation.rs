//! Simulation step
//!
//! One fixed-order pass over the mutable play state:
//!
//! 1. Speed boost countdown
//! 2. Platform carry for a body standing on a kinematic obstacle
//! 3. Input mapping and integration
//! 4. Collision resolution (a kill zone respawns and ends the step)
//! 5. Effectors, checkpoints and victory
//! 6. Fall-through check
//! 7. Camera follow
//!
//! The catalog and tuning are read-only; everything that changes lives in
//! [`PlayState`]. Nothing here is fallible.

use log::{debug, info};

use crate::camera::FollowCamera;
use crate::input::MovementKeys;
use crate::physics::types::wrap_angle;
use crate::physics::{PhysicsTuning, Resolution, integrate, resolve};
use crate::player::{Body, ControlScheme, MappingContext, RespawnController};
use crate::world::{ObstacleCatalog, ObstacleKind};

use super::events::{GameEvent, RespawnCause};

/// Mutable state of one play session.
#[derive(Debug, Clone)]
pub struct PlayState {
    pub body: Body,
    pub camera: FollowCamera,
    pub progress: RespawnController,
    /// Simulated seconds; drives kinematic obstacle poses.
    pub time: f32,
    /// Set once the body has stood on a victory pad.
    pub finished: bool,
}

/// Result of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continued,
    /// The body was respawned; the rest of the frame must be dropped.
    Respawned(RespawnCause),
}

/// Advance `state` by one sub-step of `dt` seconds.
///
/// # Arguments
///
/// * `state` - Body, camera, checkpoint progress and clock
/// * `catalog` - Level obstacles
/// * `tuning` - Physics constants
/// * `keys` - Movement keys held during the step
/// * `scheme` - Control scheme mapping the keys
/// * `dt` - Step length in seconds, already clamped by frame splitting
/// * `events` - Receives the events produced by the step
pub fn step(
    state: &mut PlayState,
    catalog: &ObstacleCatalog,
    tuning: &PhysicsTuning,
    keys: &MovementKeys,
    scheme: ControlScheme,
    dt: f32,
    events: &mut Vec<GameEvent>,
) -> StepOutcome {
    if !dt.is_finite() || dt <= 0.0 {
        return StepOutcome::Continued;
    }
    let start = state.time;
    let end = start + dt;
    state.time = end;

    if state.body.boost.tick(dt) {
        debug!("Speed boost expired at t={:.2}", end);
        events.push(GameEvent::SpeedBoostExpired);
    }

    carry(&mut state.body, catalog, start, end);

    let context = MappingContext {
        body_position: state.body.position,
        body_facing: state.body.facing,
        camera_position: state.camera.position(),
        camera_heading: state.camera.heading(),
        turn_rate: tuning.turn_rate,
    };
    let intent = scheme.mapper().map_input(keys, &context, dt);

    let was_grounded = state.body.grounded;
    let tentative = integrate(&mut state.body, &intent, tuning, dt);

    let settled = match resolve(tentative, &state.body, catalog, end, tuning) {
        Resolution::Killed { obstacle } => {
            return respawn(state, RespawnCause::KillZone { obstacle }, events);
        }
        Resolution::Settled(settled) => settled,
    };

    let body = &mut state.body;
    body.position = settled.position;
    body.velocity = settled.velocity;
    body.grounded = settled.grounded;
    body.support = settled.support;

    if let Some(obstacle) = settled.support {
        if !was_grounded {
            debug!("Landed on obstacle {} at y={:.2}", obstacle, body.position.y);
            events.push(GameEvent::Landed { obstacle });
        }
        let on_victory_pad = catalog
            .get(obstacle)
            .is_some_and(|o| o.kind == ObstacleKind::VictoryPad);
        if on_victory_pad && !state.finished {
            state.finished = true;
            info!("Victory reached at t={:.2}", end);
            events.push(GameEvent::VictoryReached { obstacle });
        }
    }

    if let Some(obstacle) = settled.jump_pad {
        debug!("Jump pad {} launched body at vy={:.1}", obstacle, body.velocity.y);
        events.push(GameEvent::JumpPadLaunched { obstacle });
    }

    if let Some(obstacle) = settled.speed_pad {
        let was_boosted = body.boost.is_active();
        body.boost
            .activate(tuning.speed_pad_multiplier, tuning.speed_pad_duration);
        if !was_boosted {
            debug!("Speed pad {} boost x{:.1}", obstacle, tuning.speed_pad_multiplier);
            events.push(GameEvent::SpeedBoosted { obstacle });
        }
    }

    if let Some(touch) = state
        .progress
        .check_checkpoint(body.position, catalog, end, tuning.checkpoint_radius)
    {
        if touch.first_visit {
            events.push(GameEvent::CheckpointReached {
                obstacle: touch.obstacle,
                total: state.progress.checkpoints_reached(),
            });
        }
    }

    if state.progress.has_fallen(state.body.position) {
        return respawn(state, RespawnCause::FellOutOfWorld, events);
    }

    state.camera.follow(state.body.position);
    StepOutcome::Continued
}

/// Move a body standing on a kinematic obstacle along with it from `start` to `end`.
fn carry(body: &mut Body, catalog: &ObstacleCatalog, start: f32, end: f32) {
    if !body.grounded {
        return;
    }
    let Some(obstacle) = body.support.and_then(|i| catalog.get(i)) else {
        return;
    };
    if !obstacle.is_kinematic() {
        return;
    }
    let from = obstacle.pose_at(start);
    let to = obstacle.pose_at(end);
    body.position = from.carry(body.position, &to);
    body.facing = wrap_angle(body.facing + (to.yaw - from.yaw));
}

fn respawn(state: &mut PlayState, cause: RespawnCause, events: &mut Vec<GameEvent>) -> StepOutcome {
    let point = state.progress.respawn(&mut state.body);
    info!(
        "Respawned at ({:.1}, {:.1}, {:.1}) after {:?}",
        point.x, point.y, point.z, cause
    );
    events.push(GameEvent::Respawned {
        cause,
        position: point.to_array(),
    });
    state.camera.follow(point);
    StepOutcome::Respawned(cause)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraConfig;
    use crate::physics::Shape;
    use crate::physics::types::Vec3;
    use crate::world::Obstacle;

    const DT: f32 = 1.0 / 64.0;

    fn state_for(catalog: &ObstacleCatalog, tuning: &PhysicsTuning) -> PlayState {
        let body = Body::at_spawn(catalog.spawn());
        PlayState {
            camera: FollowCamera::new(CameraConfig::default(), body.position),
            progress: RespawnController::new(catalog, tuning.fall_margin),
            body,
            time: 0.0,
            finished: false,
        }
    }

    fn pad() -> Obstacle {
        Obstacle::platform(Vec3::ZERO, Shape::cuboid(12.0, 0.5, 12.0))
    }

    #[test]
    fn test_resting_body_stays_put() {
        let catalog = ObstacleCatalog::new(vec![pad()], Vec3::new(0.0, 1.25, 0.0)).expect("valid catalog");
        let tuning = PhysicsTuning::default();
        let mut state = state_for(&catalog, &tuning);
        let mut events = Vec::new();
        for _ in 0..10 {
            let outcome = step(&mut state, &catalog, &tuning, &MovementKeys::default(), ControlScheme::WorldRelative, DT, &mut events);
            assert_eq!(outcome, StepOutcome::Continued);
        }
        assert_eq!(state.body.position, Vec3::new(0.0, 1.25, 0.0));
        assert!(state.body.grounded);
        // Spawned grounded, so there is no landing to report.
        assert!(events.is_empty());
    }

    #[test]
    fn test_kill_zone_respawns_and_stops() {
        let catalog = ObstacleCatalog::new(
            vec![
                pad(),
                Obstacle::new(ObstacleKind::KillZone, Shape::cuboid(2.0, 1.0, 2.0), Vec3::new(0.0, 1.0, 0.5)),
            ],
            Vec3::new(0.0, 1.25, -4.0),
        )
        .expect("valid catalog");
        let tuning = PhysicsTuning::default();
        let mut state = state_for(&catalog, &tuning);
        state.body.position = Vec3::new(0.0, 1.25, 0.0);
        let mut events = Vec::new();

        let outcome = step(&mut state, &catalog, &tuning, &MovementKeys::default(), ControlScheme::WorldRelative, DT, &mut events);
        assert_eq!(outcome, StepOutcome::Respawned(RespawnCause::KillZone { obstacle: 1 }));
        assert_eq!(state.body.position, Vec3::new(0.0, 1.25, -4.0));
        assert_eq!(state.body.velocity, Vec3::ZERO);
        assert!(state.body.grounded);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_victory_fires_once() {
        let catalog = ObstacleCatalog::new(
            vec![Obstacle::new(ObstacleKind::VictoryPad, Shape::cuboid(8.0, 0.5, 8.0), Vec3::ZERO)],
            Vec3::new(0.0, 1.25, 0.0),
        )
        .expect("valid catalog");
        let tuning = PhysicsTuning::default();
        let mut state = state_for(&catalog, &tuning);
        let mut events = Vec::new();
        for _ in 0..5 {
            step(&mut state, &catalog, &tuning, &MovementKeys::default(), ControlScheme::WorldRelative, DT, &mut events);
        }
        assert!(state.finished);
        let victories = events
            .iter()
            .filter(|e| matches!(e, GameEvent::VictoryReached { .. }))
            .count();
        assert_eq!(victories, 1);
    }

    #[test]
    fn test_moving_platform_carries_body() {
        let platform = Obstacle::moving_platform(Vec3::ZERO, Shape::cuboid(4.0, 0.5, 4.0), Vec3::X, 4.0, 0.8);
        let catalog = ObstacleCatalog::new(vec![platform], Vec3::new(0.0, 1.25, 0.0)).expect("valid catalog");
        let tuning = PhysicsTuning::default();
        let mut state = state_for(&catalog, &tuning);
        state.body.support = Some(0);
        let mut events = Vec::new();
        for _ in 0..16 {
            step(&mut state, &catalog, &tuning, &MovementKeys::default(), ControlScheme::WorldRelative, DT, &mut events);
        }
        let expected_x = catalog.get(0).expect("platform").pose_at(state.time).center.x;
        assert!((state.body.position.x - expected_x).abs() < 1e-4);
        assert!(state.body.grounded);
        assert_eq!(state.body.support, Some(0));
    }
}
