//! Scenario Tests - Whole Sessions Driven Frame by Frame

use glam::Vec3;
use obby_engine::game::{GameConfig, GameEvent, GameSession, RespawnCause};
use obby_engine::input::{InputAction, InputState, KeyCode};
use obby_engine::physics::Shape;
use obby_engine::player::ControlScheme;
use obby_engine::world::{LevelId, Obstacle, ObstacleCatalog, ObstacleKind, SPAWN_POINT};

const FRAME: f32 = 1.0 / 60.0;

fn runway_with_checkpoint() -> ObstacleCatalog {
    ObstacleCatalog::new(
        vec![
            Obstacle::platform(Vec3::new(0.0, 0.0, 20.0), Shape::cuboid(4.0, 0.5, 60.0)),
            Obstacle::new(ObstacleKind::Checkpoint, Shape::cuboid(2.0, 4.0, 0.5), Vec3::new(0.0, 1.0, 8.0)),
        ],
        SPAWN_POINT,
    )
    .expect("valid catalog")
}

#[test]
fn test_walk_forward_reaches_checkpoint() {
    let checkpoint = Vec3::new(0.0, 1.0, 8.0);
    let config = GameConfig {
        control: ControlScheme::WorldRelative,
        ..GameConfig::default()
    };
    let mut session = GameSession::with_catalog(config, runway_with_checkpoint()).expect("valid session");
    let mut input = InputState::new();
    input.handle_key(KeyCode::W, true);

    let mut last_z = session.body().position.z;
    let mut reached_at = None;
    for frame in 0..60 {
        let output = session.advance_frame(&mut input, FRAME);
        let position = output.body.position;
        assert!(position.z > last_z, "z must increase every frame");
        last_z = position.z;

        let within = position.distance(checkpoint) <= 2.0;
        if reached_at.is_none() && within {
            reached_at = Some(frame);
            assert!(output.events.contains(&GameEvent::CheckpointReached { obstacle: 1, total: 1 }));
        }
        let expected = if reached_at.is_some() { 1 } else { 0 };
        assert_eq!(output.telemetry.checkpoints_reached, expected);
    }
    assert!(reached_at.is_some());
    assert_eq!(session.progress().respawn_point(), checkpoint);
}

#[test]
fn test_classic_fall_returns_to_first_checkpoint() {
    let mut session = GameSession::new(GameConfig::default()).expect("valid session");
    let mut input = InputState::new();
    input.set_action(InputAction::MoveForward, true);

    let mut respawn = None;
    for _ in 0..300 {
        let output = session.advance_frame(&mut input, FRAME);
        if let Some(event) = output.events.iter().find(|e| e.is_respawn()) {
            respawn = Some(*event);
            break;
        }
    }

    let Some(GameEvent::Respawned { cause, position }) = respawn else {
        panic!("walking straight off the first station should fall out of the world");
    };
    assert_eq!(cause, RespawnCause::FellOutOfWorld);
    assert_eq!(position, [0.0, 1.0, 8.0]);
    assert_eq!(session.body().position, Vec3::new(0.0, 1.0, 8.0));
    assert_eq!(session.progress().checkpoints_reached(), 1);
}

#[test]
fn test_idle_session_is_stable_on_every_level() {
    for level in LevelId::ALL {
        let config = GameConfig {
            level,
            ..GameConfig::default()
        };
        let mut session = GameSession::new(config).expect("valid session");
        let mut input = InputState::new();
        for _ in 0..120 {
            let output = session.advance_frame(&mut input, FRAME);
            assert!(!output.respawned(), "{level:?} respawned an idle body");
        }
        assert_eq!(session.body().position, SPAWN_POINT, "{level:?}");
        assert!(session.body().grounded);
    }
}

#[test]
fn test_jump_leaves_and_returns_to_ground() {
    let mut session = GameSession::new(GameConfig::default()).expect("valid session");
    let mut input = InputState::new();
    input.handle_key(KeyCode::Space, true);
    session.advance_frame(&mut input, FRAME);
    input.handle_key(KeyCode::Space, false);
    assert!(!session.body().grounded);
    assert!(session.body().velocity.y > 0.0);

    let mut landed = false;
    for _ in 0..120 {
        let output = session.advance_frame(&mut input, FRAME);
        if output.events.contains(&GameEvent::Landed { obstacle: 0 }) {
            landed = true;
            break;
        }
    }
    assert!(landed);
    assert_eq!(session.body().position, SPAWN_POINT);
}

#[test]
fn test_frame_output_serializes() {
    let mut session = GameSession::new(GameConfig::default()).expect("valid session");
    let mut input = InputState::new();
    let output = session.advance_frame(&mut input, FRAME);
    let json = serde_json::to_value(&output).expect("serializable");
    assert_eq!(json["telemetry"]["checkpoints_reached"], 0);
    assert_eq!(json["telemetry"]["finished"], false);
    assert!(json["body"]["position"].is_array());
    assert!(json["camera"]["look_at"].is_array());
}
