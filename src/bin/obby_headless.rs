//! Headless runner
//!
//! Drives a session at a fixed frame rate without a renderer, holding a fixed
//! set of logical keys for the whole run, and prints a JSON summary.
//!
//! Usage:
//!   obby_headless --level spiral_tower --hold forward,jump --frames 600
//!   RUST_LOG=debug obby_headless --config game.json --report-every 30

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use serde::Serialize;

use obby_engine::game::{FrameOutput, GameConfig, GameEvent, GameSession, Telemetry};
use obby_engine::input::{InputAction, InputState};
use obby_engine::player::ControlScheme;
use obby_engine::world::LevelId;

#[derive(Parser, Debug)]
#[command(name = "obby_headless", about = "Run the obby simulation without a renderer")]
struct Args {
    /// JSON game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Level recipe, overriding the configuration
    #[arg(long)]
    level: Option<String>,

    /// Control scheme, overriding the configuration
    #[arg(long)]
    scheme: Option<String>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Simulated frames per second
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Comma-separated logical keys held for the whole run (forward,left,jump,...)
    #[arg(long, value_delimiter = ',')]
    hold: Vec<String>,

    /// Log telemetry every N frames (0 disables)
    #[arg(long, default_value_t = 60)]
    report_every: u32,
}

#[derive(Serialize)]
struct Summary {
    level: LevelId,
    control: ControlScheme,
    frames: u32,
    summit: f32,
    telemetry: Telemetry,
    final_position: [f32; 3],
    respawns: usize,
    events: Vec<GameEvent>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(name) = &args.level {
        config.level = LevelId::from_name(name).ok_or_else(|| format!("unknown level '{name}'"))?;
    }
    if let Some(name) = &args.scheme {
        config.control =
            ControlScheme::from_name(name).ok_or_else(|| format!("unknown control scheme '{name}'"))?;
    }
    if !(args.fps.is_finite() && args.fps > 0.0) {
        return Err(format!("fps must be positive, got {}", args.fps).into());
    }

    let mut session = GameSession::new(config)?;
    let mut input = InputState::new();
    for name in &args.hold {
        match InputAction::from_name(name) {
            Some(action) => input.set_action(action, true),
            None => warn!("Ignoring unknown key '{}'", name),
        }
    }

    let dt = 1.0 / args.fps;
    let run = simulate(&mut session, &mut input, args.frames, dt, args.report_every);

    let summary = Summary {
        level: config.level,
        control: config.control,
        frames: run.frames,
        summit: session.catalog().summit(),
        telemetry: run.last.telemetry,
        final_position: run.last.body.position.to_array(),
        respawns: run.events.iter().filter(|e| e.is_respawn()).count(),
        events: run.events,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Result of a headless run.
struct Run {
    /// Frames actually simulated; fewer than requested when the level is finished early.
    frames: u32,
    last: FrameOutput,
    events: Vec<GameEvent>,
}

fn simulate(session: &mut GameSession, input: &mut InputState, frames: u32, dt: f32, report_every: u32) -> Run {
    let mut events = Vec::new();
    let mut last = session.snapshot(Vec::new());
    let mut frames_run = 0;
    for frame in 1..=frames {
        last = session.advance_frame(input, dt);
        frames_run = frame;
        if report_every > 0 && frame % report_every == 0 {
            let t = &last.telemetry;
            info!(
                "frame {:>5}: height {:>6.2}, checkpoints {}, grounded {}, speed x{:.1}",
                frame, t.height, t.checkpoints_reached, t.grounded, t.speed_multiplier
            );
        }
        events.extend(last.events.drain(..));
        if session.is_finished() {
            info!("Finished after {} frames", frame);
            break;
        }
    }
    Run {
        frames: frames_run,
        last,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obby_engine::physics::{Shape, Vec3};
    use obby_engine::world::{Obstacle, ObstacleCatalog, ObstacleKind};

    #[test]
    fn test_run_counts_simulated_frames() {
        let mut session = GameSession::new(GameConfig::default()).expect("valid");
        let mut input = InputState::new();
        let run = simulate(&mut session, &mut input, 12, 1.0 / 60.0, 0);
        assert_eq!(run.frames, 12);
        assert!(run.events.is_empty());
    }

    #[test]
    fn test_run_stops_at_victory() {
        let catalog = ObstacleCatalog::new(
            vec![Obstacle::new(ObstacleKind::VictoryPad, Shape::cuboid(8.0, 0.5, 8.0), Vec3::ZERO)],
            Vec3::new(0.0, 1.25, 0.0),
        )
        .expect("valid catalog");
        let mut session = GameSession::with_catalog(GameConfig::default(), catalog).expect("valid");
        let mut input = InputState::new();
        let run = simulate(&mut session, &mut input, 600, 1.0 / 60.0, 0);
        assert_eq!(run.frames, 1);
        assert!(run.last.telemetry.finished);
        assert!(run.events.iter().any(|e| matches!(e, GameEvent::VictoryReached { .. })));
    }
}
